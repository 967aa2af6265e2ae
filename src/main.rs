use std::ffi::OsString;
use std::io::Write;

mod domain;
mod application;
mod infrastructure;

use application::errors::SparkError;
use application::parser::{verbose_requested, CommandParser, Invocation};
use application::services::CommandService;
use application::usage::USAGE;
use infrastructure::adapters::SparkClient;
use infrastructure::config::{TokenSource, AUTH_ENV};

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    init_logging(verbose_requested(&args));

    let parser = CommandParser::new(vec![TokenSource::env(AUTH_ENV)]);
    let result = parser
        .parse(args)
        .and_then(|invocation| {
            invocation.require_auth()?;
            run(&invocation)
        });

    if let Err(e) = result {
        tracing::debug!("Exiting on error: {:?}", e);
        print_usage(&e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .init();
}

fn run(invocation: &Invocation) -> Result<(), SparkError> {
    let client = SparkClient::new(invocation.auth.as_str(), &invocation.api)?
        .with_debug(invocation.verbose);
    let service = CommandService::new(&client);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SparkError::Runtime(e.to_string()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    rt.block_on(service.execute(invocation, &mut out))?;
    out.flush()?;

    Ok(())
}

fn print_usage(error: &SparkError) {
    let mut stderr = std::io::stderr().lock();
    if !error.is_help() {
        let _ = writeln!(stderr, "Error, {}\n", error);
    }
    let _ = write!(stderr, "{}", USAGE);
}
