//! Command line parser - turns argv into an Invocation

use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::application::errors::{ConfigError, SparkError, UsageError};
use crate::domain::entities::{Command, ObjectKind, Verb};
use crate::infrastructure::config::{resolve_token, ApiConfig, Config, TokenSource};

#[derive(Parser, Debug)]
#[command(name = "spark")]
#[command(about = "Command-line client for the Cisco Spark API", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("verb").args(["list", "create", "delete"])))]
pub struct Cli {
    /// List OBJECTs
    #[arg(short, long, value_name = "OBJECT")]
    pub list: Option<String>,

    /// Create an OBJECT
    #[arg(short, long, value_name = "OBJECT")]
    pub create: Option<String>,

    /// Delete an OBJECT
    #[arg(short, long, value_name = "OBJECT")]
    pub delete: Option<String>,

    /// Access token (overrides environment and config)
    #[arg(short, long, value_name = "TOKEN")]
    pub auth: Option<String>,

    /// Room id or title, message id, person id or email
    #[arg(short, long, value_name = "IDENTIFIER")]
    pub id: Option<String>,

    /// Log requests and responses
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show usage
    #[arg(short, long)]
    pub help: bool,

    /// Message text, room title, email, ..
    #[arg(value_name = "DATA")]
    pub data: Vec<String>,
}

/// Everything one run of the client needs
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    /// Empty when no source supplied one
    pub auth: String,
    /// Raw identifier as typed
    pub id: String,
    pub data: String,
    pub verbose: bool,
    pub api: ApiConfig,
}

impl Invocation {
    pub fn require_auth(&self) -> Result<&str, ConfigError> {
        if self.auth.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(&self.auth)
    }
}

/// Parses argv, falling back to `sources` for the token
pub struct CommandParser {
    sources: Vec<TokenSource>,
}

impl CommandParser {
    pub fn new(sources: Vec<TokenSource>) -> Self {
        Self { sources }
    }

    pub fn parse<I, T>(&self, args: I) -> Result<Invocation, SparkError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| UsageError::Arguments(clap_message(&e)))?;

        if cli.help {
            return Err(UsageError::HelpRequested.into());
        }

        let (verb, object) = match (&cli.list, &cli.create, &cli.delete) {
            (Some(object), _, _) => (Verb::List, object),
            (_, Some(object), _) => (Verb::Create, object),
            (_, _, Some(object)) => (Verb::Delete, object),
            _ => return Err(UsageError::MissingVerb.into()),
        };
        let object: ObjectKind = object.parse()?;
        let command = Command::from_parts(verb, object)
            .ok_or(UsageError::Unsupported { verb, object })?;

        if cli.data.len() > 1 {
            return Err(UsageError::TooManyArguments(cli.data.len()).into());
        }
        let data = cli.data.into_iter().next().unwrap_or_default();

        let mut sources = self.sources.clone();
        let api = match &cli.config {
            Some(path) => {
                let config = Config::load(path)?;
                sources.push(TokenSource::file(path, &config));
                config.api
            }
            None => ApiConfig::default(),
        };
        let auth = resolve_token(cli.auth.as_deref(), &sources);

        tracing::debug!("Parsed command: {}", command);

        Ok(Invocation {
            command,
            auth,
            id: cli.id.unwrap_or_default(),
            data,
            verbose: cli.verbose,
            api,
        })
    }
}

/// Whether `-v`/`--verbose` appears in `args`, so logging can be set up
/// before the full parse runs.
pub fn verbose_requested(args: &[OsString]) -> bool {
    let mut skip_value = false;
    for arg in args.iter().skip(1) {
        if std::mem::take(&mut skip_value) {
            continue;
        }
        let Some(arg) = arg.to_str() else { continue };
        match arg {
            "--" => return false,
            "--verbose" => return true,
            "--list" | "--create" | "--delete" | "--auth" | "--id" | "--config" => skip_value = true,
            _ if arg.starts_with("--") => {}
            _ if arg.starts_with('-') => {
                // clustered short flags, anything after a value flag is its value
                for (i, c) in arg.char_indices().skip(1) {
                    match c {
                        'v' => return true,
                        'l' | 'c' | 'd' | 'a' | 'i' => {
                            skip_value = i + 1 == arg.len();
                            break;
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    false
}

/// First line of a clap error without its `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}
