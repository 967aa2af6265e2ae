use std::io::Write;

use crate::application::errors::{SparkError, UsageError};
use crate::application::output::{membership_line, message_line, person_line, room_line};
use crate::application::parser::Invocation;
use crate::application::services::resolver::resolve;
use crate::domain::entities::{Command, IdKind, MembershipFilter, ObjectKind, PeopleQuery};
use crate::domain::traits::SparkApi;

/// Runs one parsed command against the Spark API
pub struct CommandService<'a> {
    api: &'a dyn SparkApi,
}

impl<'a> CommandService<'a> {
    pub fn new(api: &'a dyn SparkApi) -> Self {
        Self { api }
    }

    /// Resolve the identifier, then issue exactly one primary call and print its records.
    pub async fn execute<W: Write>(&self, invocation: &Invocation, out: &mut W) -> Result<(), SparkError> {
        let object = invocation.command.object();
        let kind = IdKind::classify(&invocation.id);
        let canonical = resolve(self.api, &invocation.id, object).await?;
        let id = effective_id(&invocation.id, kind, object, canonical)?;
        let data = invocation.data.as_str();

        tracing::info!("Running {} (id: \"{}\", {})", invocation.command, id, kind);

        match invocation.command {
            Command::ListMessages => {
                require_id(&id, "message id/room")?;
                for message in self.api.list_messages(&id).await? {
                    writeln!(out, "{}", message_line(&message))?;
                }
            }
            Command::ListRooms => {
                let room_id = Some(id.as_str()).filter(|id| !id.is_empty());
                for room in self.api.list_rooms(room_id).await? {
                    writeln!(out, "{}", room_line(&room))?;
                }
            }
            Command::ListPeople => {
                let query = match kind {
                    IdKind::Email | IdKind::Hash => PeopleQuery::ById(id.clone()),
                    IdKind::Name => PeopleQuery::from_input(&id),
                    IdKind::Undefined => {
                        require_id(data, "id/name/email")?;
                        PeopleQuery::from_input(data)
                    }
                };
                for person in self.api.list_people(&query).await? {
                    if let Some(line) = person_line(&person) {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
            Command::ListMemberships => {
                let filter = match kind {
                    _ if id.is_empty() => MembershipFilter::All,
                    IdKind::Email => MembershipFilter::Person(id.clone()),
                    _ => MembershipFilter::Room(id.clone()),
                };
                for membership in self.api.list_memberships(&filter).await? {
                    writeln!(out, "{}", membership_line(&membership))?;
                }
            }
            Command::CreateMessage => {
                require_id(&id, "id/room")?;
                require_data(data, "message")?;
                let message = if kind == IdKind::Email {
                    self.api.create_pm(data, &id).await?
                } else {
                    self.api.create_message(data, &id).await?
                };
                writeln!(out, "{}", message_line(&message))?;
            }
            Command::CreateRoom => {
                require_data(data, "name")?;
                let room = self.api.create_room(data).await?;
                writeln!(out, "{}", room_line(&room))?;
            }
            Command::CreateMembership => {
                require_id(&id, "roomId")?;
                require_data(data, "email")?;
                let membership = self.api.create_membership(&id, data).await?;
                writeln!(out, "{}", membership_line(&membership))?;
            }
            Command::DeleteMessage => {
                require_id(&id, "id")?;
                self.api.delete_message(&id).await?;
            }
            Command::DeleteRoom => {
                require_id(&id, "id/name")?;
                self.api.delete_room(&id).await?;
            }
        }

        Ok(())
    }
}

/// The id a command works with after resolution.
///
/// A failed lookup is reported here, before any primary call is made.
pub fn effective_id(
    raw_id: &str,
    kind: IdKind,
    object: ObjectKind,
    canonical: String,
) -> Result<String, UsageError> {
    match (kind, object) {
        (IdKind::Undefined, _) => Ok(String::new()),
        (IdKind::Hash, _) | (IdKind::Name, ObjectKind::Person) => Ok(raw_id.to_string()),
        _ if canonical.is_empty() => Err(UsageError::Unresolved { id: raw_id.to_string() }),
        _ => Ok(canonical),
    }
}

fn require_id(id: &str, what: &'static str) -> Result<(), UsageError> {
    if id.is_empty() {
        return Err(UsageError::MissingId(what));
    }
    Ok(())
}

fn require_data(data: &str, what: &'static str) -> Result<(), UsageError> {
    if data.is_empty() {
        return Err(UsageError::MissingData(what));
    }
    Ok(())
}
