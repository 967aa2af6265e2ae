use std::fmt;
use std::str::FromStr;

use crate::application::errors::UsageError;

/// What to do with an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    List,
    Create,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Create => "create",
            Verb::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of platform resource a command acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Message,
    Room,
    Person,
    Membership,
}

/// Accepted spellings per object, the first one is canonical
const OBJECT_ALIASES: [(ObjectKind, &[&str]); 4] = [
    (ObjectKind::Message, &["message", "messages"]),
    (ObjectKind::Room, &["room", "rooms"]),
    (ObjectKind::Person, &["people", "person", "persons"]),
    (ObjectKind::Membership, &["membership", "memberships"]),
];

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Message => "message",
            ObjectKind::Room => "room",
            ObjectKind::Person => "people",
            ObjectKind::Membership => "membership",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = UsageError;

    /// Exact alias match first, then a prefix that names exactly one object.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim().to_lowercase();
        let unknown = || UsageError::UnknownObject { input: input.to_string() };

        if needle.is_empty() {
            return Err(unknown());
        }

        if let Some((kind, _)) = OBJECT_ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&needle.as_str()))
        {
            return Ok(*kind);
        }

        let mut candidates = OBJECT_ALIASES
            .iter()
            .filter(|(_, aliases)| aliases.iter().any(|a| a.starts_with(&needle)))
            .map(|(kind, _)| *kind);

        match (candidates.next(), candidates.next()) {
            (Some(kind), None) => Ok(kind),
            _ => Err(unknown()),
        }
    }
}

/// A wired (verb, object) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListMessages,
    ListRooms,
    ListPeople,
    ListMemberships,
    CreateMessage,
    CreateRoom,
    CreateMembership,
    DeleteMessage,
    DeleteRoom,
}

impl Command {
    /// `None` for combinations the client does not support.
    pub fn from_parts(verb: Verb, object: ObjectKind) -> Option<Self> {
        use ObjectKind::*;

        match (verb, object) {
            (Verb::List, Message) => Some(Command::ListMessages),
            (Verb::List, Room) => Some(Command::ListRooms),
            (Verb::List, Person) => Some(Command::ListPeople),
            (Verb::List, Membership) => Some(Command::ListMemberships),
            (Verb::Create, Message) => Some(Command::CreateMessage),
            (Verb::Create, Room) => Some(Command::CreateRoom),
            (Verb::Create, Membership) => Some(Command::CreateMembership),
            (Verb::Create, Person) => None,
            (Verb::Delete, Message) => Some(Command::DeleteMessage),
            (Verb::Delete, Room) => Some(Command::DeleteRoom),
            (Verb::Delete, Person | Membership) => None,
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            Command::ListMessages
            | Command::ListRooms
            | Command::ListPeople
            | Command::ListMemberships => Verb::List,
            Command::CreateMessage | Command::CreateRoom | Command::CreateMembership => {
                Verb::Create
            }
            Command::DeleteMessage | Command::DeleteRoom => Verb::Delete,
        }
    }

    pub fn object(&self) -> ObjectKind {
        match self {
            Command::ListMessages | Command::CreateMessage | Command::DeleteMessage => {
                ObjectKind::Message
            }
            Command::ListRooms | Command::CreateRoom | Command::DeleteRoom => ObjectKind::Room,
            Command::ListPeople => ObjectKind::Person,
            Command::ListMemberships | Command::CreateMembership => ObjectKind::Membership,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb(), self.object())
    }
}
