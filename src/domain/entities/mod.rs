//! Domain entities - Core business objects

pub mod command;
pub mod identifier;
pub mod resource;

pub use command::{Command, ObjectKind, Verb};
pub use identifier::IdKind;
pub use resource::{Membership, MembershipFilter, Message, PeopleQuery, Person, Room};
