//! One line per record

use crate::domain::entities::{Membership, Message, Person, Room};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn message_line(message: &Message) -> String {
    let email = message.person_email.as_deref().unwrap_or_default();
    let text = message.text.as_deref().unwrap_or_default();
    match message.created {
        Some(created) => format!(
            "{}  {}  {:<20}  \"{}\"",
            message.id,
            created.format(TIME_FORMAT),
            email,
            text
        ),
        None => format!("{}  {:<20}  \"{}\"", message.id, email, text),
    }
}

pub fn room_line(room: &Room) -> String {
    format!("{} \"{}\"", room.id, room.title)
}

/// People without an email address are not printed
pub fn person_line(person: &Person) -> Option<String> {
    person
        .primary_email()
        .map(|email| format!("{} <{}>  {}", person.id, email, person.display_name))
}

pub fn membership_line(membership: &Membership) -> String {
    format!(
        "{} mod: {} mon: {} {}",
        membership.id, membership.is_moderator, membership.is_monitor, membership.room_id
    )
}
