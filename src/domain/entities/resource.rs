//! Spark resources as returned by the REST API

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::identifier::is_hash;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub display_name: String,
}

impl Person {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub person_email: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default)]
    pub is_monitor: bool,
}

/// Which memberships to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipFilter {
    All,
    Room(String),
    Person(String),
}

/// Which people to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeopleQuery {
    Me,
    ById(String),
    ByEmail(String),
    ByDisplayName(String),
}

impl PeopleQuery {
    /// Route text typed by the user. Canonical ids from a lookup are not
    /// hash shaped, callers wrap those in `ById` directly.
    pub fn from_input(input: &str) -> Self {
        if input == "me" {
            PeopleQuery::Me
        } else if input.contains('@') {
            PeopleQuery::ByEmail(input.to_string())
        } else if is_hash(input) {
            PeopleQuery::ById(input.to_string())
        } else {
            PeopleQuery::ByDisplayName(input.to_string())
        }
    }
}
