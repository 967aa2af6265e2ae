use async_trait::async_trait;

use crate::application::errors::ApiError;
use crate::domain::entities::{Membership, MembershipFilter, Message, PeopleQuery, Person, Room};

/// SparkApi trait - typed operations on the messaging platform
///
/// Lookups return an empty string when nothing matches.
#[async_trait]
pub trait SparkApi: Send + Sync {
    /// Person id for an email address
    async fn get_id_by_email(&self, email: &str) -> Result<String, ApiError>;

    /// Room id for an exact room title
    async fn get_id_by_room_name(&self, name: &str) -> Result<String, ApiError>;

    async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError>;

    /// All rooms of the user, or the single room with `room_id`
    async fn list_rooms(&self, room_id: Option<&str>) -> Result<Vec<Room>, ApiError>;

    /// People matching an id, an email, a display name prefix or `me`
    async fn list_people(&self, query: &PeopleQuery) -> Result<Vec<Person>, ApiError>;

    async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>, ApiError>;

    /// Post to a room
    async fn create_message(&self, text: &str, room_id: &str) -> Result<Message, ApiError>;

    /// Post a personal message
    async fn create_pm(&self, text: &str, person_id: &str) -> Result<Message, ApiError>;

    async fn create_room(&self, title: &str) -> Result<Room, ApiError>;

    async fn create_membership(&self, room_id: &str, email: &str) -> Result<Membership, ApiError>;

    async fn delete_message(&self, message_id: &str) -> Result<(), ApiError>;

    async fn delete_room(&self, room_id: &str) -> Result<(), ApiError>;
}
