//! Spark REST adapter

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::errors::ApiError;
use crate::domain::entities::{Membership, MembershipFilter, Message, PeopleQuery, Person, Room};
use crate::domain::traits::SparkApi;
use crate::infrastructure::config::ApiConfig;

/// List responses wrap their records in `items`
#[derive(Debug, Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

/// Spark API client
pub struct SparkClient {
    token: String,
    client: Client,
    base_url: String,
    debug: bool,
}

impl SparkClient {
    pub fn new(token: impl Into<String>, api: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("spark/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            token: token.into(),
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            debug: false,
        })
    }

    /// Log every request and response body
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let url = self.url(path);
        if self.debug {
            tracing::debug!("GET {} {:?}", url, query);
        }

        let response = self.client
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.read_json(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        if self.debug {
            tracing::debug!(
                "POST {} {}",
                url,
                serde_json::to_string(body).unwrap_or_default()
            );
        }

        let response = self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        if self.debug {
            tracing::debug!("DELETE {}", url);
        }

        let response = self.client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let response = check_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if self.debug {
            tracing::debug!("Response: {}", body);
        }

        parse_body(&body)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, body))
}

/// Error for a non-success response
fn status_error(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Auth(body),
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => ApiError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMessageRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    room_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_person_id: Option<&'a str>,
    text: &'a str,
}

#[derive(Serialize)]
struct CreateRoomRequest<'a> {
    title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateMembershipRequest<'a> {
    room_id: &'a str,
    person_email: &'a str,
}

#[async_trait]
impl SparkApi for SparkClient {
    async fn get_id_by_email(&self, email: &str) -> Result<String, ApiError> {
        let people: Items<Person> = self.get("people", &[("email", email)]).await?;
        Ok(people.items.into_iter().next().map(|p| p.id).unwrap_or_default())
    }

    async fn get_id_by_room_name(&self, name: &str) -> Result<String, ApiError> {
        let rooms: Items<Room> = self.get("rooms", &[]).await?;
        Ok(rooms
            .items
            .into_iter()
            .find(|r| r.title == name)
            .map(|r| r.id)
            .unwrap_or_default())
    }

    async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError> {
        let messages: Items<Message> = self.get("messages", &[("roomId", room_id)]).await?;
        Ok(messages.items)
    }

    async fn list_rooms(&self, room_id: Option<&str>) -> Result<Vec<Room>, ApiError> {
        match room_id {
            Some(id) => {
                let room: Room = self.get(&format!("rooms/{}", id), &[]).await?;
                Ok(vec![room])
            }
            None => {
                let rooms: Items<Room> = self.get("rooms", &[]).await?;
                Ok(rooms.items)
            }
        }
    }

    async fn list_people(&self, query: &PeopleQuery) -> Result<Vec<Person>, ApiError> {
        let people = match query {
            PeopleQuery::Me => vec![self.get::<Person>("people/me", &[]).await?],
            PeopleQuery::ById(id) => vec![self.get::<Person>(&format!("people/{}", id), &[]).await?],
            PeopleQuery::ByEmail(email) => {
                self.get::<Items<Person>>("people", &[("email", email.as_str())]).await?.items
            }
            PeopleQuery::ByDisplayName(name) => {
                self.get::<Items<Person>>("people", &[("displayName", name.as_str())]).await?.items
            }
        };
        Ok(people)
    }

    async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>, ApiError> {
        let query: Vec<(&str, &str)> = match filter {
            MembershipFilter::All => vec![],
            MembershipFilter::Room(id) => vec![("roomId", id.as_str())],
            MembershipFilter::Person(id) => vec![("personId", id.as_str())],
        };
        let memberships: Items<Membership> = self.get("memberships", &query).await?;
        Ok(memberships.items)
    }

    async fn create_message(&self, text: &str, room_id: &str) -> Result<Message, ApiError> {
        let request = CreateMessageRequest {
            room_id: Some(room_id),
            to_person_id: None,
            text,
        };
        self.post("messages", &request).await
    }

    async fn create_pm(&self, text: &str, person_id: &str) -> Result<Message, ApiError> {
        let request = CreateMessageRequest {
            room_id: None,
            to_person_id: Some(person_id),
            text,
        };
        self.post("messages", &request).await
    }

    async fn create_room(&self, title: &str) -> Result<Room, ApiError> {
        self.post("rooms", &CreateRoomRequest { title }).await
    }

    async fn create_membership(&self, room_id: &str, email: &str) -> Result<Membership, ApiError> {
        let request = CreateMembershipRequest {
            room_id,
            person_email: email,
        };
        self.post("memberships", &request).await
    }

    async fn delete_message(&self, message_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("messages/{}", message_id)).await
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("rooms/{}", room_id)).await
    }
}
