//! Identifier resolver - maps a raw identifier to a canonical Spark id

use crate::application::errors::ApiError;
use crate::domain::entities::{IdKind, ObjectKind};
use crate::domain::traits::SparkApi;

/// Resolve `raw_id` for `object` with at most one lookup call.
///
/// Hashes come back unchanged. Emails are looked up as people, names as room
/// titles for messages and rooms. Person names are left to the people filter
/// downstream and membership names cannot be resolved, both yield an empty id,
/// as does a lookup without a match.
pub async fn resolve(api: &dyn SparkApi, raw_id: &str, object: ObjectKind) -> Result<String, ApiError> {
    let kind = IdKind::classify(raw_id);
    tracing::debug!("Identifier \"{}\" classified as {}", raw_id, kind);

    match kind {
        IdKind::Undefined => Ok(String::new()),
        IdKind::Hash => Ok(raw_id.to_string()),
        IdKind::Email => api.get_id_by_email(raw_id).await,
        IdKind::Name => match object {
            ObjectKind::Message | ObjectKind::Room => api.get_id_by_room_name(raw_id).await,
            ObjectKind::Person => Ok(String::new()),
            ObjectKind::Membership => {
                tracing::error!("Cannot resolve name \"{}\" for {}", raw_id, object);
                Ok(String::new())
            }
        },
    }
}
