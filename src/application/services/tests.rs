//! Resolver and command service tests against a recording Spark API

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::application::errors::{ApiError, SparkError, UsageError};
    use crate::application::parser::{CommandParser, Invocation};
    use crate::application::services::{resolve, CommandService};
    use crate::domain::entities::{
        Command, Membership, MembershipFilter, Message, ObjectKind, PeopleQuery, Person, Room,
    };
    use crate::domain::traits::SparkApi;
    use crate::infrastructure::config::TokenSource;

    const MESSAGE_HASH: &str = "9d8f7b2a-1c3e-4f5a-8b6d-0e1f2a3b4c5d";
    const ROOM_HASH: &str = "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d";

    /// Records every call, answers from canned lookup tables
    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
        people: HashMap<String, String>,
        rooms: HashMap<String, String>,
        fail: bool,
    }

    impl RecordingApi {
        fn new() -> Self {
            Self::default()
                .with_person("pwahlman@cisco.com", "p-petter")
                .with_room("Hackers Corner", "r-hackers")
        }

        fn with_person(mut self, email: &str, id: &str) -> Self {
            self.people.insert(email.to_string(), id.to_string());
            self
        }

        fn with_room(mut self, title: &str, id: &str) -> Self {
            self.rooms.insert(title.to_string(), id.to_string());
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(ApiError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn message(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            room_id: Some("r-hackers".to_string()),
            person_email: Some("pwahlman@cisco.com".to_string()),
            text: Some(text.to_string()),
            created: None,
        }
    }

    fn room(id: &str, title: &str) -> Room {
        Room {
            id: id.to_string(),
            title: title.to_string(),
            created: None,
        }
    }

    fn membership(room_id: &str) -> Membership {
        Membership {
            id: "m-1".to_string(),
            room_id: room_id.to_string(),
            person_email: Some("pwahlman@cisco.com".to_string()),
            is_moderator: false,
            is_monitor: false,
        }
    }

    #[async_trait]
    impl SparkApi for RecordingApi {
        async fn get_id_by_email(&self, email: &str) -> Result<String, ApiError> {
            self.calls.lock().unwrap().push(format!("get_id_by_email {}", email));
            Ok(self.people.get(email).cloned().unwrap_or_default())
        }

        async fn get_id_by_room_name(&self, name: &str) -> Result<String, ApiError> {
            self.calls.lock().unwrap().push(format!("get_id_by_room_name {}", name));
            Ok(self.rooms.get(name).cloned().unwrap_or_default())
        }

        async fn list_messages(&self, room_id: &str) -> Result<Vec<Message>, ApiError> {
            self.record(format!("list_messages {}", room_id))?;
            Ok(vec![message("msg-1", "hello"), message("msg-2", "world")])
        }

        async fn list_rooms(&self, room_id: Option<&str>) -> Result<Vec<Room>, ApiError> {
            self.record(format!("list_rooms {:?}", room_id))?;
            Ok(match room_id {
                Some(id) => vec![room(id, "Hackers Corner")],
                None => vec![room("r-hackers", "Hackers Corner"), room("r-other", "Other")],
            })
        }

        async fn list_people(&self, query: &PeopleQuery) -> Result<Vec<Person>, ApiError> {
            self.record(format!("list_people {:?}", query))?;
            Ok(vec![
                Person {
                    id: "p-petter".to_string(),
                    emails: vec!["pwahlman@cisco.com".to_string()],
                    display_name: "Petter Wahlman".to_string(),
                },
                Person {
                    id: "p-noemail".to_string(),
                    emails: vec![],
                    display_name: "Petter Bot".to_string(),
                },
            ])
        }

        async fn list_memberships(&self, filter: &MembershipFilter) -> Result<Vec<Membership>, ApiError> {
            self.record(format!("list_memberships {:?}", filter))?;
            Ok(vec![membership("r-hackers")])
        }

        async fn create_message(&self, text: &str, room_id: &str) -> Result<Message, ApiError> {
            self.record(format!("create_message {} {}", text, room_id))?;
            Ok(message("msg-new", text))
        }

        async fn create_pm(&self, text: &str, person_id: &str) -> Result<Message, ApiError> {
            self.record(format!("create_pm {} {}", text, person_id))?;
            Ok(message("msg-pm", text))
        }

        async fn create_room(&self, title: &str) -> Result<Room, ApiError> {
            self.record(format!("create_room {}", title))?;
            Ok(room("r-new", title))
        }

        async fn create_membership(&self, room_id: &str, email: &str) -> Result<Membership, ApiError> {
            self.record(format!("create_membership {} {}", room_id, email))?;
            Ok(membership(room_id))
        }

        async fn delete_message(&self, message_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete_message {}", message_id))
        }

        async fn delete_room(&self, room_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete_room {}", room_id))
        }
    }

    fn invocation(args: &[&str]) -> Invocation {
        let sources = vec![TokenSource::Env {
            var: "SPARK_AUTH".to_string(),
            value: Some("token".to_string()),
        }];
        CommandParser::new(sources)
            .parse(std::iter::once("spark").chain(args.iter().copied()))
            .unwrap()
    }

    async fn run(api: &RecordingApi, args: &[&str]) -> (Result<(), SparkError>, String) {
        let mut out = Vec::new();
        let result = CommandService::new(api).execute(&invocation(args), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    fn usage_error(result: Result<(), SparkError>) -> UsageError {
        match result {
            Err(SparkError::Usage(e)) => e,
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    // resolver

    #[tokio::test]
    async fn test_resolve_empty_is_a_noop() {
        let api = RecordingApi::new();
        assert_eq!(resolve(&api, "", ObjectKind::Room).await.unwrap(), "");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_hash_without_calls() {
        let api = RecordingApi::new();
        for object in [ObjectKind::Message, ObjectKind::Room, ObjectKind::Person, ObjectKind::Membership] {
            assert_eq!(resolve(&api, MESSAGE_HASH, object).await.unwrap(), MESSAGE_HASH);
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_email_issues_one_lookup() {
        let api = RecordingApi::new();
        let id = resolve(&api, "pwahlman@cisco.com", ObjectKind::Message).await.unwrap();
        assert_eq!(id, "p-petter");
        assert_eq!(api.calls(), vec!["get_id_by_email pwahlman@cisco.com"]);
    }

    #[tokio::test]
    async fn test_resolve_unknown_email_is_empty() {
        let api = RecordingApi::new();
        let id = resolve(&api, "nobody@example.com", ObjectKind::Person).await.unwrap();
        assert_eq!(id, "");
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_name_as_room_title() {
        let api = RecordingApi::new();
        assert_eq!(resolve(&api, "Hackers Corner", ObjectKind::Room).await.unwrap(), "r-hackers");
        assert_eq!(resolve(&api, "Hackers Corner", ObjectKind::Message).await.unwrap(), "r-hackers");
        assert_eq!(
            api.calls(),
            vec!["get_id_by_room_name Hackers Corner", "get_id_by_room_name Hackers Corner"]
        );
    }

    #[tokio::test]
    async fn test_resolve_person_and_membership_names_are_deferred() {
        let api = RecordingApi::new();
        assert_eq!(resolve(&api, "petter", ObjectKind::Person).await.unwrap(), "");
        assert_eq!(resolve(&api, "Hackers Corner", ObjectKind::Membership).await.unwrap(), "");
        assert!(api.calls().is_empty());
    }

    // end to end through parser and command service

    #[tokio::test]
    async fn test_list_room_by_name() {
        let api = RecordingApi::new();
        let inv = invocation(&["--list", "room", "--id", "Hackers Corner"]);
        assert_eq!(inv.command, Command::ListRooms);

        let (result, out) = run(&api, &["--list", "room", "--id", "Hackers Corner"]).await;
        result.unwrap();
        assert_eq!(
            api.calls(),
            vec!["get_id_by_room_name Hackers Corner", "list_rooms Some(\"r-hackers\")"]
        );
        assert_eq!(out, "r-hackers \"Hackers Corner\"\n");
    }

    #[tokio::test]
    async fn test_list_all_rooms() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["-l", "rooms"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec!["list_rooms None"]);
        assert_eq!(out.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_create_message_to_email_is_personal() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["--create", "message", "--id", "pwahlman@cisco.com", "hello"]).await;
        result.unwrap();
        assert_eq!(
            api.calls(),
            vec!["get_id_by_email pwahlman@cisco.com", "create_pm hello p-petter"]
        );
        assert!(out.starts_with("msg-pm"));
    }

    #[tokio::test]
    async fn test_create_message_to_room_name() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["-c", "message", "-i", "Hackers Corner", "hello"]).await;
        result.unwrap();
        assert_eq!(
            api.calls(),
            vec!["get_id_by_room_name Hackers Corner", "create_message hello r-hackers"]
        );
    }

    #[tokio::test]
    async fn test_delete_message_by_hash() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["--delete", "message", "--id", MESSAGE_HASH]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec![format!("delete_message {}", MESSAGE_HASH)]);
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn test_unresolved_name_stops_before_primary_call() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--delete", "room", "--id", "Deleteme"]).await;
        assert_eq!(usage_error(result), UsageError::Unresolved { id: "Deleteme".to_string() });
        assert_eq!(api.calls(), vec!["get_id_by_room_name Deleteme"]);
    }

    #[tokio::test]
    async fn test_list_messages_needs_an_id() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "messages"]).await;
        assert_eq!(usage_error(result), UsageError::MissingId("message id/room"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_messages_of_room() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["--list", "messages", "--id", "Hackers Corner"]).await;
        result.unwrap();
        assert_eq!(api.calls()[1], "list_messages r-hackers");
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("\"world\""));
    }

    #[tokio::test]
    async fn test_list_people_by_name_uses_raw_filter() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["--list", "people", "--id", "petter"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec![r#"list_people ByDisplayName("petter")"#]);
        // only people with an email are printed
        assert_eq!(out, "p-petter <pwahlman@cisco.com>  Petter Wahlman\n");
    }

    #[tokio::test]
    async fn test_list_people_falls_back_to_data() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "people", "petter"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec![r#"list_people ByDisplayName("petter")"#]);

        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "people"]).await;
        assert_eq!(usage_error(result), UsageError::MissingId("id/name/email"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_list_people_by_email_resolves_first() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "people", "--id", "pwahlman@cisco.com"]).await;
        result.unwrap();
        assert_eq!(
            api.calls(),
            vec![
                "get_id_by_email pwahlman@cisco.com",
                r#"list_people ById("p-petter")"#
            ]
        );
    }

    #[tokio::test]
    async fn test_list_people_by_email_queries_the_resolved_person_id() {
        let person_id = "Y2lzY29zcGFyazovL3VzL1BFT1BMRS9mNWIz";
        let api = RecordingApi::default().with_person("mccallister@cisco.com", person_id);
        let (result, _) = run(&api, &["--list", "people", "--id", "mccallister@cisco.com"]).await;
        result.unwrap();
        assert_eq!(api.calls()[1], format!("list_people ById(\"{}\")", person_id));
    }

    #[tokio::test]
    async fn test_list_people_me() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "people", "--id", "me"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec!["list_people Me"]);
    }

    #[tokio::test]
    async fn test_create_room_needs_a_name() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--create", "room"]).await;
        assert_eq!(usage_error(result), UsageError::MissingData("name"));

        let (result, out) = run(&api, &["--create", "room", "Hackers Corner"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec!["create_room Hackers Corner"]);
        assert_eq!(out, "r-new \"Hackers Corner\"\n");
    }

    #[tokio::test]
    async fn test_memberships() {
        let api = RecordingApi::new();
        let (result, out) = run(&api, &["--list", "membership", "--id", ROOM_HASH]).await;
        result.unwrap();
        assert_eq!(
            api.calls(),
            vec![format!("list_memberships Room(\"{}\")", ROOM_HASH)]
        );
        assert_eq!(out, "m-1 mod: false mon: false r-hackers\n");

        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "membership", "--id", "pwahlman@cisco.com"]).await;
        result.unwrap();
        assert_eq!(api.calls()[1], "list_memberships Person(\"p-petter\")");

        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--list", "membership"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec!["list_memberships All"]);
    }

    #[tokio::test]
    async fn test_membership_names_are_not_resolved() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--create", "membership", "--id", "Hackers Corner", "a@b.c"]).await;
        assert!(matches!(usage_error(result), UsageError::Unresolved { .. }));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_membership() {
        let api = RecordingApi::new();
        let (result, _) = run(&api, &["--create", "membership", "--id", ROOM_HASH]).await;
        assert_eq!(usage_error(result), UsageError::MissingData("email"));

        let (result, _) = run(&api, &["--create", "membership", "--id", ROOM_HASH, "a@b.c"]).await;
        result.unwrap();
        assert_eq!(api.calls(), vec![format!("create_membership {} a@b.c", ROOM_HASH)]);
    }

    #[tokio::test]
    async fn test_api_errors_propagate() {
        let api = RecordingApi::new().failing();
        let (result, out) = run(&api, &["--delete", "room", "--id", ROOM_HASH]).await;
        assert!(matches!(result, Err(SparkError::Api(ApiError::Status { status: 500, .. }))));
        assert_eq!(api.calls().len(), 1);
        assert_eq!(out, "");
    }
}
