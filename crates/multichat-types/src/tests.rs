#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::persona::*;
    use crate::service::*;
    use crate::wire::*;

    // ─── Persona Tests ───────────────────────────────────────

    #[test]
    fn test_persona_catalogue_matches_ids() {
        for id in PersonaId::all() {
            assert_eq!(id.persona().id, *id);
        }
        assert_eq!(PersonaId::all().len(), 4);
    }

    #[test]
    fn test_persona_metadata() {
        let news = PersonaId::News.persona();
        assert_eq!(news.name, "News Assistant");
        assert_eq!(news.icon, "📰");
        assert_eq!(news.color.token(), "blue-purple");

        let technical = PersonaId::Technical.persona();
        assert_eq!(technical.description, "Get technical help and coding assistance");
        assert_eq!(technical.color, ColorTheme::OrangeRed);
    }

    #[test]
    fn test_persona_from_str() {
        assert_eq!("creative".parse::<PersonaId>().unwrap(), PersonaId::Creative);
        let err = "weather".parse::<PersonaId>().unwrap_err();
        assert_eq!(err, ChatError::UnknownPersona("weather".to_string()));
    }

    #[test]
    fn test_persona_serialization() {
        let json = serde_json::to_string(&PersonaId::Personal).unwrap();
        assert_eq!(json, r#""personal""#);
    }

    #[test]
    fn test_welcome_messages_are_distinct() {
        let mut texts: Vec<&str> = PersonaId::all().iter().map(|p| p.welcome_message()).collect();
        texts.dedup();
        assert_eq!(texts.len(), 4);
        assert!(PersonaId::News.welcome_message().contains("News Assistant"));
        assert!(!texts.contains(&GENERIC_WELCOME));
    }

    #[test]
    fn test_welcome_message_unknown_falls_back() {
        assert_eq!(welcome_message("sports"), GENERIC_WELCOME);
        assert_eq!(welcome_message(""), GENERIC_WELCOME);
    }

    // ─── Service Tests ───────────────────────────────────────

    #[test]
    fn test_service_labels() {
        assert_eq!(ServiceId::Groq.label(), "Groq");
        assert_eq!(ServiceId::Databricks.label(), "Databricks");
        assert_eq!("databricks".parse::<ServiceId>().unwrap(), ServiceId::Databricks);
        assert!("openai".parse::<ServiceId>().is_err());
    }

    #[test]
    fn test_availability_from_json() {
        let map = ServiceAvailability::from_json(r#"{"groq": true, "databricks": false}"#).unwrap();
        assert!(map.is_available(ServiceId::Groq));
        assert!(!map.is_available(ServiceId::Databricks));
    }

    #[test]
    fn test_availability_keeps_unknown_keys() {
        let map = ServiceAvailability::from_json(r#"{"groq": true, "ollama": true}"#).unwrap();
        assert_eq!(map.iter().count(), 2);
        assert!(!map.is_available(ServiceId::Databricks));
    }

    #[test]
    fn test_availability_rejects_non_bool() {
        let err = ServiceAvailability::from_json(r#"{"groq": "yes"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Parse(_)));
        assert!(ServiceAvailability::from_json("[]").is_err());
    }

    #[test]
    fn test_availability_default_is_empty() {
        let map = ServiceAvailability::default();
        assert!(map.is_empty());
        assert!(!map.is_available(ServiceId::Groq));
    }

    #[test]
    fn test_fallback_marks_known_services_available() {
        let map = ServiceAvailability::fallback();
        for svc in ServiceId::all() {
            assert!(map.is_available(*svc));
        }
    }

    #[test]
    fn test_probe_unreachable() {
        let probe = ServiceProbe::unreachable(&ChatError::Http {
            status: 500,
            body: String::new(),
        });
        assert!(!probe.is_reachable());
        assert_eq!(probe.availability, ServiceAvailability::fallback());
        assert_eq!(
            probe.connection_error.as_deref(),
            Some("Cannot connect to backend: HTTP error! status: 500")
        );
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.model.is_none());
        assert!(!msg.error);
        assert!(!msg.timestamp.is_empty());
        assert!(msg.is_user());
    }

    #[test]
    fn test_message_reply_carries_model() {
        let msg = Message::reply("Here you go", "groq-llama");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.model.as_deref(), Some("groq-llama"));
        assert!(!msg.error);
    }

    #[test]
    fn test_message_apology() {
        let msg = Message::apology();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, APOLOGY_TEXT);
        assert!(msg.error);
    }

    #[test]
    fn test_message_ids_unique() {
        assert_ne!(Message::user("a").id, Message::user("a").id);
    }

    #[test]
    fn test_message_serialization_omits_defaults() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert!(!json.contains("model"));
        assert!(!json.contains("error"));

        let json = serde_json::to_string(&Message::apology()).unwrap();
        assert!(json.contains(r#""error":true"#));
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_history_window_bounds() {
        let messages: Vec<Message> = (0..7).map(|i| Message::user(format!("m{}", i))).collect();
        let history = history_window(&messages);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].content, "m3");
        assert_eq!(history[3].content, "m6");

        assert_eq!(history_window(&messages[..2]).len(), 2);
        assert!(history_window(&[]).is_empty());
    }

    #[test]
    fn test_chat_request_json_shape() {
        let mut reply = Message::reply("answer", "m1");
        reply.error = true;
        let req = ChatRequest {
            message: "latest headlines?".to_string(),
            chatbot_type: PersonaId::News,
            service: ServiceId::Groq,
            history: history_window(&[Message::user("q"), reply]),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["message"], "latest headlines?");
        assert_eq!(value["chatbot_type"], "news");
        assert_eq!(value["service"], "groq");

        let history = value["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        for entry in history {
            let mut keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
            keys.sort();
            assert_eq!(keys, vec!["content", "role"]);
        }
        assert_eq!(history[1]["role"], "assistant");
    }

    #[test]
    fn test_chat_reply_parse() {
        let reply = ChatReply::from_json(
            r#"{"content": "Here are today's top stories...", "model": "groq-llama"}"#,
        )
        .unwrap();
        assert_eq!(reply.content, "Here are today's top stories...");
        assert_eq!(reply.model.as_deref(), Some("groq-llama"));
    }

    #[test]
    fn test_chat_reply_without_model() {
        let reply = ChatReply::from_json(r#"{"content": "ok"}"#).unwrap();
        assert!(reply.model.is_none());

        let reply = ChatReply::from_json(r#"{"content": "ok", "model": ""}"#).unwrap();
        assert!(reply.model.is_none());
    }

    #[test]
    fn test_chat_reply_missing_content() {
        let err = ChatReply::from_json(r#"{"model": "x"}"#).unwrap_err();
        assert_eq!(err, ChatError::MissingContent);

        let err = ChatReply::from_json(r#"{"content": null}"#).unwrap_err();
        assert_eq!(err, ChatError::MissingContent);

        let err = ChatReply::from_json(r#"{"content": 42}"#).unwrap_err();
        assert_eq!(err, ChatError::MissingContent);
    }

    #[test]
    fn test_chat_reply_malformed() {
        assert!(matches!(ChatReply::from_json("not json"), Err(ChatError::Parse(_))));
        assert!(matches!(ChatReply::from_json(r#""text""#), Err(ChatError::Parse(_))));
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_session_event_serialization() {
        let event = SessionEvent::PersonaSwitched { persona: PersonaId::Creative };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PersonaSwitched"));
        assert!(json.contains("creative"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.default_persona, PersonaId::News);
        assert_eq!(config.default_service, ServiceId::Groq);
        assert!(!config.app_version.is_empty());
    }

    #[test]
    fn test_config_endpoint_urls() {
        let config = ClientConfig::default()
            .with_backend_override(Some("https://api.example.com/"));
        assert_eq!(config.services_url(), "https://api.example.com/api/v1/services");
        assert_eq!(config.chat_url(), "https://api.example.com/api/v1/chat");
    }

    #[test]
    fn test_config_invalid_override_ignored() {
        let config = ClientConfig::default().with_backend_override(Some("ftp://nope"));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);

        let config = ClientConfig::default().with_backend_override(Some("   "));
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);

        let config = ClientConfig::default().with_backend_override(None);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_normalize_backend_url() {
        assert_eq!(
            normalize_backend_url(" http://host:9000// ").unwrap(),
            "http://host:9000"
        );
        assert!(matches!(normalize_backend_url("http://"), Err(ChatError::Config(_))));
        assert!(matches!(normalize_backend_url("host:9000"), Err(ChatError::Config(_))));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Http { status: 502, body: "bad gateway".to_string() };
        assert_eq!(err.to_string(), "HTTP error! status: 502");

        assert_eq!(ChatError::Timeout(30000).to_string(), "Timeout after 30000ms");
        assert_eq!(
            ChatError::MissingContent.to_string(),
            "Response is missing the `content` field"
        );
        assert_eq!(
            ChatError::UnknownPersona("x".to_string()).to_string(),
            "Unknown persona: x"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
