use super::*;

#[test]
fn defaults_match_page_contract() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.initial_message, None);
    assert_eq!(cfg.elements, ElementIds { messages: "messages".into(), form: "chat-form".into(), input: "message".into() });
    assert_eq!(cfg.launcher.toggle, "chat-toggle");
    assert_eq!(cfg.launcher.popup, "chat-popup");
    assert_eq!(cfg.launcher.close, "chat-close");
    assert_eq!(cfg.launcher.widget, "chat-widget");
    assert_eq!(cfg.launcher.frame, "chat-iframe");
    assert_eq!(cfg.composer, ComposerSizing { max_viewport_ratio: 0.4, min_height_px: 44.0 });
}

#[test]
fn from_globals_without_anything_is_default() {
    let cfg = WidgetConfig::from_globals(None, None).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn from_globals_takes_greeting() {
    let cfg = WidgetConfig::from_globals(Some("Hello! How can I help?".into()), None).unwrap();
    assert_eq!(cfg.initial_message.as_deref(), Some("Hello! How can I help?"));
}

#[test]
fn blank_greeting_is_dropped() {
    let cfg = WidgetConfig::from_globals(Some("   ".into()), None).unwrap();
    assert_eq!(cfg.initial_message, None);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let raw = r#"{"endpoint":"/api/chat","composer":{"min_height_px":52}}"#;
    let cfg = WidgetConfig::from_globals(None, Some(raw)).unwrap();
    assert_eq!(cfg.endpoint, "/api/chat");
    assert_eq!(cfg.composer.min_height_px, 52.0);
    assert_eq!(cfg.composer.max_viewport_ratio, DEFAULT_MAX_VIEWPORT_RATIO);
    assert_eq!(cfg.elements, ElementIds::default());
}

#[test]
fn page_greeting_overrides_config_greeting() {
    let raw = r#"{"initial_message":"from config"}"#;
    let cfg = WidgetConfig::from_globals(Some("from page".into()), Some(raw)).unwrap();
    assert_eq!(cfg.initial_message.as_deref(), Some("from page"));

    let cfg = WidgetConfig::from_globals(None, Some(raw)).unwrap();
    assert_eq!(cfg.initial_message.as_deref(), Some("from config"));
}

#[test]
fn element_id_overrides_apply() {
    let raw = r#"{"elements":{"messages":"thread"},"launcher":{"toggle":"open-chat"}}"#;
    let cfg = WidgetConfig::from_globals(None, Some(raw)).unwrap();
    assert_eq!(cfg.elements.messages, "thread");
    assert_eq!(cfg.elements.form, "chat-form");
    assert_eq!(cfg.launcher.toggle, "open-chat");
    assert_eq!(cfg.launcher.popup, "chat-popup");
}

#[test]
fn blank_overrides_are_ignored() {
    let cfg = WidgetConfig::from_globals(None, Some("  ")).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn malformed_overrides_are_a_parse_error() {
    let err = WidgetConfig::from_globals(None, Some("{not json")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid CHAT_CONFIG JSON"));
}

#[test]
fn empty_endpoint_is_rejected() {
    let err = WidgetConfig::from_globals(None, Some(r#"{"endpoint":" "}"#)).unwrap_err();
    assert_eq!(err.to_string(), "invalid CHAT_CONFIG: endpoint must not be empty");
}

#[test]
fn out_of_range_ratio_is_rejected() {
    for ratio in ["0", "-0.5", "1.5"] {
        let raw = format!(r#"{{"composer":{{"max_viewport_ratio":{ratio}}}}}"#);
        let err = WidgetConfig::from_globals(None, Some(&raw)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "ratio {ratio}");
    }
}

#[test]
fn negative_min_height_is_rejected() {
    let err = WidgetConfig::from_globals(None, Some(r#"{"composer":{"min_height_px":-1}}"#)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_page_is_default_off_browser() {
    assert_eq!(WidgetConfig::from_page(), WidgetConfig::default());
}
