use super::*;

#[test]
fn normalize_converts_crlf_and_collapses_blank_runs() {
    assert_eq!(normalize_message_text("a\r\n\r\n\r\nb"), "a\n\nb");
}

#[test]
fn normalize_keeps_single_and_double_newlines() {
    assert_eq!(normalize_message_text("a\nb"), "a\nb");
    assert_eq!(normalize_message_text("a\n\nb"), "a\n\nb");
}

#[test]
fn normalize_collapses_long_runs_anywhere() {
    assert_eq!(normalize_message_text("\n\n\n\nstart\n\n\n\n\nend\n\n\n"), "\n\nstart\n\nend\n\n");
}

#[test]
fn normalize_leaves_lone_carriage_returns() {
    assert_eq!(normalize_message_text("a\rb"), "a\rb");
}

#[test]
fn normalize_empty_is_empty() {
    assert_eq!(normalize_message_text(""), "");
}

#[test]
fn trimmed_non_empty_rejects_whitespace() {
    assert_eq!(trimmed_non_empty(""), None);
    assert_eq!(trimmed_non_empty("  \n\t "), None);
}

#[test]
fn trimmed_non_empty_strips_surrounding_whitespace() {
    assert_eq!(trimmed_non_empty("  hello there \n"), Some("hello there"));
}
