use super::*;

#[test]
fn launcher_starts_closed() {
    let launcher = LauncherState::default();
    assert!(!launcher.open);
    assert_eq!(launcher.aria_expanded(), "false");
}

#[test]
fn toggle_opens_then_closes() {
    let mut launcher = LauncherState::default();
    assert!(launcher.toggle().open);
    assert_eq!(launcher.aria_expanded(), "true");
    assert!(!launcher.toggle().open);
    assert_eq!(launcher.aria_expanded(), "false");
}

#[test]
fn frame_loads_only_on_first_open() {
    let mut launcher = LauncherState::default();
    assert_eq!(launcher.toggle(), ToggleOutcome { open: true, load_frame: true });
    assert_eq!(launcher.toggle(), ToggleOutcome { open: false, load_frame: false });
    assert_eq!(launcher.toggle(), ToggleOutcome { open: true, load_frame: false });
}

#[test]
fn close_reports_whether_it_was_open() {
    let mut launcher = LauncherState::default();
    assert!(!launcher.close());
    launcher.toggle();
    assert!(launcher.close());
    assert!(!launcher.open);
}

#[test]
fn escape_closes_only_when_open() {
    let mut launcher = LauncherState::default();
    assert!(!launcher.on_key("Escape"));

    launcher.toggle();
    assert!(!launcher.on_key("Enter"));
    assert!(launcher.open);
    assert!(launcher.on_key("Escape"));
    assert!(!launcher.open);
}

#[test]
fn outside_click_closes_but_inside_click_does_not() {
    let mut launcher = LauncherState::default();
    launcher.toggle();

    assert!(!launcher.on_document_click(true));
    assert!(launcher.open);
    assert!(launcher.on_document_click(false));
    assert!(!launcher.open);
    assert!(!launcher.on_document_click(false));
}

#[test]
fn popup_rendered_open_closes_on_first_toggle() {
    let mut launcher = LauncherState::starting(true);
    assert_eq!(launcher.aria_expanded(), "true");

    assert_eq!(launcher.toggle(), ToggleOutcome { open: false, load_frame: false });
    assert_eq!(launcher.toggle(), ToggleOutcome { open: true, load_frame: true });
}

#[test]
fn popup_rendered_open_closes_on_escape() {
    let mut launcher = LauncherState::starting(true);
    assert!(launcher.on_key("Escape"));
    assert!(!launcher.open);
}

#[test]
fn starting_closed_matches_default() {
    assert_eq!(LauncherState::starting(false), LauncherState::default());
}
