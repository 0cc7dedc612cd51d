use dksort_page::{PanelAction, PanelSpec};
use dksort_types::SortMode;

// ── Stock surface ────────────────────────────────────────────────

#[test]
fn default_panel_matches_stock_surface() {
    let panel = PanelSpec::default();

    assert_eq!(panel.count_placeholder, "?");

    assert_eq!(panel.modes.len(), 2);
    assert_eq!(panel.modes[0].mode, SortMode::Ascending);
    assert_eq!(panel.modes[0].label, "Oldest First");
    assert!(panel.modes[0].selected);
    assert_eq!(panel.modes[1].mode, SortMode::Descending);
    assert_eq!(panel.modes[1].label, "Newest First");
    assert!(!panel.modes[1].selected);

    assert_eq!(panel.buttons.len(), 2);
    assert_eq!(panel.buttons[0].action, PanelAction::About);
    assert_eq!(panel.buttons[0].label, "About");
    assert_eq!(panel.buttons[1].action, PanelAction::Download);
    assert_eq!(panel.buttons[1].label, "Download");

    assert!(panel.about.contains("live update pages"));
}

#[test]
fn selected_mode_defaults_to_ascending() {
    assert_eq!(PanelSpec::default().selected_mode(), Some(SortMode::Ascending));
}

#[test]
fn selected_mode_none_when_nothing_selected() {
    let mut panel = PanelSpec::default();
    for option in &mut panel.modes {
        option.selected = false;
    }
    assert_eq!(panel.selected_mode(), None);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn panel_serde_round_trip() {
    let panel = PanelSpec::default();
    let json = serde_json::to_string(&panel).unwrap();
    assert!(json.contains("\"asc\""));
    assert!(json.contains("\"download\""));

    let back: PanelSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, panel);
}
