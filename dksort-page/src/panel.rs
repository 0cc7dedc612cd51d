//! Data model of the control panel.
//!
//! The panel ships to the host as data; markup and styling stay
//! host-side. The defaults reproduce the stock control surface: a live
//! entry count, two mutually exclusive sort modes with "Oldest First"
//! selected, and About/Download buttons.

use dksort_types::SortMode;
use serde::{Deserialize, Serialize};

/// The control surface attached after the story anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Text shown in the count display before the first refresh.
    pub count_placeholder: String,

    /// Mutually exclusive sort mode options.
    pub modes: Vec<ModeOption>,

    /// Action buttons.
    pub buttons: Vec<PanelButton>,

    /// Informational blurb behind the About action.
    pub about: String,
}

/// One option in the panel's sort mode selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOption {
    /// The mode this option selects.
    pub mode: SortMode,

    /// Visible label.
    pub label: String,

    /// Tooltip / accessible description.
    pub help: String,

    /// Whether the option starts out selected.
    pub selected: bool,
}

/// One action button in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelButton {
    /// The action the button triggers.
    pub action: PanelAction,

    /// Visible label.
    pub label: String,

    /// Tooltip / accessible description.
    pub help: String,
}

/// The action a panel button triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelAction {
    /// Show the informational blurb.
    About,

    /// Export the entries as a CSV download.
    Download,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            count_placeholder: "?".to_string(),
            modes: vec![
                ModeOption {
                    mode: SortMode::Ascending,
                    label: "Oldest First".to_string(),
                    help: "Sort live update entries from oldest to newest.".to_string(),
                    selected: true,
                },
                ModeOption {
                    mode: SortMode::Descending,
                    label: "Newest First".to_string(),
                    help: "Sort live update entries from newest to oldest.".to_string(),
                    selected: false,
                },
            ],
            buttons: vec![
                PanelButton {
                    action: PanelAction::About,
                    label: "About".to_string(),
                    help: "About this panel.".to_string(),
                },
                PanelButton {
                    action: PanelAction::Download,
                    label: "Download".to_string(),
                    help: "Download live update entries as a CSV file.".to_string(),
                },
            ],
            about: "Sort and download entries on Daily Kos live update pages.".to_string(),
        }
    }
}

impl PanelSpec {
    /// The mode option that starts out selected, if any.
    #[must_use]
    pub fn selected_mode(&self) -> Option<SortMode> {
        self.modes.iter().find(|m| m.selected).map(|m| m.mode)
    }
}
