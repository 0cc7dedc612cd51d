//! In-memory host page.
//!
//! Backs tests and DOM-less embedders. Entries live in stable slots;
//! [`apply_entries`](crate::LivePage::apply_entries) permutes slot
//! contents exactly the way a DOM bridge swaps markup and timestamp
//! attributes across elements, and plain text is re-derived from markup
//! on every read.

use crate::{LivePage, PageError, PageResult, PanelSpec};
use dksort_types::{EntryContent, EntrySnapshot, EntryTime, FileDownload};
use std::sync::Mutex;
use tracing::debug;

/// An in-memory [`LivePage`] with recording accessors for assertions.
#[derive(Debug, Default)]
pub struct MemoryPage {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    anchor_present: bool,
    slots: Vec<Slot>,
    panel: Option<PanelSpec>,
    count_display: Option<usize>,
    notices: Vec<String>,
    deliveries: Vec<FileDownload>,
    applied: usize,
}

#[derive(Debug)]
struct Slot {
    time: EntryTime,
    html: String,
}

impl MemoryPage {
    /// Creates an empty page with no anchor and no entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a page whose story anchor is already rendered.
    #[must_use]
    pub fn with_anchor() -> Self {
        let page = Self::new();
        page.set_anchor_present(true);
        page
    }

    /// Renders or removes the story anchor.
    pub fn set_anchor_present(&self, present: bool) {
        self.inner.lock().unwrap().anchor_present = present;
    }

    /// Appends an entry slot, as the host does when a new update lands.
    pub fn push_entry(&self, time: EntryTime, html: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .slots
            .push(Slot {
                time,
                html: html.into(),
            });
    }

    /// Replaces the whole entry set, as a host re-render does.
    pub fn replace_entries(&self, entries: Vec<(EntryTime, String)>) {
        self.inner.lock().unwrap().slots = entries
            .into_iter()
            .map(|(time, html)| Slot { time, html })
            .collect();
    }

    /// Timestamps in current slot order.
    #[must_use]
    pub fn times(&self) -> Vec<EntryTime> {
        self.inner
            .lock()
            .unwrap()
            .slots
            .iter()
            .map(|slot| slot.time)
            .collect()
    }

    /// Markup in current slot order.
    #[must_use]
    pub fn htmls(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .slots
            .iter()
            .map(|slot| slot.html.clone())
            .collect()
    }

    /// The attached panel, if any.
    #[must_use]
    pub fn panel(&self) -> Option<PanelSpec> {
        self.inner.lock().unwrap().panel.clone()
    }

    /// The last count shown in the panel.
    #[must_use]
    pub fn count_display(&self) -> Option<usize> {
        self.inner.lock().unwrap().count_display
    }

    /// Notices shown so far.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.inner.lock().unwrap().notices.clone()
    }

    /// Files delivered so far.
    #[must_use]
    pub fn deliveries(&self) -> Vec<FileDownload> {
        self.inner.lock().unwrap().deliveries.clone()
    }

    /// Number of successful write-backs.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.inner.lock().unwrap().applied
    }
}

/// Derives plain text from markup the way `textContent` would, minus
/// any real HTML parsing: tags are dropped, text is kept verbatim.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

impl LivePage for MemoryPage {
    fn anchor_ready(&self) -> bool {
        self.inner.lock().unwrap().anchor_present
    }

    fn has_entries(&self) -> bool {
        !self.inner.lock().unwrap().slots.is_empty()
    }

    fn entries(&self) -> Vec<EntrySnapshot> {
        self.inner
            .lock()
            .unwrap()
            .slots
            .iter()
            .map(|slot| EntrySnapshot::new(slot.time, strip_tags(&slot.html), slot.html.clone()))
            .collect()
    }

    fn apply_entries(&self, contents: &[EntryContent]) -> PageResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if contents.len() != inner.slots.len() {
            return Err(PageError::EntriesChanged {
                writing: contents.len(),
                live: inner.slots.len(),
            });
        }
        for (slot, content) in inner.slots.iter_mut().zip(contents) {
            slot.time = content.time;
            slot.html = content.html.clone();
        }
        inner.applied += 1;
        Ok(())
    }

    fn attach_panel(&self, panel: &PanelSpec) -> PageResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.anchor_present {
            return Err(PageError::AnchorMissing);
        }
        inner.panel = Some(panel.clone());
        Ok(())
    }

    fn set_entry_count(&self, count: usize) {
        self.inner.lock().unwrap().count_display = Some(count);
    }

    fn show_notice(&self, text: &str) {
        self.inner.lock().unwrap().notices.push(text.to_string());
    }

    fn deliver_file(&self, file: &FileDownload) -> PageResult<()> {
        debug!(name = %file.name, mime = %file.mime, "recording delivered file");
        self.inner.lock().unwrap().deliveries.push(file.clone());
        Ok(())
    }
}
