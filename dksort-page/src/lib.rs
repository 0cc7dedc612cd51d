//! Host-page seam for dk-sort.
//!
//! The engine talks to the outside world through a single trait:
//! a [`LivePage`] produces timestamped entries and accepts reordering,
//! panel attachment, count updates, notices, and file deliveries. Real
//! deployments back it with a DOM bridge; tests and headless embedders
//! use the in-memory [`MemoryPage`].

mod error;
mod memory;
mod page;
mod panel;

pub use error::{PageError, PageResult};
pub use memory::MemoryPage;
pub use page::LivePage;
pub use panel::{ModeOption, PanelAction, PanelButton, PanelSpec};
