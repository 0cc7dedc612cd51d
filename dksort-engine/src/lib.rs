//! Live-update sorting engine for dk-sort.
//!
//! Ties the whole tool together: two polling readiness gates defer
//! startup until the host page has rendered, a panel controller
//! dispatches user actions, and a periodic scheduler keeps the entries
//! ordered by the selected mode.
//!
//! # Example
//!
//! ```
//! use dksort_engine::{EngineConfig, SortEngine};
//! use dksort_page::MemoryPage;
//! use dksort_types::{EntryTime, SortMode};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let page = Arc::new(MemoryPage::with_anchor());
//! page.push_entry(EntryTime::from_epoch_millis(2_000), "<p>second</p>");
//! page.push_entry(EntryTime::from_epoch_millis(1_000), "<p>first</p>");
//!
//! let (engine, handle) = SortEngine::new(page.clone(), EngineConfig::default());
//! let running = tokio::spawn(engine.run());
//!
//! handle.set_mode(SortMode::Descending).await.unwrap();
//! handle.shutdown().await.unwrap();
//! running.await.unwrap().unwrap();
//! # }
//! ```

mod engine;
mod error;
mod sorter;
mod waiter;

pub use engine::{EngineConfig, EngineHandle, PanelCommand, SortEngine};
pub use error::{EngineError, EngineResult};
pub use sorter::sort_entries;
pub use waiter::{wait_until, ReadinessTimeout, WaitConfig};
