//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the REPL.
//!
//! # Tasks
//! - Cache reaper: removes stale response payloads every eviction interval

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
