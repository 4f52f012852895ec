//! Repository modules implementing store operations.
//!
//! Each module adds methods to `PanelService` via `impl PanelService` blocks.
//! These methods perform no authorization; see `crate::access`.

pub mod interview;
