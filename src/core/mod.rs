//! # Core Application Logic
//!
//! This module contains Picklist's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • diff() (changesets)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `RowItem` and `Section`
//! - [`snapshot`]: ordered, unique-key list of items
//! - [`diff`]: changesets between two snapshots
//! - [`rows`]: the row list and its toggle / shuffle operations
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod diff;
pub mod item;
pub mod rows;
pub mod snapshot;
pub mod state;
