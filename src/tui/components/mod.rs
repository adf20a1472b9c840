//! # TUI Components
//!
//! UI components for the terminal screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: screen title and the shuffle button
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `RowList`: persistent `RowListState` (cursor, scroll, transition) plus a
//!   transient `RowListView` built each frame
//!
//! Each component file holds its state types, event types, rendering logic,
//! event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header with shuffle button)
//! └── row_list.rs      (Scrollable rows + change highlight)
//! ```

pub mod row_list;
mod title_bar;

pub use row_list::{RowListEvent, RowListState, RowListView};
pub use title_bar::TitleBar;
