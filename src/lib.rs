//! Picklist library exports: the pure core and the terminal adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
