//! TUI widget modules.
//!
//! Each module contains a stateless leaf widget that renders one piece of
//! diagnostic content into a ratatui `Buffer`.

pub mod diagnostic_message;
