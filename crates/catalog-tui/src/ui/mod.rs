//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod card;
pub mod controls;
pub mod grid;
pub mod popup;
pub mod search_bar;
pub mod statusbar;
