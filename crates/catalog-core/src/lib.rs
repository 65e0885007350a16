//! Catalog core library: UI-agnostic product browsing logic.
//!
//! `catalog-core` provides the dataset model, the items state machine and
//! the grid math behind the catalog screen. It is decoupled from any
//! terminal library so another frontend can share the same logic.
//!
//! # Modules
//!
//! - [`catalog`]: Products and the immutable, ordered dataset.
//! - [`items`]: Session state, reducer, fuzzy search, sorting and the derivation pipeline.
//! - [`layout`]: Orientation, card grid geometry and virtual-window ranges.
//! - [`config`]: User-facing configuration (TOML settings, keymap, theme).
//! - [`action`]: Named user actions resolved from the keymap.
//! - [`event`]: Commands flowing from the UI into the items state.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod items;
pub mod layout;

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use catalog::product::{Price, Product, ProductId};
pub use catalog::Catalog;
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use items::manager::ItemsManager;
pub use items::sort::SortOrder;
pub use items::state::ItemsState;
pub use layout::{GridLayout, Orientation};
