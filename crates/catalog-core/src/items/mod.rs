//! Items management for the catalog screen.
//!
//! [`state::ItemsState`] holds the raw session state and transitions it
//! through a pure reducer. [`pipeline`] derives the displayed sequence from
//! a [`Catalog`](crate::catalog::Catalog) and that state: soft-delete, then
//! [`search`], then [`sort`]. [`manager::ItemsManager`] ties the dataset and
//! state together behind the operations the screen calls.

pub mod manager;
pub mod pipeline;
pub mod search;
pub mod sort;
pub mod state;
