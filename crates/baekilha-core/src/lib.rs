//! baekilha-core — query engine for 백일하.
//!
//! This crate holds the list-query engine shared by every dataset view:
//! free-text search, categorical filtering, and pagination over an ordered
//! in-memory record collection. It knows nothing about terminals, datasets,
//! or rendering.
//!
//! # Architecture
//!
//! ```text
//! Data ──► Query (filter + paginate) ──► Pager ──► UI
//!                      ▲
//!                 QueryState (caller-owned)
//! ```
//!
//! The engine is stateless: every call receives the full collection and the
//! caller-owned [`QueryState`] and returns a [`PageResult`]. The UI re-runs
//! the query and re-renders after every state transition.

pub mod config;
pub mod pager;
pub mod query;
pub mod record;
pub mod state;

pub use pager::PageControl;
pub use query::{PageResult, QuerySpec, FILTER_ALL};
pub use record::{FieldValue, Record};
pub use state::QueryState;
