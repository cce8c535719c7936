//! baekilha — 백일하
//!
//! Terminal browser for South Korean National Assembly data: bills, member
//! activity, and announcements, searchable and paginated from the keyboard.
//!
//! # Architecture
//!
//! ```text
//! Data (baekilha-data) ──► Query engine (baekilha-core) ──► TUI (baekilha-tui)
//!                              │
//!                              └── QueryState (caller-owned, one per view)
//! ```
//!
//! The query engine is pure and synchronous: the UI owns a
//! [`QueryState`](baekilha_core::QueryState) per dataset tab and re-runs the
//! query after every state transition. This crate re-exports the pieces that
//! integration tests and downstream callers need.

pub use baekilha_core::{
    config, pager, query, FieldValue, PageControl, PageResult, QuerySpec, QueryState, Record,
    FILTER_ALL,
};
pub use baekilha_data::{
    Announcement, Bill, BillStatus, Catalog, DataError, DataSource, Member, MemberStats,
    SampleData,
};
