//! baekilha-data — National Assembly record types and sample datasets.
//!
//! The three record collections the UI browses (bills, members,
//! announcements) live here, together with a [`DataSource`] abstraction so
//! the query layer never cares whether records come from the embedded sample
//! data or, later, a real feed. Each record type implements
//! [`baekilha_core::Record`] and declares its own
//! [`QuerySpec`](baekilha_core::QuerySpec).

pub mod announcement;
pub mod bill;
pub mod member;

pub use announcement::Announcement;
pub use bill::{Bill, BillStatus};
pub use member::{Member, MemberStats};

use thiserror::Error;

const BILLS_JSON: &str = include_str!("../data/bills.json");
const MEMBERS_JSON: &str = include_str!("../data/members.json");
const ANNOUNCEMENTS_JSON: &str = include_str!("../data/announcements.json");

/// Failure to decode a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed dataset {name}: {source}")]
    Decode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// All record collections served to the UI, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub bills: Vec<Bill>,
    pub members: Vec<Member>,
    pub announcements: Vec<Announcement>,
}

/// Where record collections come from.
///
/// The sample data ships embedded in the binary; a future network-backed
/// source drops in behind this trait without touching the query layer.
pub trait DataSource {
    fn load(&self) -> Result<Catalog, DataError>;
}

/// The embedded sample datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl DataSource for SampleData {
    fn load(&self) -> Result<Catalog, DataError> {
        Ok(Catalog {
            bills: decode("bills.json", BILLS_JSON)?,
            members: decode("members.json", MEMBERS_JSON)?,
            announcements: decode("announcements.json", ANNOUNCEMENTS_JSON)?,
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    name: &'static str,
    json: &str,
) -> Result<Vec<T>, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Decode { name, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
