//! National Assembly members and their activity statistics.

use baekilha_core::{FieldValue, QuerySpec, Record};
use serde::{Deserialize, Serialize};

/// Per-member activity statistics, all percentages or raw counts as published
/// on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Plenary attendance, percent.
    pub attendance: u32,
    /// Bills proposed (co-sponsored included).
    pub bills_proposed: u32,
    /// Share of proposed bills that passed, percent.
    pub bill_pass_rate: u32,
    /// Bills where the member was the lead proposer.
    pub lead_proposer: u32,
    /// Plenary and committee speeches.
    pub speeches: u32,
    /// Committee attendance, percent.
    pub committee_attendance: u32,
}

/// One member row in the roster list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub party: String,
    /// Electoral district, e.g. "서울 영등포구갑"; "비례대표" for list seats.
    pub district: String,
    pub stats: MemberStats,
}

impl Member {
    pub const SEARCHABLE: &'static [&'static str] = &["name", "party", "district"];

    pub fn query_spec() -> QuerySpec<'static> {
        QuerySpec {
            searchable_fields: Self::SEARCHABLE,
            filter_field: Some("party"),
        }
    }
}

impl Record for Member {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "party" => Some(self.party.as_str().into()),
            "district" => Some(self.district.as_str().into()),
            "attendance" => Some(self.stats.attendance.into()),
            "bills_proposed" => Some(self.stats.bills_proposed.into()),
            "bill_pass_rate" => Some(self.stats.bill_pass_rate.into()),
            "lead_proposer" => Some(self.stats.lead_proposer.into()),
            "speeches" => Some(self.stats.speeches.into()),
            "committee_attendance" => Some(self.stats.committee_attendance.into()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
