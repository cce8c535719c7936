//! Bills put to the plenary session (본회의), with their deliberation status.

use baekilha_core::{FieldValue, QuerySpec, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Deliberation result of a bill, collapsed to the three states the list
/// view distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillStatus {
    /// 가결 — passed.
    Passed,
    /// 부결 — rejected.
    Rejected,
    /// 심의중 — under deliberation.
    Pending,
}

impl BillStatus {
    /// Collapse a raw status string from the source data into one of the
    /// three states. The upstream feed uses many spellings (원안가결,
    /// 수정가결, 계류, …); anything unrecognised counts as still pending.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim() {
            "가결" | "원안가결" | "수정가결" | "통과" | "승인" | "의결" => BillStatus::Passed,
            "부결" | "거부" | "반대" | "기각" | "폐기" => BillStatus::Rejected,
            _ => BillStatus::Pending,
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Passed => write!(f, "가결"),
            BillStatus::Rejected => write!(f, "부결"),
            BillStatus::Pending => write!(f, "심의중"),
        }
    }
}

impl Serialize for BillStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BillStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BillStatus::normalize(&raw))
    }
}

/// One bill row in the plenary list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: u32,
    pub bill_number: String,
    pub title: String,
    /// Lead proposer line as displayed, e.g. "김민수 의원 외 10인".
    pub proposer: String,
    pub date: NaiveDate,
    pub status: BillStatus,
    pub committee: String,
}

impl Bill {
    /// Fields eligible for substring search — mirrors the site's bill search.
    pub const SEARCHABLE: &'static [&'static str] =
        &["title", "proposer", "committee", "bill_number"];

    pub fn query_spec() -> QuerySpec<'static> {
        QuerySpec {
            searchable_fields: Self::SEARCHABLE,
            filter_field: Some("status"),
        }
    }
}

impl Record for Bill {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "bill_number" => Some(self.bill_number.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "proposer" => Some(self.proposer.as_str().into()),
            "date" => Some(self.date.to_string().into()),
            "status" => Some(self.status.to_string().into()),
            "committee" => Some(self.committee.as_str().into()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_spellings() {
        assert_eq!(BillStatus::normalize("원안가결"), BillStatus::Passed);
        assert_eq!(BillStatus::normalize("수정가결"), BillStatus::Passed);
        assert_eq!(BillStatus::normalize("기각"), BillStatus::Rejected);
        assert_eq!(BillStatus::normalize("계류"), BillStatus::Pending);
        assert_eq!(BillStatus::normalize("검토중"), BillStatus::Pending);
        // Unknown statuses count as pending, never as an error.
        assert_eq!(BillStatus::normalize("???"), BillStatus::Pending);
    }

    #[test]
    fn status_round_trips_through_display() {
        for s in [BillStatus::Passed, BillStatus::Rejected, BillStatus::Pending] {
            assert_eq!(BillStatus::normalize(&s.to_string()), s);
        }
    }

    #[test]
    fn record_exposes_status_as_text() {
        let bill = Bill {
            id: 1,
            bill_number: "2024-001".into(),
            title: "국민건강보험법 일부개정법률안".into(),
            proposer: "김민수 의원 외 10인".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            status: BillStatus::Passed,
            committee: "보건복지위원회".into(),
        };
        assert_eq!(bill.field("status").unwrap().as_text(), "가결");
        assert!(bill.field("sponsor").is_none());
    }
}
