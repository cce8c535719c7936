//! Test builders — ergonomic constructors for `Bill` fixtures and corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use baekilha::{Bill, BillStatus};
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// BillBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Bill`] test fixtures.
///
/// # Example
///
/// ```rust
/// let bill = BillBuilder::new("교육기본법 일부개정법률안")
///     .status(BillStatus::Passed)
///     .proposer("김민석 의원 외 10인")
///     .build();
/// ```
pub struct BillBuilder {
    id: u32,
    bill_number: String,
    title: String,
    proposer: String,
    date: NaiveDate,
    status: BillStatus,
    committee: String,
}

impl BillBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 1,
            bill_number: "2200001".to_string(),
            title: title.into(),
            proposer: "홍길동 의원 외 10인".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status: BillStatus::Pending,
            committee: "법제사법위원회".to_string(),
        }
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.bill_number = number.into();
        self
    }

    pub fn proposer(mut self, proposer: impl Into<String>) -> Self {
        self.proposer = proposer.into();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"));
        self
    }

    pub fn status(mut self, status: BillStatus) -> Self {
        self.status = status;
        self
    }

    pub fn committee(mut self, committee: impl Into<String>) -> Self {
        self.committee = committee.into();
        self
    }

    pub fn build(self) -> Bill {
        Bill {
            id: self.id,
            bill_number: self.bill_number,
            title: self.title,
            proposer: self.proposer,
            date: self.date,
            status: self.status,
            committee: self.committee,
        }
    }
}

// ---------------------------------------------------------------------------
// Corpus generators
// ---------------------------------------------------------------------------

/// Generate `n` distinct bills cycling through all three statuses, for
/// pagination tests that need arbitrary corpus sizes.
pub fn bill_corpus(n: usize) -> Vec<Bill> {
    const STATUSES: [BillStatus; 3] =
        [BillStatus::Passed, BillStatus::Rejected, BillStatus::Pending];

    (0..n)
        .map(|i| {
            BillBuilder::new(format!("법률안 제{}호", i + 1))
                .id(i as u32 + 1)
                .number(format!("22{:05}", i + 1))
                .status(STATUSES[i % 3])
                .build()
        })
        .collect()
}
