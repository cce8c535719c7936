//! Fixed bill fixtures shared across harnesses.

use super::builders::BillBuilder;
use baekilha::{Bill, BillStatus};

/// Twelve bills with an even 4/4/4 status split, newest first.
///
/// Exactly one title contains "교육" and every bill number carries the
/// mixed-case "Bill-" prefix so search tests can exercise case folding.
pub fn twelve_bills() -> Vec<Bill> {
    use BillStatus::*;

    let rows: [(&str, BillStatus, &str, (i32, u32, u32)); 12] = [
        ("국가재정법 일부개정법률안", Passed, "기획재정위원회", (2025, 6, 20)),
        ("교육기본법 일부개정법률안", Passed, "교육위원회", (2025, 6, 15)),
        ("근로기준법 일부개정법률안", Passed, "환경노동위원회", (2025, 6, 10)),
        ("도로교통법 일부개정법률안", Passed, "행정안전위원회", (2025, 6, 5)),
        ("상속세 및 증여세법 일부개정법률안", Rejected, "기획재정위원회", (2025, 5, 28)),
        ("방송법 일부개정법률안", Rejected, "과학기술정보방송통신위원회", (2025, 5, 22)),
        ("국민연금법 일부개정법률안", Rejected, "보건복지위원회", (2025, 5, 16)),
        ("공직선거법 일부개정법률안", Rejected, "행정안전위원회", (2025, 5, 9)),
        ("주택법 일부개정법률안", Pending, "국토교통위원회", (2025, 4, 30)),
        ("병역법 일부개정법률안", Pending, "국방위원회", (2025, 4, 24)),
        ("소득세법 일부개정법률안", Pending, "기획재정위원회", (2025, 4, 17)),
        ("환경정책기본법 일부개정법률안", Pending, "환경노동위원회", (2025, 4, 10)),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (title, status, committee, (y, m, d)))| {
            BillBuilder::new(*title)
                .id(i as u32 + 1)
                .number(format!("Bill-22{:05}", i + 1))
                .proposer(format!("의원 외 {}인", 10 + i))
                .date(*y, *m, *d)
                .status(*status)
                .committee(*committee)
                .build()
        })
        .collect()
}
