//! Dataset views — projecting typed records through the query engine into
//! renderable rows.
//!
//! Each tab owns one [`Dataset`]. After every state transition the app shell
//! asks the dataset for a [`PageView`]: the engine runs
//! [`run_query`](baekilha_core::query::run_query) over the typed collection,
//! and the resulting page is flattened into plain text cells plus style hints
//! so the table widget never needs to know about concrete record types.

use baekilha_core::config::UiConfig;
use baekilha_core::{pager, query, PageControl, QueryState, FILTER_ALL};
use baekilha_data::{Announcement, Bill, BillStatus, Member};

// ---------------------------------------------------------------------------
// Column / cell model
// ---------------------------------------------------------------------------

/// Column width request passed to the table widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Fixed(u16),
    Fill,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub title: &'static str,
    pub width: ColumnWidth,
}

/// How a cell should be styled, resolved against the theme at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellHint {
    Plain,
    Dim,
    Status(BillStatus),
    /// The cell text is a party name; colour it with the party palette.
    Party,
    /// The NEW announcement badge.
    New,
}

#[derive(Debug, Clone)]
pub struct CellView {
    pub text: String,
    pub hint: CellHint,
}

impl CellView {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), hint: CellHint::Plain }
    }

    fn dim(text: impl Into<String>) -> Self {
        Self { text: text.into(), hint: CellHint::Dim }
    }
}

/// One rendered row plus the label/value pairs shown in the detail popup.
#[derive(Debug, Clone)]
pub struct RowView {
    pub cells: Vec<CellView>,
    pub detail: Vec<(String, String)>,
}

/// Everything the table widget needs to draw one page of one dataset.
#[derive(Debug, Clone)]
pub struct PageView {
    pub columns: Vec<Column>,
    pub rows: Vec<RowView>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub controls: Vec<PageControl>,
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// One browsable record collection. The variants mirror the site's pages.
#[derive(Debug, Clone)]
pub enum Dataset {
    Bills(Vec<Bill>),
    Members(Vec<Member>),
    Announcements(Vec<Announcement>),
}

impl Dataset {
    /// Tab label, also accepted by the `:tab` command.
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Bills(_) => "bills",
            Dataset::Members(_) => "members",
            Dataset::Announcements(_) => "notices",
        }
    }

    /// The cycle of filter values for this dataset, starting with
    /// [`FILTER_ALL`]. Values are drawn from the records themselves in
    /// first-seen order, so the cycle adapts to whatever data is loaded.
    pub fn filter_values(&self) -> Vec<String> {
        let mut values = vec![FILTER_ALL.to_string()];
        match self {
            Dataset::Bills(bills) => {
                for bill in bills {
                    let v = bill.status.to_string();
                    if !values.contains(&v) {
                        values.push(v);
                    }
                }
            }
            Dataset::Members(members) => {
                for member in members {
                    if !values.contains(&member.party) {
                        values.push(member.party.clone());
                    }
                }
            }
            // Announcements declare no filter field.
            Dataset::Announcements(_) => {}
        }
        values
    }

    /// Run the query for the current state and flatten the page into cells.
    pub fn page(&self, state: &QueryState, ui: &UiConfig) -> PageView {
        match self {
            Dataset::Bills(bills) => {
                let page = query::run_query(bills, state, &Bill::query_spec(), ui.page_size);
                build_view(bill_columns(ui), page, |b| bill_row(b, ui))
            }
            Dataset::Members(members) => {
                let page = query::run_query(members, state, &Member::query_spec(), ui.page_size);
                build_view(member_columns(), page, member_row)
            }
            Dataset::Announcements(items) => {
                let page =
                    query::run_query(items, state, &Announcement::query_spec(), ui.page_size);
                build_view(announcement_columns(ui), page, |a| announcement_row(a, ui))
            }
        }
    }
}

fn build_view<R>(
    columns: Vec<Column>,
    page: query::PageResult<R>,
    to_row: impl Fn(&R) -> RowView,
) -> PageView {
    PageView {
        columns,
        rows: page.items.iter().map(to_row).collect(),
        total_count: page.total_count,
        total_pages: page.total_pages,
        current_page: page.current_page,
        controls: pager::controls(page.total_pages, page.current_page),
    }
}

// ---------------------------------------------------------------------------
// Bills
// ---------------------------------------------------------------------------

fn bill_columns(ui: &UiConfig) -> Vec<Column> {
    let mut cols = vec![
        Column { title: "번호", width: ColumnWidth::Fixed(9) },
        Column { title: "의안명", width: ColumnWidth::Fill },
        Column { title: "제안자", width: ColumnWidth::Fixed(22) },
    ];
    if ui.show_dates {
        cols.push(Column { title: "제안일", width: ColumnWidth::Fixed(11) });
    }
    cols.push(Column { title: "상태", width: ColumnWidth::Fixed(7) });
    cols
}

fn bill_row(bill: &Bill, ui: &UiConfig) -> RowView {
    let mut cells = vec![
        CellView::dim(&bill.bill_number),
        CellView::plain(&bill.title),
        CellView::plain(&bill.proposer),
    ];
    if ui.show_dates {
        cells.push(CellView::dim(bill.date.format(&ui.date_format).to_string()));
    }
    cells.push(CellView {
        text: bill.status.to_string(),
        hint: CellHint::Status(bill.status),
    });

    RowView {
        cells,
        detail: vec![
            ("의안번호".into(), bill.bill_number.clone()),
            ("의안명".into(), bill.title.clone()),
            ("제안자".into(), bill.proposer.clone()),
            ("제안일".into(), bill.date.format(&ui.date_format).to_string()),
            ("심의결과".into(), bill.status.to_string()),
            ("소관위원회".into(), bill.committee.clone()),
        ],
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

fn member_columns() -> Vec<Column> {
    vec![
        Column { title: "이름", width: ColumnWidth::Fixed(9) },
        Column { title: "정당", width: ColumnWidth::Fixed(16) },
        Column { title: "지역구", width: ColumnWidth::Fill },
        Column { title: "출석", width: ColumnWidth::Fixed(6) },
        Column { title: "발의", width: ColumnWidth::Fixed(6) },
        Column { title: "가결률", width: ColumnWidth::Fixed(7) },
    ]
}

fn member_row(member: &Member) -> RowView {
    RowView {
        cells: vec![
            CellView::plain(&member.name),
            CellView { text: member.party.clone(), hint: CellHint::Party },
            CellView::plain(&member.district),
            CellView::dim(format!("{}%", member.stats.attendance)),
            CellView::dim(member.stats.bills_proposed.to_string()),
            CellView::dim(format!("{}%", member.stats.bill_pass_rate)),
        ],
        detail: vec![
            ("이름".into(), member.name.clone()),
            ("정당".into(), member.party.clone()),
            ("지역구".into(), member.district.clone()),
            ("본회의 출석률".into(), format!("{}%", member.stats.attendance)),
            ("발의 법안".into(), member.stats.bills_proposed.to_string()),
            ("가결률".into(), format!("{}%", member.stats.bill_pass_rate)),
            ("대표발의".into(), member.stats.lead_proposer.to_string()),
            ("발언 횟수".into(), member.stats.speeches.to_string()),
            (
                "위원회 출석률".into(),
                format!("{}%", member.stats.committee_attendance),
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

fn announcement_columns(ui: &UiConfig) -> Vec<Column> {
    let mut cols = Vec::new();
    if ui.show_dates {
        cols.push(Column { title: "날짜", width: ColumnWidth::Fixed(11) });
    }
    cols.push(Column { title: "제목", width: ColumnWidth::Fill });
    cols.push(Column { title: "", width: ColumnWidth::Fixed(4) });
    cols
}

fn announcement_row(a: &Announcement, ui: &UiConfig) -> RowView {
    let mut cells = Vec::new();
    if ui.show_dates {
        cells.push(CellView::dim(a.date.format(&ui.date_format).to_string()));
    }
    cells.push(CellView::plain(&a.title));
    cells.push(if a.is_new {
        CellView { text: "NEW".into(), hint: CellHint::New }
    } else {
        CellView::plain("")
    });

    RowView {
        cells,
        detail: vec![
            ("날짜".into(), a.date.format(&ui.date_format).to_string()),
            ("제목".into(), a.title.clone()),
            ("내용".into(), a.body.clone()),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
