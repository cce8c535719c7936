//! Service announcements (공지사항).
//!
//! Announcements are searchable by title but carry no filter field — the
//! list view shows them all, newest first, exactly as the site does.

use baekilha_core::{FieldValue, QuerySpec, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    /// Shows the NEW badge in the list.
    #[serde(default)]
    pub is_new: bool,
    /// Full announcement text, shown in the detail view.
    #[serde(default)]
    pub body: String,
}

impl Announcement {
    pub const SEARCHABLE: &'static [&'static str] = &["title"];

    pub fn query_spec() -> QuerySpec<'static> {
        QuerySpec {
            searchable_fields: Self::SEARCHABLE,
            filter_field: None,
        }
    }
}

impl Record for Announcement {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "date" => Some(self.date.to_string().into()),
            "title" => Some(self.title.as_str().into()),
            "is_new" => Some(self.is_new.into()),
            "body" => Some(self.body.as_str().into()),
            _ => None,
        }
    }
}
