use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::ReportStatus;

/// One uploaded lab report in the workspace bank. Ids are opaque
/// strings assigned at upload time and never reused.
///
/// `latex_table` and `interpretation` are filled in by the review and
/// interpretation flows after processing. The store carries them for
/// those flows but never reads them itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
    pub latex_table: Option<String>,
    pub interpretation: Option<String>,
}

impl Report {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        status: ReportStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            status,
            latex_table: None,
            interpretation: None,
        }
    }

    /// ISO date string as rendered in report lists, `YYYY-MM-DD`.
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
