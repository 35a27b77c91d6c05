use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

/// One country/date observation as served by `/api/data`.
///
/// `report_date` is a calendar date, not an instant, so it is kept as a
/// `NaiveDate` and never passes through a timezone conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub country: String,
    pub cases: u64,
    pub deaths: u64,
    pub report_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub country: String,
    pub total_cases: u64,
    pub total_deaths: u64,
}
