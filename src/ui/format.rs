use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::filter::ALL_COUNTRIES;
use crate::domain::entities::pagination::PaginationInfo;

pub const ALL_COUNTRIES_LABEL: &str = "All Countries";
pub const EMPTY_STATE_TEXT: &str = "No data found. Is the backend running?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl DisplayLocale {
    fn thousands_separator(self) -> char {
        match self {
            DisplayLocale::EnUs => ',',
            DisplayLocale::PtBr => '.',
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "%m/%d/%Y",
            DisplayLocale::PtBr => "%d/%m/%Y",
        }
    }
}

pub fn format_count(value: u64, locale: DisplayLocale) -> String {
    let digits = value.to_string();
    let separator = locale.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

pub fn format_report_date(date: NaiveDate, locale: DisplayLocale) -> String {
    date.format(locale.date_pattern()).to_string()
}

pub fn page_label(pagination: &PaginationInfo) -> String {
    format!("Page {} of {}", pagination.page, pagination.total_pages)
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// The "all" sentinel first, then one entry per known country.
pub fn filter_options(countries: &[String]) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: ALL_COUNTRIES.to_string(),
        label: ALL_COUNTRIES_LABEL.to_string(),
    })
    .chain(countries.iter().map(|country| FilterOption {
        value: country.clone(),
        label: country.clone(),
    }))
    .collect()
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #1f2937; color: #fff; border: 1px solid #374151; padding: 6px 8px; text-align: left;"
}

pub fn table_cell_style(numeric: bool) -> &'static str {
    if numeric {
        "border: 1px solid #374151; padding: 4px 8px; text-align: right;"
    } else {
        "border: 1px solid #374151; padding: 4px 8px; text-align: left;"
    }
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #374151; border-radius: 6px;"
}
