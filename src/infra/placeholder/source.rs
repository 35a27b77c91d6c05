use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use crate::domain::entities::pagination::{PaginatedResult, PaginationInfo, DEFAULT_PER_PAGE};
use crate::domain::entities::record::{CountrySummary, Record, RecordId};
use crate::usecase::ports::api::{ApiError, CaseDataApi, PageQuery};

const SUMMARY_LIMIT: usize = 10;
const SAMPLE_DAYS: u64 = 21;

// (country, cases on day 0, daily new cases, deaths per thousand cases)
const SAMPLE_SERIES: &[(&str, u64, u64, u64)] = &[
    ("Argentina", 820, 95, 21),
    ("Brazil", 1_540, 310, 34),
    ("Germany", 2_210, 180, 12),
    ("India", 980, 420, 18),
    ("Italy", 3_050, 240, 61),
    ("Japan", 430, 35, 9),
    ("Mexico", 610, 130, 48),
    ("Portugal", 390, 55, 27),
    ("South Africa", 270, 88, 15),
    ("Spain", 2_760, 260, 52),
    ("United Kingdom", 1_980, 205, 44),
    ("United States", 4_120, 870, 29),
];

/// In-memory dataset answering the same three reads as the backend.
///
/// Filtering is a case-insensitive substring match, pages are ordered by
/// report date (newest first) and the summary keeps the ten countries with
/// the most cases. A page past the end is served as the last page.
pub struct StaticCaseApi {
    records: Vec<Record>,
}

impl StaticCaseApi {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn seeded() -> Self {
        Self::new(sample_records())
    }

    fn matching(&self, country: Option<&str>) -> Vec<&Record> {
        let needle = country.map(str::to_lowercase);
        let mut matched: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| match &needle {
                Some(needle) => record.country.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();
        matched.sort_by(|a, b| {
            b.report_date
                .cmp(&a.report_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        matched
    }
}

#[async_trait]
impl CaseDataApi for StaticCaseApi {
    async fn list_countries(&self) -> Result<Vec<String>, ApiError> {
        let mut countries: Vec<String> = self
            .records
            .iter()
            .map(|record| record.country.clone())
            .collect();
        countries.sort();
        countries.dedup();
        Ok(countries)
    }

    async fn fetch_page(&self, query: PageQuery) -> Result<PaginatedResult, ApiError> {
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let matched = self.matching(query.filter.country());
        let pagination = PaginationInfo::for_window(query.page.max(1), per_page, matched.len() as u64)
            .normalized();

        let offset = (pagination.page as usize - 1) * per_page as usize;
        let records = matched
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(PaginatedResult {
            records,
            pagination,
        })
    }

    async fn fetch_country_summary(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let mut by_country: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
        for record in &self.records {
            let entry = by_country.entry(record.country.as_str()).or_default();
            entry.0 = entry.0.max(record.cases);
            entry.1 = entry.1.max(record.deaths);
        }

        let mut summary: Vec<CountrySummary> = by_country
            .into_iter()
            .map(|(country, (total_cases, total_deaths))| CountrySummary {
                country: country.to_string(),
                total_cases,
                total_deaths,
            })
            .collect();
        summary.sort_by(|a, b| b.total_cases.cmp(&a.total_cases));
        summary.truncate(SUMMARY_LIMIT);
        Ok(summary)
    }
}

fn sample_records() -> Vec<Record> {
    let Some(start) = NaiveDate::from_ymd_opt(2020, 3, 1) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut next_id = 1_i64;
    for (country, base, daily, deaths_per_mille) in SAMPLE_SERIES {
        for day in 0..SAMPLE_DAYS {
            let Some(report_date) = start.checked_add_days(Days::new(day)) else {
                continue;
            };
            let cases = base + daily * day;
            records.push(Record {
                id: RecordId(next_id),
                country: (*country).to_string(),
                cases,
                deaths: cases * deaths_per_mille / 1_000,
                report_date,
            });
            next_id += 1;
        }
    }
    records
}
