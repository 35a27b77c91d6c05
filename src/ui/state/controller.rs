use tracing::debug;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::pagination::{PaginatedResult, PaginationInfo};
use crate::domain::entities::record::Record;
use crate::usecase::ports::api::ApiError;

/// A page request issued by the controller. `seq` identifies it when the
/// response comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
    pub filter: FilterSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed,
    Stale,
}

/// Page/filter selection and the result currently on screen.
///
/// Every action that changes `(current_page, selected_filter)` returns the
/// [`FetchTicket`] the caller must run. Only the response carrying the most
/// recently issued `seq` is applied; anything older is dropped on arrival.
#[derive(Debug, Clone)]
pub struct ViewController {
    current_page: u32,
    selected_filter: FilterSelection,
    displayed: PaginatedResult,
    known_countries: Vec<String>,
    countries_requested: bool,
    is_loading: bool,
    fetch_error: Option<String>,
    latest_seq: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            selected_filter: FilterSelection::All,
            displayed: PaginatedResult::empty(),
            known_countries: Vec::new(),
            countries_requested: false,
            is_loading: false,
            fetch_error: None,
            latest_seq: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn selected_filter(&self) -> &FilterSelection {
        &self.selected_filter
    }

    pub fn displayed_records(&self) -> &[Record] {
        &self.displayed.records
    }

    pub fn displayed_pagination(&self) -> &PaginationInfo {
        &self.displayed.pagination
    }

    pub fn known_countries(&self) -> &[String] {
        &self.known_countries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading
            && self.displayed.pagination.has_next
            && self.current_page < self.displayed.pagination.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_loading && self.displayed.pagination.has_prev && self.current_page > 1
    }

    /// Request for the state the controller starts in.
    pub fn start(&mut self) -> FetchTicket {
        self.issue()
    }

    /// True only the first time; the country list is loaded once per session.
    pub fn begin_country_load(&mut self) -> bool {
        if self.countries_requested {
            return false;
        }
        self.countries_requested = true;
        true
    }

    pub fn apply_countries(&mut self, countries: Vec<String>) {
        self.known_countries = countries;
    }

    pub fn go_next(&mut self) -> Option<FetchTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.current_page += 1;
        Some(self.issue())
    }

    pub fn go_prev(&mut self) -> Option<FetchTicket> {
        if !self.can_go_prev() {
            return None;
        }
        self.current_page -= 1;
        Some(self.issue())
    }

    pub fn go_first(&mut self) -> Option<FetchTicket> {
        if !self.can_go_prev() {
            return None;
        }
        self.current_page = 1;
        Some(self.issue())
    }

    pub fn go_last(&mut self) -> Option<FetchTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.current_page = self.displayed.pagination.total_pages;
        Some(self.issue())
    }

    /// Jumps straight to `page`. Ignored while loading, since the page count
    /// on screen may belong to a different filter than the pending request.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        if self.is_loading || page == self.current_page {
            return None;
        }
        if page == 0 || page > self.displayed.pagination.total_pages {
            return None;
        }
        self.current_page = page;
        Some(self.issue())
    }

    /// Switches the filter and rewinds to page 1 before the request is built.
    pub fn set_filter(&mut self, filter: FilterSelection) -> FetchTicket {
        self.selected_filter = filter;
        self.current_page = 1;
        self.issue()
    }

    /// Re-requests the current page/filter, superseding anything in flight.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn apply_page(
        &mut self,
        seq: u64,
        result: Result<PaginatedResult, ApiError>,
    ) -> ApplyOutcome {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "dropping stale page response");
            return ApplyOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(mut page) => {
                page.pagination = page.pagination.normalized();
                // The server may clamp the requested page.
                self.current_page = page.pagination.page;
                self.displayed = page;
                self.fetch_error = None;
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.displayed = PaginatedResult::empty();
                self.fetch_error = Some(err.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.is_loading = true;
        FetchTicket {
            seq: self.latest_seq,
            page: self.current_page,
            filter: self.selected_filter.clone(),
        }
    }
}
