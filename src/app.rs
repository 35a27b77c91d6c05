use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::config::{load_or_default, AppConfig, DataMode};
use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::pagination::PaginationInfo;
use crate::domain::entities::record::{CountrySummary, Record};
use crate::infra::http::client::HttpCaseApi;
use crate::infra::placeholder::source::StaticCaseApi;
use crate::ui::format::{
    filter_options, format_count, format_report_date, page_label, table_cell_style,
    table_container_style, table_header_cell_style, DisplayLocale, FilterOption,
    EMPTY_STATE_TEXT,
};
use crate::ui::state::app_state::AppState;
use crate::ui::state::controller::{FetchTicket, ViewController};
use crate::usecase::ports::api::{ApiError, CaseDataApi};
use crate::usecase::services::query_service::QueryService;

const BUTTON_STYLE: &str = "border: 1px solid #374151; background: #1f2937; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;";

pub fn build_query_service(config: &AppConfig) -> Result<QueryService, ApiError> {
    let api: Arc<dyn CaseDataApi> = match config.data_mode {
        DataMode::Live => Arc::new(HttpCaseApi::new(
            &config.api_base_url,
            config.request_timeout(),
        )?),
        DataMode::Placeholder => Arc::new(StaticCaseApi::seeded()),
    };
    Ok(QueryService::new(api).with_per_page(config.per_page))
}

/// Runs controller actions and feeds the resulting request back into it.
#[derive(Clone, Copy)]
struct PageFetcher {
    controller: Signal<ViewController>,
    service: Signal<Option<QueryService>>,
}

impl PageFetcher {
    fn run(self, action: impl FnOnce(&mut ViewController) -> Option<FetchTicket>) {
        let Some(service) = self.service.peek().clone() else {
            return;
        };
        let mut controller = self.controller;
        let ticket = {
            let mut state = controller.write();
            action(&mut *state)
        };
        let Some(ticket) = ticket else {
            return;
        };

        spawn(async move {
            let result = service.fetch_page(ticket.page, &ticket.filter).await;
            let mut state = controller.write();
            let outcome = state.apply_page(ticket.seq, result);
            debug!(
                seq = ticket.seq,
                latest = state.latest_seq(),
                page = ticket.page,
                ?outcome,
                "page response"
            );
        });
    }
}

#[component]
fn FilterDropdown(
    options: Vec<FilterOption>,
    selected: String,
    mut open: Signal<bool>,
    on_select: EventHandler<String>,
) -> Element {
    let selected_label = options
        .iter()
        .find(|opt| opt.value == selected)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| selected.clone());

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "Country" }
            button {
                style: "{BUTTON_STYLE} min-width: 220px; text-align: left;",
                onclick: move |event| {
                    event.stop_propagation();
                    let next = !open();
                    open.set(next);
                },
                "{selected_label}"
            }

            if open() {
                div {
                    style: "position: absolute; left: 64px; top: 32px; min-width: 220px; max-height: 320px; overflow-y: auto; background: #1f2937; border: 1px solid #374151; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.35); z-index: 1200;",
                    onclick: move |event| event.stop_propagation(),
                    {options.iter().map(|opt| {
                        let value = opt.value.clone();
                        let label = opt.label.clone();
                        let background = if value == selected { "#374151" } else { "transparent" };
                        rsx!(
                            div {
                                key: "{value}",
                                style: "padding: 8px 10px; cursor: pointer; background: {background};",
                                onclick: move |_| {
                                    on_select.call(value.clone());
                                    open.set(false);
                                },
                                "{label}"
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
fn RecordTable(records: Vec<Record>, locale: DisplayLocale) -> Element {
    rsx! {
        div { style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}", "Country" }
                        th { style: "{table_header_cell_style()}", "Cases" }
                        th { style: "{table_header_cell_style()}", "Deaths" }
                        th { style: "{table_header_cell_style()}", "Report date" }
                    }
                }
                tbody {
                    if records.is_empty() {
                        tr {
                            td {
                                colspan: "4",
                                style: "text-align: center; color: #9ca3af; padding: 32px 0;",
                                "{EMPTY_STATE_TEXT}"
                            }
                        }
                    }
                    {records.iter().map(|record| {
                        let key = record.id.0;
                        let country = record.country.clone();
                        let cases = format_count(record.cases, locale);
                        let deaths = format_count(record.deaths, locale);
                        let report_date = format_report_date(record.report_date, locale);
                        rsx!(
                            tr { key: "{key}",
                                td { style: table_cell_style(false), "{country}" }
                                td { style: table_cell_style(true), "{cases}" }
                                td { style: table_cell_style(true), "{deaths}" }
                                td { style: table_cell_style(true), "{report_date}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
fn PaginationControls(
    pagination: PaginationInfo,
    can_prev: bool,
    can_next: bool,
    on_first: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_last: EventHandler<()>,
    on_jump: EventHandler<u32>,
) -> Element {
    let label = page_label(&pagination);
    let total_pages = pagination.total_pages;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; margin-top: 12px;",
            div { style: "display: flex; gap: 6px;",
                button { style: BUTTON_STYLE, disabled: !can_prev, onclick: move |_| on_first.call(()), "First" }
                button { style: BUTTON_STYLE, disabled: !can_prev, onclick: move |_| on_prev.call(()), "Previous" }
            }
            div { style: "display: flex; gap: 8px; align-items: center;",
                span { "{label}" }
                input {
                    r#type: "number",
                    min: "1",
                    max: "{total_pages}",
                    placeholder: "Go to",
                    style: "width: 72px; background: #1f2937; color: #fff; border: 1px solid #374151; border-radius: 6px; padding: 2px 6px;",
                    onchange: move |event| {
                        if let Ok(page) = event.value().trim().parse::<u32>() {
                            on_jump.call(page);
                        }
                    },
                }
            }
            div { style: "display: flex; gap: 6px;",
                button { style: BUTTON_STYLE, disabled: !can_next, onclick: move |_| on_next.call(()), "Next" }
                button { style: BUTTON_STYLE, disabled: !can_next, onclick: move |_| on_last.call(()), "Last" }
            }
        }
    }
}

#[component]
fn SummaryPanel(rows: Vec<CountrySummary>, loading: bool, locale: DisplayLocale) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px; padding: 8px; border: 1px solid #374151; border-radius: 6px;",
            h3 { style: "margin: 4px 0 8px;", "Top countries by cases" }
            if loading {
                p { "Loading..." }
            } else if rows.is_empty() {
                p { style: "color: #9ca3af;", "No summary available." }
            } else {
                table { style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}", "Country" }
                            th { style: "{table_header_cell_style()}", "Total cases" }
                            th { style: "{table_header_cell_style()}", "Total deaths" }
                        }
                    }
                    tbody {
                        {rows.iter().map(|row| {
                            let country = row.country.clone();
                            let total_cases = format_count(row.total_cases, locale);
                            let total_deaths = format_count(row.total_deaths, locale);
                            rsx!(
                                tr { key: "{country}",
                                    td { style: table_cell_style(false), "{country}" }
                                    td { style: table_cell_style(true), "{total_cases}" }
                                    td { style: table_cell_style(true), "{total_deaths}" }
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_or_default);
    let built = use_hook({
        let config = config.clone();
        move || build_query_service(&config).map_err(|err| err.to_string())
    });

    let AppState {
        controller,
        service,
        mut summary,
    } = AppState::new(built.clone().ok());
    let mut filter_open = use_signal(|| false);
    let fetcher = PageFetcher {
        controller,
        service,
    };

    // Reads nothing reactively, so this runs once after the first render.
    use_effect(move || {
        let Some(service) = service.peek().clone() else {
            return;
        };
        let mut controller = controller;
        if controller.write().begin_country_load() {
            spawn(async move {
                let countries = service.list_countries().await;
                controller.write().apply_countries(countries);
            });
        }
        fetcher.run(|state| Some(state.start()));
    });

    if let Err(err) = &built {
        error!(error = %err, "data source unavailable");
        return rsx! {
            div {
                p { "Cannot open the data source: {err}" }
            }
        };
    }

    let locale = config.locale;
    let state = controller();
    let options = filter_options(state.known_countries());
    let selected = state.selected_filter().as_value().to_string();
    let records = state.displayed_records().to_vec();
    let pagination = *state.displayed_pagination();
    let fetch_error = state.fetch_error().map(str::to_string);
    let is_loading = state.is_loading();
    let summary_state = summary();
    let summary_visible = summary_state.is_visible();
    let summary_loading = summary_state.is_loading();
    let summary_rows = summary_state.rows().to_vec();

    rsx! {
        div {
            onclick: move |_| filter_open.set(false),
            style: "font-family: sans-serif; padding: 16px; background: #030712; color: #fff; height: 100vh; display: flex; flex-direction: column; overflow: hidden;",

            h2 { style: "text-align: center;", "COVID-19 Data Dashboard" }

            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                FilterDropdown {
                    options,
                    selected,
                    open: filter_open,
                    on_select: move |value: String| {
                        fetcher.run(|state| Some(state.set_filter(FilterSelection::from_value(&value))));
                    },
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        if !summary.write().toggle() {
                            return;
                        }
                        let Some(service) = service.peek().clone() else {
                            summary.write().apply(Vec::new());
                            return;
                        };
                        spawn(async move {
                            let rows = service.fetch_country_summary().await;
                            summary.write().apply(rows);
                        });
                    },
                    if summary_visible { "Hide summary" } else { "Country summary" }
                }
                if is_loading {
                    span { style: "color: #9ca3af;", "Loading..." }
                }
            }

            {fetch_error.map(|message| rsx!(
                div {
                    style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px; padding: 8px; background: #7f1d1d; border-radius: 6px;",
                    span { "Could not load data: {message}" }
                    button {
                        style: BUTTON_STYLE,
                        onclick: move |_| fetcher.run(|state| Some(state.refresh())),
                        "Retry"
                    }
                }
            ))}

            if summary_visible {
                SummaryPanel { rows: summary_rows, loading: summary_loading, locale }
            }

            RecordTable { records, locale }

            PaginationControls {
                pagination,
                can_prev: state.can_go_prev(),
                can_next: state.can_go_next(),
                on_first: move |_| fetcher.run(ViewController::go_first),
                on_prev: move |_| fetcher.run(ViewController::go_prev),
                on_next: move |_| fetcher.run(ViewController::go_next),
                on_last: move |_| fetcher.run(ViewController::go_last),
                on_jump: move |page: u32| fetcher.run(|state| state.go_to_page(page)),
            }
        }
    }
}
