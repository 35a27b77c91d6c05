use dioxus::prelude::{use_signal, Signal};

use crate::ui::state::controller::ViewController;
use crate::ui::state::summary::SummaryState;
use crate::usecase::services::query_service::QueryService;

pub struct AppState {
    pub controller: Signal<ViewController>,
    pub service: Signal<Option<QueryService>>,
    pub summary: Signal<SummaryState>,
}

impl AppState {
    pub fn new(service: Option<QueryService>) -> Self {
        Self {
            controller: use_signal(ViewController::new),
            service: use_signal(move || service),
            summary: use_signal(SummaryState::default),
        }
    }
}
