use std::sync::Arc;

use iced::widget::{container, text};
use iced::{Element, Length, Task};

use crate::core::interfaces::adapters::SearchProvider;
use crate::core::models::ResultList;
use crate::core::orchestrators::result_exporter::ResultExporter;
use crate::core::orchestrators::router::{AppRoute, Router};
use crate::core::orchestrators::search_session::SearchTicket;
use crate::presentation::{ExportStatus, SearchView, SearchViewMessage};

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    SearchView(SearchViewMessage),
    SearchCompleted(u64, Result<ResultList, String>),
}

pub struct AppOrchestrator {
    search_provider: Arc<dyn SearchProvider>,
    result_exporter: ResultExporter,
    route: Option<AppRoute>,
    search_view: SearchView,
}

pub async fn run_search(
    search_provider: Arc<dyn SearchProvider>,
    ticket: SearchTicket,
) -> OrchestratorMessage {
    let outcome = search_provider
        .fetch_results(&ticket.query)
        .await
        .map_err(|e| format!("{:#}", e));

    OrchestratorMessage::SearchCompleted(ticket.generation, outcome)
}

impl AppOrchestrator {
    pub fn build(
        search_provider: Arc<dyn SearchProvider>,
        result_exporter: ResultExporter,
        initial_path: &str,
    ) -> Self {
        let route = Router::resolve(initial_path);
        if route.is_none() {
            log::warn!("[ORCHESTRATOR] No view registered for path {:?}", initial_path);
        }

        Self {
            search_provider,
            result_exporter,
            route,
            search_view: SearchView::build(),
        }
    }

    #[cfg(test)]
    pub fn search_view(&self) -> &SearchView {
        &self.search_view
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::SearchView(SearchViewMessage::QueryChanged(query)) => {
                self.search_view.session_mut().set_query(query);
            }
            OrchestratorMessage::SearchView(SearchViewMessage::SubmitSearch) => {
                return self.handle_submit_search();
            }
            OrchestratorMessage::SearchView(SearchViewMessage::SaveResults) => {
                self.handle_save_results();
            }
            OrchestratorMessage::SearchView(SearchViewMessage::OpenLink(href)) => {
                self.handle_open_link(&href);
            }
            OrchestratorMessage::SearchCompleted(generation, outcome) => {
                self.search_view
                    .session_mut()
                    .apply_outcome(generation, outcome);
            }
        }

        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        match self.route {
            Some(AppRoute::Search) => self
                .search_view
                .render_ui()
                .map(OrchestratorMessage::SearchView),
            None => container(text("Page not found").size(20))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        }
    }

    fn handle_submit_search(&mut self) -> Task<OrchestratorMessage> {
        let ticket = self.search_view.session_mut().begin_search();
        log::info!(
            "[ORCHESTRATOR] Submitting search generation {}",
            ticket.generation
        );

        let search_provider = Arc::clone(&self.search_provider);
        Task::future(run_search(search_provider, ticket))
    }

    fn handle_save_results(&mut self) {
        let results = self.search_view.session().results();

        let status = match self.result_exporter.save_results(results) {
            Ok(path) => {
                log::info!("[ORCHESTRATOR] Results saved to {:?}", path);
                ExportStatus::Saved(path)
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to save results: {:#}", e);
                ExportStatus::Failed(format!("{:#}", e))
            }
        };

        self.search_view.set_export_status(status);
    }

    fn handle_open_link(&self, href: &str) {
        log::info!("[ORCHESTRATOR] Opening result link {}", href);
        if let Err(e) = open::that(href) {
            log::error!("[ORCHESTRATOR] Failed to open {}: {}", href, e);
        }
    }
}
