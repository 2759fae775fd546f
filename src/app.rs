use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{FileDownloadTarget, GoogleCustomSearchProvider, ReqwestHttpFetcher};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::result_exporter::ResultExporter;
use crate::global_constants;
use crate::presentation::app_theme;

pub struct SearchApp {
    orchestrator: AppOrchestrator,
    theme: Theme,
}

impl SearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let search_provider = Arc::new(GoogleCustomSearchProvider::new(
            Arc::new(ReqwestHttpFetcher::new()),
            settings.search.clone(),
        ));

        let export_directory = settings.resolve_export_directory();
        log::info!("[APP] Exports will be written to {:?}", export_directory);
        let result_exporter = ResultExporter::new(
            Arc::new(FileDownloadTarget::new(export_directory)),
            settings.export_file_name.clone(),
        );

        let orchestrator = AppOrchestrator::build(
            search_provider,
            result_exporter,
            global_constants::ROOT_ROUTE,
        );

        (
            Self {
                orchestrator,
                theme: app_theme::get_theme(&settings.theme_mode),
            },
            Task::none(),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.clone()
    }
}
