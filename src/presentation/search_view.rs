use std::path::PathBuf;

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use crate::core::orchestrators::{SearchSession, SearchStatus};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::result_list_view;

#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    QueryChanged(String),
    SubmitSearch,
    SaveResults,
    OpenLink(String),
}

pub struct SearchView {
    session: SearchSession,
    export_status: Option<ExportStatus>,
}

pub fn describe_search_status(status: &SearchStatus) -> String {
    match status {
        SearchStatus::Idle => global_constants::STATUS_IDLE.to_string(),
        SearchStatus::Searching => global_constants::STATUS_SEARCHING.to_string(),
        SearchStatus::Completed(1) => "1 result".to_string(),
        SearchStatus::Completed(count) => format!("{} results", count),
        SearchStatus::Failed(error) => format!("Search failed: {}", error),
    }
}

pub fn describe_export_status(status: &ExportStatus) -> String {
    match status {
        ExportStatus::Saved(path) => format!("Saved to {}", path.display()),
        ExportStatus::Failed(error) => format!("Export failed: {}", error),
    }
}

impl SearchView {
    pub fn build() -> Self {
        log::info!("[SEARCH_VIEW] Creating search view");
        Self {
            session: SearchSession::new(),
            export_status: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SearchSession {
        &mut self.session
    }

    pub fn export_status(&self) -> Option<&ExportStatus> {
        self.export_status.as_ref()
    }

    pub fn set_export_status(&mut self, status: ExportStatus) {
        self.export_status = Some(status);
    }

    pub fn render_ui(&self) -> Element<'_, SearchViewMessage> {
        let title = text(global_constants::APPLICATION_TITLE)
            .size(28)
            .width(Length::Fill);

        let query_input = text_input(global_constants::SEARCH_INPUT_PLACEHOLDER, self.session.query())
            .on_input(SearchViewMessage::QueryChanged)
            .on_submit(SearchViewMessage::SubmitSearch)
            .padding(10)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(text("🔍 Search"))
            .padding([10, 20])
            .style(app_theme::primary_button_style)
            .on_press(SearchViewMessage::SubmitSearch);

        let save_btn = button(text("💾 Save results"))
            .padding([10, 20])
            .style(app_theme::export_button_style)
            .on_press(SearchViewMessage::SaveResults);

        let controls = row![query_input, search_btn, save_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let search_status = self.session.status().clone();
        let status_line = text(describe_search_status(&search_status))
            .size(14)
            .style(move |theme: &Theme| text::Style {
                color: Some(app_theme::status_text_color(theme, &search_status)),
            });

        let export_line = text(
            self.export_status()
                .map(describe_export_status)
                .unwrap_or_default(),
        )
        .size(12);

        let results = scrollable(result_list_view::render_result_list(
            self.session.results(),
            SearchViewMessage::OpenLink,
        ))
        .height(Length::Fill);

        let content = column![title, controls, status_line, export_line, results]
            .spacing(12)
            .padding(20)
            .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
