pub mod app_theme;
pub mod result_list_view;
mod search_view;

pub use search_view::{ExportStatus, SearchView, SearchViewMessage};
