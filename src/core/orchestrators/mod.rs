pub mod app_orchestrator;
pub mod result_exporter;
pub mod router;
pub mod search_session;


pub use search_session::{SearchSession, SearchStatus};
