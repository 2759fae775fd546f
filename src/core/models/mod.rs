mod search_result;
mod user_settings;

pub use search_result::{ResultItem, ResultList, SearchEnvelope};
pub use user_settings::{SearchConfig, ThemeMode, UserSettings};
