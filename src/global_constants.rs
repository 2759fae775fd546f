pub const APPLICATION_NAME: &str = "custom-search-desktop";
pub const APPLICATION_TITLE: &str = "Custom Search";

pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_SEARCH_ENGINE_ID: &str = "017576662512468239146:omuauf_lfve";
pub const DEFAULT_SEARCH_API_KEY: &str = "AIzaSyD-replace-with-your-own-key";

pub const DEFAULT_EXPORT_FILE_NAME: &str = "results.json";
pub const EXPORT_STAGING_PREFIX: &str = "custom-search-export";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ROOT_ROUTE: &str = "/";

pub const SEARCH_INPUT_PLACEHOLDER: &str = "Search the web...";

pub const STATUS_IDLE: &str = "Type a query and press Enter";
pub const STATUS_SEARCHING: &str = "Searching...";

pub const MAIN_WINDOW_WIDTH: f32 = 720.0;
pub const MAIN_WINDOW_HEIGHT: f32 = 640.0;
