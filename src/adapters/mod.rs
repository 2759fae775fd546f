mod file_download_target;
mod google_custom_search_provider;
mod reqwest_http_fetcher;

pub use file_download_target::FileDownloadTarget;
pub use google_custom_search_provider::GoogleCustomSearchProvider;
pub use reqwest_http_fetcher::ReqwestHttpFetcher;
