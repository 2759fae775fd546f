mod download_target;
mod http_fetcher;
mod search_provider;

pub use download_target::{DownloadTarget, ObjectReference};
pub use http_fetcher::{HttpFetcher, HttpResponse};
pub use search_provider::SearchProvider;
