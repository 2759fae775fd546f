use crate::core::models::ResultList;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    Idle,
    Searching,
    Completed(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// Query, held results and status of the search view.
///
/// Every started search gets a new generation. Only the outcome carrying the
/// latest generation may touch the held results, so a slow earlier response
/// can never overwrite a newer one.
pub struct SearchSession {
    query: String,
    results: ResultList,
    status: SearchStatus,
    latest_generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: ResultList::empty(),
            status: SearchStatus::Idle,
            latest_generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_generation += 1;
        self.status = SearchStatus::Searching;

        log::debug!(
            "[SESSION] Starting search generation {} for {:?}",
            self.latest_generation,
            self.query
        );

        SearchTicket {
            generation: self.latest_generation,
            query: self.query.clone(),
        }
    }

    pub fn apply_outcome(&mut self, generation: u64, outcome: Result<ResultList, String>) -> bool {
        if generation != self.latest_generation {
            log::info!(
                "[SESSION] Dropping stale outcome of generation {} (latest is {})",
                generation,
                self.latest_generation
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                self.status = SearchStatus::Completed(results.len());
                self.results = results;
            }
            Err(error) => {
                log::error!("[SESSION] Search failed, keeping previous results: {}", error);
                self.status = SearchStatus::Failed(error);
            }
        }

        true
    }
}
