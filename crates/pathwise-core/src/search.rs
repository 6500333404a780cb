//! SearchProvider trait for grounding advisory answers in web results.

use pathwise_types::error::SearchError;
use pathwise_types::search::SearchHit;

/// Web search backend.
///
/// Implementations live in pathwise-infra (e.g., `DuckDuckGoSearch`).
/// Results come back in ranked order, at most `max_results` of them.
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;
}
