use async_trait::async_trait;
use url::Url;

use crate::fetcher::errors::FetchError;

/// Anything that can hand back the markup of a menu page.
///
/// The extraction code never talks to the network itself; callers plug in
/// [`HttpPageSource`](crate::fetcher::HttpPageSource) or a stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError>;
}
