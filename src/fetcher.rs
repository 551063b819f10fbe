use std::time::Duration;

use reqwest::{
    Client,
    StatusCode,
};
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::{
    debug,
    warn,
};

use crate::{
    FetchError,
    HolidaySet,
};

pub const BANK_HOLIDAYS_URL: &str = "https://www.gov.uk/bank-holidays.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches UK bank holidays from gov.uk.
///
/// Nothing is shared between calls: each fetch builds its own client, makes
/// one request and drops the connection before returning.
#[derive(Clone, Debug)]
pub struct HolidayFetcher{
    url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HolidayFetcher{
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HolidayFetcher{
    /// A fetcher for [`BANK_HOLIDAYS_URL`] with the default timeout
    #[must_use] pub fn new() -> Self{
        Self::default()
    }

    #[must_use] pub fn builder() -> HolidayFetcherBuilder{
        HolidayFetcherBuilder::default()
    }

    #[must_use] pub fn url(&self) -> &str{
        &self.url
    }

    #[must_use] pub fn timeout(&self) -> Option<Duration>{
        self.timeout
    }

    /// Blocks the current thread until the holidays have been fetched and parsed.
    ///
    /// # Errors
    /// See [`HolidayFetcher::fetch_async`]. Also returns [`FetchError::Runtime`] if no
    /// runtime could be started to drive the request
    ///
    /// # Panics
    /// Panics if called from inside an async runtime; use
    /// [`HolidayFetcher::fetch_async`] there instead
    pub fn fetch(&self) -> Result<HolidaySet, FetchError>{
        let rt = RuntimeBuilder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        rt.block_on(self.fetch_async())
    }

    /// # Errors
    /// - [`FetchError::Transport`] if the request fails or the body cannot be read
    /// - [`FetchError::UnexpectedStatus`] if the response status is not 200. The body
    ///   is not read in this case
    /// - [`FetchError::Parse`] if the body is not the expected JSON, or holds a date
    ///   that is not `YYYY-MM-DD`
    pub async fn fetch_async(&self) -> Result<HolidaySet, FetchError>{
        let client = self.client()?;

        debug!(url = %self.url, "requesting bank holidays");
        let response = client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %self.url, %status, "bank holiday request was not successful");
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "received bank holidays");

        Ok(HolidaySet::from_json(&body)?)
    }

    fn client(&self) -> Result<Client, FetchError>{
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// Builder for [`HolidayFetcher`].
#[derive(Debug)]
pub struct HolidayFetcherBuilder{
    url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HolidayFetcherBuilder{
    fn default() -> Self {
        Self{
            url: BANK_HOLIDAYS_URL.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl HolidayFetcherBuilder{
    /// Point the fetcher somewhere other than gov.uk, e.g. a mirror
    #[must_use] pub fn url(mut self, url: impl Into<String>) -> Self{
        self.url = url.into();
        self
    }

    #[must_use] pub fn timeout(mut self, timeout: Duration) -> Self{
        self.timeout = Some(timeout);
        self
    }

    /// Wait on the server for as long as it takes
    #[must_use] pub fn no_timeout(mut self) -> Self{
        self.timeout = None;
        self
    }

    #[must_use] pub fn user_agent(mut self, agent: impl Into<String>) -> Self{
        self.user_agent = agent.into();
        self
    }

    #[must_use] pub fn build(self) -> HolidayFetcher{
        HolidayFetcher{
            url: self.url,
            timeout: self.timeout,
            user_agent: self.user_agent,
        }
    }
}

/// Fetches UK bank holidays from [`BANK_HOLIDAYS_URL`], blocking until done.
///
/// # Errors
/// See [`HolidayFetcher::fetch`]
pub fn fetch() -> Result<HolidaySet, FetchError>{
    HolidayFetcher::new().fetch()
}
