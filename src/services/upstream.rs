//! Fetching the daily reference-rate feed.

/// The one resource this proxy will ever fetch. Hardcoded on purpose:
/// nothing in the inbound request may influence the upstream URL, so the
/// proxy cannot be turned into an open relay.
pub const ECB_DAILY_RATES_URL: &str =
    "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

/// Shared handle for upstream fetches. Clone cheap (reqwest::Client is a
/// reference-counted handle over one connection pool).
#[derive(Clone, Debug)]
pub struct Upstream {
    client: reqwest::Client,
    url: String,
}

impl Upstream {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: ECB_DAILY_RATES_URL.to_string(),
        }
    }

    /// Test seam only; the running service always points at the fixed URL.
    #[cfg(test)]
    pub fn with_url(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Single GET, no retry. The response is handed back whole so the caller
    /// can stream the body through untouched.
    ///
    /// NOTE: no caching here. The ECB sets cache-control on this feed
    /// (currently a 5 minute TTL); honoring it is left to whatever HTTP
    /// cache sits in front of this process.
    pub async fn get_daily_rates(&self) -> reqwest::Result<reqwest::Response> {
        self.client.get(&self.url).send().await
    }
}

impl Default for Upstream {
    fn default() -> Self {
        Self::new()
    }
}
