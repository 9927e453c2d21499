pub mod dto;

use gloo::net::http::Request;
use serde::de::DeserializeOwned;

use crate::domain::{
    activity::ActivityEntry,
    errors::{FetchError, FetchResult},
    logging::LogComponent,
    market_data::{DashboardRepository, Quote, QuoteTick, SearchResult, Symbol, Transaction},
    system::SystemStatus,
};
use crate::{log_debug, log_warn};
use dto::{LogDto, QuoteDataDto, QuoteEnvelopeDto, SearchDto, StatusDto, TransactionsDto};

/// HTTP client for the dashboard REST backend, built on gloo for WASM
#[derive(Clone, Debug)]
pub struct DashboardHttpClient {
    base_url: String,
}

impl Default for DashboardHttpClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_BASE)
    }
}

impl DashboardHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute or base-relative URL for `endpoint` with encoded query params.
    pub fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let url = if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
        };
        HttpUtils::build_url_with_params(&url, params)
    }

    /// GET `endpoint` and decode the body as `T`.
    pub async fn fetch_json<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, params);
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::NetworkFailure(format!("Request failed: {:?}", e)))?;

        if !HttpUtils::is_success_status(response.status()) {
            let error = FetchError::HttpStatus { code: response.status(), text: response.status_text() };
            log_warn!(LogComponent::Infrastructure("HTTP"), "{} ({})", error, url);
            return Err(error);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkFailure(format!("Failed to read response: {:?}", e)))?;

        decode_body(&body)
    }
}

/// Parse a response body. Split out of `fetch_json` so it runs off-browser.
pub fn decode_body<T>(body: &str) -> FetchResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| FetchError::ParseFailure(e.to_string()))
}

impl DashboardRepository for DashboardHttpClient {
    async fn fetch_status(&self) -> FetchResult<SystemStatus> {
        let dto: StatusDto = self.fetch_json("status", &[]).await?;
        Ok(dto.to_domain())
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> FetchResult<Option<QuoteTick>> {
        let endpoint = format!("quote/{}", HttpUtils::url_encode(symbol.value()));
        let dto: QuoteEnvelopeDto = self.fetch_json(&endpoint, &[]).await?;
        Ok(dto.to_domain(symbol))
    }

    async fn fetch_transactions(&self) -> FetchResult<Vec<Transaction>> {
        let dto: TransactionsDto = self.fetch_json("transactions", &[]).await?;
        Ok(dto.to_domain())
    }

    async fn fetch_logs(&self) -> FetchResult<Vec<ActivityEntry>> {
        let dto: Vec<LogDto> = self.fetch_json("logs", &[]).await?;
        Ok(dto.into_iter().map(LogDto::to_domain).collect())
    }

    async fn fetch_snapshot(&self) -> FetchResult<Vec<Quote>> {
        let dto: Vec<QuoteDataDto> = self.fetch_json("market/snapshot", &[]).await?;
        Ok(dto.into_iter().filter_map(QuoteDataDto::to_snapshot_quote).collect())
    }

    async fn search(&self, query: &str) -> FetchResult<SearchResult> {
        let dto: SearchDto = self.fetch_json("search", &[("q", query)]).await?;
        Ok(dto.to_domain())
    }
}

/// URL helpers for GET requests
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Append `params` as an encoded query string, preserving their order.
    pub fn build_url_with_params(base_url: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", Self::url_encode(key), Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", base_url, separator, query_string)
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set.
    pub fn url_encode(input: &str) -> String {
        let mut encoded = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
                _ => encoded.push_str(&format!("%{:02X}", byte)),
            }
        }
        encoded
    }
}
