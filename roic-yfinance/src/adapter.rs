use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use roic_core::RoicError;
use serde::Deserialize;
use url::Url;

/// Default Yahoo host serving the fundamentals time-series API.
pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

// Earliest timestamp Yahoo accepts for annual fundamentals.
const PERIOD1: i64 = 493_590_046;

/// One reported value of one line item.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesPoint {
    /// Display name of the line item (e.g. "Stockholders Equity").
    pub item: String,
    /// Period-end date.
    pub as_of: NaiveDate,
    /// `reportedValue.raw`; `None` when the entry carries no number.
    pub value: Option<f64>,
}

/// Fundamentals abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfFundamentals: Send + Sync {
    /// Fetch the annual time series of the given display-named line items.
    async fn annual_timeseries(
        &self,
        symbol: &str,
        items: &[&str],
    ) -> Result<Vec<TimeseriesPoint>, RoicError>;
}

/// Yahoo's key for a display name: the name with its spaces removed.
#[must_use]
pub fn yahoo_key(display_name: &str) -> String {
    display_name.split_whitespace().collect()
}

#[derive(Deserialize)]
struct Envelope {
    timeseries: TimeseriesBody,
}

#[derive(Deserialize)]
struct TimeseriesBody {
    #[serde(default)]
    result: Option<Vec<SeriesResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SeriesResult {
    meta: Meta,
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct Meta {
    #[serde(rename = "type", default)]
    types: Vec<String>,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "asOfDate")]
    as_of_date: NaiveDate,
    #[serde(rename = "reportedValue", default)]
    reported_value: Option<ReportedValue>,
}

#[derive(Deserialize)]
struct ReportedValue {
    #[serde(default)]
    raw: Option<f64>,
}

/// Parse a fundamentals time-series response body.
///
/// `items` are the requested display names; each `annual<Key>` series is
/// reported under the matching display name. Null entries are skipped.
///
/// # Errors
/// Returns `Data` when the body is not a time-series envelope, or when Yahoo
/// reports an error in it.
pub fn parse_timeseries(body: &str, items: &[&str]) -> Result<Vec<TimeseriesPoint>, RoicError> {
    let env: Envelope = serde_json::from_str(body)
        .map_err(|e| RoicError::Data(format!("timeseries payload: {e}")))?;
    if let Some(err) = env.timeseries.error.filter(|e| !e.is_null()) {
        return Err(RoicError::Data(format!("timeseries error: {err}")));
    }
    let by_key: HashMap<String, &str> = items.iter().map(|n| (yahoo_key(n), *n)).collect();

    let mut out = Vec::new();
    for series in env.timeseries.result.unwrap_or_default() {
        for ty in &series.meta.types {
            let Some(entries) = series.rest.get(ty).and_then(serde_json::Value::as_array) else {
                continue;
            };
            let key = ty.strip_prefix("annual").unwrap_or(ty);
            let item = by_key.get(key).map_or_else(|| key.to_string(), ToString::to_string);
            for raw in entries.iter().filter(|v| !v.is_null()) {
                let entry: Entry = serde_json::from_value(raw.clone())
                    .map_err(|e| RoicError::Data(format!("{ty} entry: {e}")))?;
                out.push(TimeseriesPoint {
                    item: item.clone(),
                    as_of: entry.as_of_date,
                    value: entry.reported_value.and_then(|r| r.raw),
                });
            }
        }
    }
    Ok(out)
}

/// Production adapter calling Yahoo over HTTPS.
///
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base: Url,
}

impl RealAdapter {
    /// Build an adapter against `base` with a browser user agent and request timeout.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable base URL and `Other` when the HTTP
    /// client cannot be constructed.
    pub fn try_new(base: &str, timeout: Duration) -> Result<Self, RoicError> {
        let base = Url::parse(base).map_err(|e| RoicError::InvalidArg(format!("base url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RoicError::InvalidArg(format!("base url: {base}")));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RoicError::Other(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn new(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    fn timeseries_url(&self, symbol: &str, items: &[&str]) -> Result<Url, RoicError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| RoicError::InvalidArg(format!("base url: {}", self.base)))?
            .pop_if_empty()
            .extend([
                "ws",
                "fundamentals-timeseries",
                "v1",
                "finance",
                "timeseries",
                symbol,
            ]);
        let types = items
            .iter()
            .map(|n| format!("annual{}", yahoo_key(n)))
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("type", &types)
            .append_pair("period1", &PERIOD1.to_string())
            .append_pair("period2", &Utc::now().timestamp().to_string());
        Ok(url)
    }
}

fn map_http_err(status: reqwest::StatusCode, context: &str) -> RoicError {
    match status.as_u16() {
        404 => RoicError::not_found(context.to_string()),
        429 => RoicError::connector("roic-yfinance", format!("rate limit: {context}")),
        s if status.is_server_error() => {
            RoicError::connector("roic-yfinance", format!("server error {s}: {context}"))
        }
        s => RoicError::connector("roic-yfinance", format!("http {s}: {context}")),
    }
}

#[async_trait]
impl YfFundamentals for RealAdapter {
    async fn annual_timeseries(
        &self,
        symbol: &str,
        items: &[&str],
    ) -> Result<Vec<TimeseriesPoint>, RoicError> {
        let context = format!("fundamentals for {symbol}");
        let url = self.timeseries_url(symbol, items)?;
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RoicError::connector("roic-yfinance", format!("{context}: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(map_http_err(status, &context));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| RoicError::connector("roic-yfinance", format!("{context}: {e}")))?;
        parse_timeseries(&body, items)
    }
}

impl dyn YfFundamentals {
    /// Build a `YfFundamentals` from a closure (tests and offline use).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfFundamentals>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<TimeseriesPoint>, RoicError>,
    {
        struct FnFundamentals<F> {
            f: F,
        }
        #[async_trait]
        impl<F> YfFundamentals for FnFundamentals<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<TimeseriesPoint>, RoicError>,
        {
            async fn annual_timeseries(
                &self,
                symbol: &str,
                _items: &[&str],
            ) -> Result<Vec<TimeseriesPoint>, RoicError> {
                (self.f)(symbol.to_string())
            }
        }
        Arc::new(FnFundamentals { f })
    }
}
