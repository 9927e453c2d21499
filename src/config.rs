use std::str::FromStr;
use std::time::Duration;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::market_data::Symbol;

pub const DEFAULT_API_BASE: &str = "/api";
pub const QUOTE_POLL_INTERVAL: Duration = Duration::from_millis(1000);
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(5000);
pub const OVERVIEW_POLL_INTERVAL: Duration = Duration::from_millis(3000);
/// How long a flow animation stays lit.
pub const FLOW_PULSE_DURATION: Duration = Duration::from_millis(1000);

/// Symbols tracked by the watchlist on start-up.
pub const DEFAULT_WATCHLIST: &[(&str, &str)] = &[("2330", "台積電"), ("2603", "長榮")];

/// Which of the two dashboard layouts is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum DashboardVariant {
    /// Per-symbol quote polling, health cards and a local activity console.
    #[strum(serialize = "watchlist")]
    Watchlist,
    /// Combined polling of status, snapshot, logs and trades, plus search.
    #[strum(serialize = "overview")]
    Overview,
}

impl DashboardVariant {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Watchlist => "Watchlist",
            Self::Overview => "Market Overview",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub variant: DashboardVariant,
    pub quote_interval: Duration,
    pub status_interval: Duration,
    pub overview_interval: Duration,
    pub watchlist: Vec<(Symbol, String)>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            variant: DashboardVariant::Watchlist,
            quote_interval: QUOTE_POLL_INTERVAL,
            status_interval: STATUS_POLL_INTERVAL,
            overview_interval: OVERVIEW_POLL_INTERVAL,
            watchlist: DEFAULT_WATCHLIST
                .iter()
                .map(|(symbol, name)| (Symbol::from(*symbol), name.to_string()))
                .collect(),
        }
    }
}

impl DashboardConfig {
    pub fn with_variant(mut self, variant: DashboardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Apply `?variant=overview&api=http://host/api&symbols=2330,2454` style
    /// overrides. Values are form-urlencoded. Unknown keys and unparsable
    /// values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "variant" => {
                    if let Ok(variant) = DashboardVariant::from_str(value.trim()) {
                        config.variant = variant;
                    }
                }
                "api" if !value.trim().is_empty() => config.api_base = value.trim().trim_end_matches('/').to_string(),
                "symbols" => {
                    let symbols: Vec<(Symbol, String)> = value
                        .split(',')
                        .filter_map(|s| Symbol::new(s).ok())
                        .map(|s| {
                            let name = s.value().to_string();
                            (s, name)
                        })
                        .collect();
                    if !symbols.is_empty() {
                        config.watchlist = symbols;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read overrides from `window.location.search`; defaults off-browser.
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }
}
