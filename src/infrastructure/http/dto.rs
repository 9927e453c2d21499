//! Wire shapes of the dashboard backend, mapped into domain types.
//!
//! Field names follow the backend (`redis`, `mysql`, `broker`, `action`, ...);
//! the descriptive names are accepted as aliases.

use serde::Deserialize;

use crate::domain::activity::{ActivityCategory, ActivityEntry};
use crate::domain::market_data::{
    Price, Quote, QuoteTick, SearchAnalysis, SearchMarketData, SearchResult, Symbol, Timestamp, TradeSide,
    Transaction,
};
use crate::domain::system::{CacheHealth, DatabaseHealth, SystemStatus};

/// `GET /status`
#[derive(Debug, Deserialize)]
pub struct StatusDto {
    #[serde(rename = "redis", alias = "cache")]
    pub cache: CacheDto,
    #[serde(rename = "mysql", alias = "database")]
    pub database: DatabaseDto,
    #[serde(rename = "broker", alias = "dataSourceLabel", default)]
    pub data_source_label: String,
}

#[derive(Debug, Deserialize)]
pub struct CacheDto {
    pub status: String,
    #[serde(rename = "ops", alias = "opsPerSec", default)]
    pub ops_per_sec: f64,
    #[serde(rename = "keys", alias = "keyCount", default)]
    pub key_count: u64,
    #[serde(default)]
    pub memory: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseDto {
    pub status: String,
    #[serde(rename = "ops", alias = "opsPerSec", default)]
    pub ops_per_sec: f64,
    #[serde(rename = "rows", alias = "rowCount", default)]
    pub row_count: u64,
}

impl StatusDto {
    pub fn to_domain(self) -> SystemStatus {
        SystemStatus {
            cache: CacheHealth {
                status: self.cache.status,
                ops_per_sec: self.cache.ops_per_sec,
                key_count: self.cache.key_count,
                memory: self.cache.memory,
            },
            database: DatabaseHealth {
                status: self.database.status,
                ops_per_sec: self.database.ops_per_sec,
                row_count: self.database.row_count,
            },
            data_source_label: self.data_source_label,
        }
    }
}

/// Quote body shared by `/quote/{symbol}` and `/market/snapshot`
#[derive(Debug, Deserialize)]
pub struct QuoteDataDto {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "closePrice", default)]
    pub close_price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub ts: Option<u64>,
}

/// `GET /quote/{symbol}`
#[derive(Debug, Deserialize)]
pub struct QuoteEnvelopeDto {
    #[serde(default)]
    pub data: Option<QuoteDataDto>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub trace_log: Vec<String>,
}

impl QuoteEnvelopeDto {
    /// The requested symbol wins over whatever the body echoes back, so a
    /// tick always lands on the watchlist row that asked for it.
    pub fn to_domain(self, requested: &Symbol) -> Option<QuoteTick> {
        let data = self.data?;
        Some(QuoteTick {
            symbol: requested.clone(),
            name: None,
            close_price: Price::from(data.close_price.unwrap_or_default()),
            change: data.change.unwrap_or_default(),
            source: self.source.unwrap_or_else(|| "Unknown".to_string()),
        })
    }
}

impl QuoteDataDto {
    /// Snapshot rows carry their own symbol; rows without one are dropped.
    pub fn to_snapshot_quote(self) -> Option<Quote> {
        let symbol = Symbol::new(self.symbol.as_deref()?).ok()?;
        let name = self
            .name
            .as_deref()
            .and_then(|n| n.split(' ').next())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| symbol.value().to_string());
        Some(Quote {
            name,
            close_price: Price::from(self.close_price.unwrap_or_default()),
            change: self.change.unwrap_or_default(),
            source: "Snapshot".to_string(),
            last_update: self.ts.map(Timestamp::from_millis),
            symbol,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionDto {
    pub id: u64,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "action", alias = "side")]
    pub side: TradeSide,
    pub price: f64,
    pub quantity: u64,
    #[serde(rename = "time", alias = "date", alias = "timestamp", default)]
    pub timestamp: String,
}

impl TransactionDto {
    /// `fallback` fills in the symbol for search rows, which omit it.
    pub fn to_domain(self, fallback: Option<&Symbol>) -> Option<Transaction> {
        let symbol = match self.symbol.as_deref() {
            Some(raw) => Symbol::new(raw).ok()?,
            None => fallback?.clone(),
        };
        Some(Transaction {
            id: self.id,
            timestamp: self.timestamp,
            symbol,
            side: self.side,
            price: Price::from(self.price),
            quantity: self.quantity,
        })
    }
}

/// `GET /transactions`
#[derive(Debug, Deserialize)]
pub struct TransactionsDto {
    #[serde(default)]
    pub data: Vec<TransactionDto>,
}

impl TransactionsDto {
    pub fn to_domain(self) -> Vec<Transaction> {
        self.data.into_iter().filter_map(|t| t.to_domain(None)).collect()
    }
}

/// One element of `GET /logs`
#[derive(Debug, Deserialize)]
pub struct LogDto {
    #[serde(rename = "time", alias = "timestamp", default)]
    pub time: String,
    #[serde(rename = "msg", alias = "message")]
    pub msg: String,
    #[serde(rename = "type", alias = "category", default)]
    pub kind: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl LogDto {
    pub fn to_domain(self) -> ActivityEntry {
        ActivityEntry {
            timestamp: self.time,
            category: ActivityCategory::from_tag(&self.kind),
            message: self.msg,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchMarketDataDto {
    #[serde(rename = "closePrice", default)]
    pub close_price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub history: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchAnalysisDto {
    #[serde(default)]
    pub total_trades: usize,
    #[serde(default)]
    pub data_sources: Vec<String>,
}

/// `GET /search?q=`
#[derive(Debug, Deserialize)]
pub struct SearchDto {
    pub symbol: String,
    #[serde(alias = "marketData")]
    pub market_data: SearchMarketDataDto,
    #[serde(default)]
    pub transactions: Vec<TransactionDto>,
    #[serde(alias = "traceLog", default)]
    pub trace_log: Vec<String>,
    #[serde(default)]
    pub analysis: Option<SearchAnalysisDto>,
}

impl SearchDto {
    pub fn to_domain(self) -> SearchResult {
        let symbol = Symbol::from(self.symbol.as_str());
        let transactions: Vec<Transaction> =
            self.transactions.into_iter().filter_map(|t| t.to_domain(Some(&symbol))).collect();
        let analysis = self.analysis.unwrap_or_default();
        SearchResult {
            market_data: SearchMarketData {
                close_price: Price::from(self.market_data.close_price),
                change: self.market_data.change,
                history: self.market_data.history,
            },
            analysis: SearchAnalysis {
                total_trades: if analysis.total_trades == 0 { transactions.len() } else { analysis.total_trades },
                data_sources: analysis.data_sources,
            },
            transactions,
            trace_log: self.trace_log,
            symbol,
        }
    }
}
