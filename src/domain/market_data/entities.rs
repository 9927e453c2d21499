pub use super::value_objects::{Price, Symbol, Timestamp, TradeSide};
use serde::{Deserialize, Serialize};

/// Domain entity - latest known quote for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub name: String,
    pub close_price: Price,
    /// Percent change against the session open.
    pub change: f64,
    pub source: String,
    pub last_update: Option<Timestamp>,
}

impl Quote {
    /// Placeholder for a symbol that has been admitted but not yet quoted.
    pub fn pending(symbol: Symbol, name: &str) -> Self {
        Self {
            symbol,
            name: name.to_string(),
            close_price: Price::default(),
            change: 0.0,
            source: String::new(),
            last_update: None,
        }
    }

    pub fn from_tick(tick: &QuoteTick, at: Timestamp) -> Self {
        Self {
            symbol: tick.symbol.clone(),
            name: tick.name.clone().unwrap_or_else(|| tick.symbol.value().to_string()),
            close_price: tick.close_price,
            change: tick.change,
            source: tick.source.clone(),
            last_update: Some(at),
        }
    }

    /// Overwrites the mutable fields in place; identity (symbol) is kept.
    pub fn apply_tick(&mut self, tick: &QuoteTick, at: Timestamp) {
        self.close_price = tick.close_price;
        self.change = tick.change;
        self.source = tick.source.clone();
        if let Some(name) = &tick.name {
            self.name = name.clone();
        }
        self.last_update = Some(at);
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

/// One successful quote response, before it is merged into a book.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteTick {
    pub symbol: Symbol,
    pub name: Option<String>,
    pub close_price: Price,
    pub change: f64,
    pub source: String,
}

/// Read-only projection of a persisted trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub timestamp: String,
    pub symbol: Symbol,
    pub side: TradeSide,
    pub price: Price,
    pub quantity: u64,
}

impl Transaction {
    /// Date part of a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn date(&self) -> &str {
        self.timestamp.split(' ').next().unwrap_or(&self.timestamp)
    }
}

/// Market half of a search answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMarketData {
    pub close_price: Price,
    pub change: f64,
    pub history: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchAnalysis {
    pub total_trades: usize,
    pub data_sources: Vec<String>,
}

/// Transient result backing the search modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub symbol: Symbol,
    pub market_data: SearchMarketData,
    pub transactions: Vec<Transaction>,
    pub trace_log: Vec<String>,
    pub analysis: SearchAnalysis,
}

impl SearchResult {
    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }

    pub fn trace_lines(&self) -> impl Iterator<Item = (usize, &str, TraceTone)> + '_ {
        self.trace_log
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str(), TraceTone::classify(line)))
    }
}

/// Highlight applied to a search trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceTone {
    Plain,
    Cache,
    Database,
    Simulation,
    Success,
}

impl TraceTone {
    /// Later markers take precedence: a successful SQL step is `Success`.
    pub fn classify(line: &str) -> Self {
        let mut tone = Self::Plain;
        if line.contains("Redis") {
            tone = Self::Cache;
        }
        if line.contains("SQL") {
            tone = Self::Database;
        }
        if line.contains("Sim") {
            tone = Self::Simulation;
        }
        if line.contains('✅') {
            tone = Self::Success;
        }
        tone
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Cache => "red",
            Self::Database => "blue",
            Self::Simulation => "yellow",
            Self::Success => "green",
        }
    }
}
