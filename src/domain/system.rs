//! Backend health as reported by `/status`.

use serde::{Deserialize, Serialize};

/// Coarse reading of a free-form status string such as `"Online 🟢"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthSignal {
    Online,
    Offline,
    Error,
    Unknown,
}

impl HealthSignal {
    pub fn from_status(text: &str) -> Self {
        if text.contains("Error") {
            Self::Error
        } else if text.contains("Offline") {
            Self::Offline
        } else if text.contains("Online") {
            Self::Online
        } else {
            Self::Unknown
        }
    }

    /// Backend says the store is unusable.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Offline | Self::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CacheHealth {
    pub status: String,
    pub ops_per_sec: f64,
    pub key_count: u64,
    pub memory: Option<String>,
}

impl CacheHealth {
    /// Header line of the cache monitor.
    pub fn write_rate_label(&self) -> String {
        format!("WRITE RATE: {} ops/sec", self.ops_per_sec)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub ops_per_sec: f64,
    pub row_count: u64,
}

impl DatabaseHealth {
    pub fn insert_rate_label(&self) -> String {
        format!("INSERT RATE: {} ops/sec", self.ops_per_sec)
    }

    pub fn signal(&self) -> HealthSignal {
        HealthSignal::from_status(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    pub cache: CacheHealth,
    pub database: DatabaseHealth,
    pub data_source_label: String,
}

impl SystemStatus {
    /// Placeholder shown before the first poll lands.
    pub fn unknown() -> Self {
        Self {
            cache: CacheHealth { status: "-".to_string(), ..Default::default() },
            database: DatabaseHealth { status: "-".to_string(), ..Default::default() },
            data_source_label: "-".to_string(),
        }
    }

    /// Replace `self` with `incoming`, except that a degraded database keeps
    /// the locally accumulated row count.
    pub fn merge_from_backend(&mut self, mut incoming: SystemStatus) {
        if incoming.database.signal().is_degraded() {
            incoming.database.row_count = self.database.row_count;
        }
        *self = incoming;
    }

    pub fn is_degraded(&self) -> bool {
        HealthSignal::from_status(&self.cache.status).is_degraded() || self.database.signal().is_degraded()
    }
}
