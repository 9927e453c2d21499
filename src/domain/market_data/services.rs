use super::entities::{Quote, QuoteTick, Symbol, Timestamp};

/// What `QuoteBook::upsert` did with a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuoteChange {
    /// Symbol was unknown and has been appended.
    Admitted,
    /// Existing entry updated; carries the previous close.
    Updated { previous_close: f64 },
}

impl QuoteChange {
    /// True when the close moved, or the symbol is new.
    pub fn price_moved(&self, new_close: f64) -> bool {
        match self {
            QuoteChange::Admitted => true,
            QuoteChange::Updated { previous_close } => *previous_close != new_close,
        }
    }
}

/// Ordered list of quotes with unique symbols. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book pre-populated with pending entries, duplicates dropped.
    pub fn with_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, String)>,
    {
        let mut book = Self::new();
        for (symbol, name) in symbols {
            book.admit(symbol, &name);
        }
        book
    }

    /// Update in place if the symbol is known, append otherwise.
    pub fn upsert(&mut self, tick: &QuoteTick, at: Timestamp) -> QuoteChange {
        match self.quotes.iter_mut().find(|q| q.symbol == tick.symbol) {
            Some(existing) => {
                let previous_close = existing.close_price.value();
                existing.apply_tick(tick, at);
                QuoteChange::Updated { previous_close }
            }
            None => {
                self.quotes.push(Quote::from_tick(tick, at));
                QuoteChange::Admitted
            }
        }
    }

    /// Adds an unquoted entry. Returns false if the symbol is already tracked.
    pub fn admit(&mut self, symbol: Symbol, name: &str) -> bool {
        if self.contains(&symbol) {
            return false;
        }
        self.quotes.push(Quote::pending(symbol, name));
        true
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.quotes.iter().any(|q| &q.symbol == symbol)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Quote> {
        self.quotes.iter().find(|q| &q.symbol == symbol)
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.quotes.iter().map(|q| q.symbol.clone()).collect()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::Price;

    fn tick(symbol: &str, close: f64) -> QuoteTick {
        QuoteTick {
            symbol: Symbol::from(symbol),
            name: None,
            close_price: Price::from(close),
            change: 0.5,
            source: "Redis Cache".to_string(),
        }
    }

    #[test]
    fn upsert_updates_in_place() {
        let mut book = QuoteBook::with_symbols([(Symbol::from("2330"), "TSMC".to_string())]);
        let change = book.upsert(&tick("2330", 1001.0), Timestamp::from_millis(5));

        assert_eq!(change, QuoteChange::Updated { previous_close: 0.0 });
        assert_eq!(book.len(), 1);
        let quote = book.get(&Symbol::from("2330")).unwrap();
        assert_eq!(quote.close_price.value(), 1001.0);
        assert_eq!(quote.name, "TSMC");
        assert_eq!(quote.last_update, Some(Timestamp::from_millis(5)));
    }

    #[test]
    fn unknown_symbol_is_appended() {
        let mut book = QuoteBook::new();
        assert_eq!(book.upsert(&tick("2603", 150.0), Timestamp::from_millis(1)), QuoteChange::Admitted);
        assert_eq!(book.get(&Symbol::from("2603")).unwrap().name, "2603");
    }

    #[test]
    fn admit_rejects_duplicates() {
        let mut book = QuoteBook::new();
        assert!(book.admit(Symbol::from("2330"), "2330"));
        assert!(!book.admit(Symbol::from("2330"), "2330"));
        assert_eq!(book.len(), 1);
    }
}
