// Accumulates the symbols of satisfying templates in dictionary scan order.
// The scan files every hit; the recognition result is simply the first one
// filed, so declaration order in the dictionary decides ambiguous shapes.
pub struct MatchCollector<'a> {
    symbols: &'a mut Vec<String>,
}

impl<'a> MatchCollector<'a> {
    pub fn new(symbols: &mut Vec<String>) -> MatchCollector {
        assert!(symbols.is_empty(), "The pre-existing symbol vector must be empty.");
        MatchCollector { symbols: symbols }
    }

    pub fn file_match(&mut self, symbol: &str) {
        // A second template row for the same symbol models an alternate way
        // of drawing it; filing it again would just repeat the entry.
        for existing in self.symbols.iter() {
            if existing == symbol {
                return;
            }
        }
        self.symbols.push(symbol.to_string());
    }

    pub fn first(&self) -> Option<&str> {
        self.symbols.first().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}
