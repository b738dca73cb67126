//! Spreadsheet-style labels for vertices and sides: `A`, `B`, ..., `Z`, `A1`, `B1`, ...

/// Generates labels from a character range and a counter.
///
/// A label depends only on the range and the counter, so two sequencers built
/// with the same arguments always produce the same labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSequencer {
    start: char,
    end: char,
    counter: u64,
}

impl Default for LabelSequencer {
    fn default() -> Self {
        Self::new('A', 'Z')
    }
}

impl LabelSequencer {
    /// Creates a sequencer over the inclusive range `start..=end`, starting at counter 0.
    ///
    /// A reversed range is swapped.
    #[must_use]
    pub fn new(start: char, end: char) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self {
            start,
            end,
            counter: 0,
        }
    }

    /// Starts the sequence at `counter` instead of 0.
    #[must_use]
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    fn symbol_count(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// Returns the label for `counter` without advancing.
    #[must_use]
    pub fn label(&self, counter: u64) -> String {
        let count = self.symbol_count();
        let offset = counter % count;
        let round = counter / count;
        let symbol = u32::try_from(u64::from(self.start) + offset)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        if round == 0 {
            symbol.to_string()
        } else {
            format!("{symbol}{round}")
        }
    }

    /// Returns the current label and advances the counter.
    pub fn next_label(&mut self) -> String {
        let label = self.label(self.counter);
        self.counter = self.counter.saturating_add(1);
        label
    }
}

impl Iterator for LabelSequencer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_label())
    }
}
