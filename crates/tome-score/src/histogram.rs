use std::collections::HashMap;

/// Occurrence counts of the tokens in one sequence.
///
/// Iteration follows first-occurrence order, so equal counts always come out
/// in the same order for the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl Histogram {
    /// Count every non-empty token in `tokens`.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut hist = Self::default();
        for token in tokens {
            if token.is_empty() {
                continue;
            }
            match hist.index.get(token) {
                Some(&slot) => hist.entries[slot].1 += 1,
                None => {
                    hist.index.insert(token.clone(), hist.entries.len());
                    hist.entries.push((token.clone(), 1));
                }
            }
        }
        hist
    }

    /// Count of `token`, zero when absent.
    pub fn count(&self, token: &str) -> u32 {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c as u64).sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }
}
