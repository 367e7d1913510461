use crate::histogram::Histogram;

/// Picks the most frequent tokens of a histogram.
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Up to `k` tokens, count descending. Equal counts keep first-occurrence order.
    pub fn select<'h>(&self, histogram: &'h Histogram) -> Vec<(&'h str, u32)> {
        let mut ranked: Vec<(&str, u32)> = histogram.iter().collect();
        // sort_by is stable, so ties stay in histogram (first-seen) order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.k);
        ranked
    }
}

/// Expands a top-K selection back into a flat token sequence.
///
/// Each selected token is repeated as many times as it occurred, blocks in
/// top-K order. The result approximates the document's term frequencies
/// using only its K most frequent words.
pub struct WeightedResampler;

impl WeightedResampler {
    pub fn resample(top: &[(&str, u32)], histogram: &Histogram) -> Vec<String> {
        let total: usize = top.iter().map(|(t, _)| histogram.count(t) as usize).sum();
        let mut out = Vec::with_capacity(total);
        for (token, _) in top {
            let count = histogram.count(token) as usize;
            out.extend(std::iter::repeat_n(token.to_string(), count));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(words: &[&str]) -> Histogram {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Histogram::from_tokens(&tokens)
    }

    #[test]
    fn select_orders_by_count_descending() {
        let h = hist(&["a", "b", "b", "c", "c", "c"]);
        let top = TopKSelector::new(3).select(&h);
        assert_eq!(top, vec![("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn select_truncates_to_k() {
        let h = hist(&["a", "b", "b", "c", "c", "c"]);
        let top = TopKSelector::new(2).select(&h);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "c");
    }

    #[test]
    fn select_fewer_than_k_returns_all() {
        let h = hist(&["x", "y"]);
        let top = TopKSelector::new(50).select(&h);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn select_ties_follow_first_occurrence() {
        let h = hist(&["zeta", "alpha", "mid", "alpha", "zeta", "mid"]);
        let top = TopKSelector::new(3).select(&h);
        let order: Vec<&str> = top.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn select_counts_non_increasing() {
        let h = hist(&["a", "b", "a", "c", "d", "d", "d", "b", "e"]);
        let top = TopKSelector::new(4).select(&h);
        assert!(top.len() <= 4);
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn select_empty_histogram() {
        let h = Histogram::default();
        assert!(TopKSelector::new(5).select(&h).is_empty());
    }

    #[test]
    fn resample_repeats_each_token_by_count() {
        let h = hist(&["cat", "dog", "cat", "eel", "cat", "dog"]);
        let top = TopKSelector::new(2).select(&h);
        let out = WeightedResampler::resample(&top, &h);
        assert_eq!(out, vec!["cat", "cat", "cat", "dog", "dog"]);
    }

    #[test]
    fn resample_counts_match_histogram() {
        let h = hist(&["a", "b", "c", "a", "b", "a", "d", "e", "e"]);
        let top = TopKSelector::new(3).select(&h);
        let out = WeightedResampler::resample(&top, &h);
        let resampled = Histogram::from_tokens(&out);
        for (token, _) in &top {
            assert_eq!(resampled.count(token), h.count(token));
        }
        assert_eq!(resampled.len(), top.len());
    }

    #[test]
    fn resample_empty_selection() {
        let h = Histogram::default();
        assert!(WeightedResampler::resample(&[], &h).is_empty());
    }
}
