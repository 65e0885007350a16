//! Approximate text search over product titles and tags.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::catalog::product::Product;

/// Default error tolerance: roughly one edit per three query characters.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// A product paired with how well it matched the query.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    product: &'a Product,
    /// Edits needed per query character for the best field (0.0 = exact).
    error_ratio: f64,
    /// Skim score of the best field, used to order equal-ratio hits.
    score: i64,
}

impl<'a> SearchHit<'a> {
    #[must_use]
    pub fn product(&self) -> &'a Product {
        self.product
    }

    #[must_use]
    pub fn error_ratio(&self) -> f64 {
        self.error_ratio
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Searches `products` for `query` across each product's title and tags.
///
/// A field matches when some substring of it is within
/// `threshold * query_len` edits of the query (case-insensitive), so
/// near-misses like `"hedphones"` still find `"Headphones"`. Returns hits
/// best-first; ties keep the input order. A blank query returns every
/// product with a ratio of `0.0`.
pub fn fuzzy_filter<'a>(
    products: &[&'a Product],
    query: &str,
    threshold: f64,
) -> Vec<SearchHit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return products
            .iter()
            .copied()
            .map(|p| SearchHit {
                product: p,
                error_ratio: 0.0,
                score: 0,
            })
            .collect();
    }

    let threshold = threshold.clamp(0.0, 1.0);
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    let needle_str: String = needle.iter().collect();
    let matcher = SkimMatcherV2::default();

    let mut hits: Vec<SearchHit<'a>> = products
        .iter()
        .copied()
        .filter_map(|p| {
            let mut best_ratio = f64::INFINITY;
            let mut best_score = 0;
            for field in std::iter::once(p.title()).chain(p.tags().iter().map(String::as_str)) {
                let hay = field.to_lowercase();
                let hay_chars: Vec<char> = hay.chars().collect();
                let ratio =
                    substring_edit_distance(&needle, &hay_chars) as f64 / needle.len() as f64;
                let score = matcher.fuzzy_match(&hay, &needle_str).unwrap_or(0);
                if ratio < best_ratio || (ratio == best_ratio && score > best_score) {
                    best_ratio = ratio;
                    best_score = score;
                }
            }
            (best_ratio <= threshold).then_some(SearchHit {
                product: p,
                error_ratio: best_ratio,
                score: best_score,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        a.error_ratio
            .total_cmp(&b.error_ratio)
            .then_with(|| b.score.cmp(&a.score))
    });
    hits
}

/// Minimum number of single-character edits turning `pattern` into any
/// substring of `text`.
fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    if m == 0 {
        return 0;
    }
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];
    let mut best = m;

    for &tc in text {
        // A match may start at any text position.
        curr[0] = 0;
        for i in 1..=m {
            let substitute = prev[i - 1] + usize::from(pattern[i - 1] != tc);
            curr[i] = substitute.min(prev[i] + 1).min(curr[i - 1] + 1);
        }
        best = best.min(curr[m]);
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "Wireless Headphones").with_tags(["audio", "bluetooth"]),
            Product::new("2", "Espresso Machine").with_tags(["kitchen", "coffee"]),
            Product::new("3", "Portable Speaker").with_tags(["audio", "outdoor"]),
            Product::new("4", "Yoga Mat").with_tags(["fitness"]),
        ]
    }

    fn titles<'a>(hits: &[SearchHit<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.product().title()).collect()
    }

    #[test]
    fn edit_distance_exact_substring_is_zero() {
        let p: Vec<char> = "phone".chars().collect();
        let t: Vec<char> = "headphones".chars().collect();
        assert_eq!(substring_edit_distance(&p, &t), 0);
    }

    #[test]
    fn edit_distance_counts_one_typo() {
        let p: Vec<char> = "hedphones".chars().collect();
        let t: Vec<char> = "wireless headphones".chars().collect();
        assert_eq!(substring_edit_distance(&p, &t), 1);
    }

    #[test]
    fn edit_distance_against_empty_text_is_pattern_len() {
        let p: Vec<char> = "abc".chars().collect();
        assert_eq!(substring_edit_distance(&p, &[]), 3);
    }

    #[test]
    fn blank_query_returns_all_in_order() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "   ", DEFAULT_THRESHOLD);

        assert_eq!(hits.len(), 4);
        assert_eq!(
            titles(&hits),
            vec!["Wireless Headphones", "Espresso Machine", "Portable Speaker", "Yoga Mat"]
        );
        assert!(hits.iter().all(|h| h.error_ratio() == 0.0));
    }

    #[test]
    fn substring_of_title_matches() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "espresso", DEFAULT_THRESHOLD);

        assert_eq!(titles(&hits), vec!["Espresso Machine"]);
    }

    #[test]
    fn near_match_with_typo_is_admitted() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "hedphones", DEFAULT_THRESHOLD);

        assert_eq!(titles(&hits), vec!["Wireless Headphones"]);
        assert!(hits[0].error_ratio() > 0.0);
    }

    #[test]
    fn tags_are_searched() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "audio", DEFAULT_THRESHOLD);

        assert_eq!(titles(&hits), vec!["Wireless Headphones", "Portable Speaker"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "YOGA", DEFAULT_THRESHOLD);

        assert_eq!(titles(&hits), vec!["Yoga Mat"]);
    }

    #[test]
    fn exact_match_ranks_before_near_match() {
        let data = vec![
            Product::new("1", "Mouse Pad"),
            Product::new("2", "Gaming Mouse"),
        ];
        let refs: Vec<&Product> = data.iter().collect();

        // Both match; only the first contains "mouse p" exactly.
        let hits = fuzzy_filter(&refs, "mouse p", DEFAULT_THRESHOLD);

        assert_eq!(hits[0].product().title(), "Mouse Pad");
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        let hits = fuzzy_filter(&refs, "zzzzzz", DEFAULT_THRESHOLD);

        assert!(hits.is_empty());
    }

    #[test]
    fn zero_threshold_requires_exact_substring() {
        let data = products();
        let refs: Vec<&Product> = data.iter().collect();

        assert!(fuzzy_filter(&refs, "hedphones", 0.0).is_empty());
        assert_eq!(fuzzy_filter(&refs, "headphones", 0.0).len(), 1);
    }

    #[test]
    fn empty_input_returns_empty() {
        let hits = fuzzy_filter(&[], "anything", DEFAULT_THRESHOLD);
        assert!(hits.is_empty());
    }
}
