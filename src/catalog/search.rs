use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Fuzzy filter shared by every search tab.
pub struct QueryFilter {
    pattern: Option<Pattern>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl QueryFilter {
    pub fn new(query: &str) -> Self {
        let query = query.trim();
        Self {
            pattern: (!query.is_empty())
                .then(|| Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart)),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    pub fn score(&mut self, haystack: &str) -> Option<u32> {
        match &self.pattern {
            None => Some(0),
            Some(pattern) => {
                pattern.score(Utf32Str::new(haystack, &mut self.buf), &mut self.matcher)
            }
        }
    }

    /// Keeps the items whose text matches, best score first. Ties keep
    /// their catalog order.
    pub fn apply<T, F>(&mut self, items: Vec<T>, text: F) -> Vec<T>
    where
        F: Fn(&T) -> String,
    {
        let mut scored: Vec<(u32, usize, T)> = items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| self.score(&text(&item)).map(|score| (score, i, item)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, _, item)| item).collect()
    }
}
