//! Product search over the rendered catalogue.
//!
//! A case-insensitive substring match on display names, recomputed from
//! scratch on every keystroke. There is no index; a catalogue page holds a
//! few dozen products at most.

/// Shown below the product grid when a non-empty search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No products found matching your search.";

/// Normalize a raw search box value: trimmed and lower-cased.
#[must_use]
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a product named `name` matches an already-normalized `term`.
///
/// The empty term matches everything.
#[must_use]
pub fn matches(term: &str, name: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(term)
}

/// Visibility of each product after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// One flag per product, in the order the names were given.
    pub visible: Vec<bool>,
    /// Whether to show [`NO_RESULTS_MESSAGE`].
    pub show_no_results: bool,
}

impl SearchOutcome {
    /// Number of products left visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

/// Filter product `names` by the raw search box value.
pub fn filter<'a, I>(raw_term: &str, names: I) -> SearchOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let term = normalize_term(raw_term);
    let visible: Vec<bool> = names.into_iter().map(|name| matches(&term, name)).collect();
    let show_no_results = !term.is_empty() && !visible.iter().any(|v| *v);

    tracing::trace!(term = %term, visible = visible.iter().filter(|v| **v).count(), "search filtered");

    SearchOutcome {
        visible,
        show_no_results,
    }
}
