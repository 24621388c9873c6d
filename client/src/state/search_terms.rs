//! Search-term chips: product names, manufacturers and side effects.
//!
//! DESIGN
//! ======
//! `SearchTermSet` is owned by the page that builds a search and is handed to
//! child components through a `RwSignal` context. The URL is the only channel
//! between page loads: the set is read from repeated query parameters on load
//! and flattened back into them on submission.
//!
//! Invalid input is never an error. Empty, whitespace-only, duplicate and
//! absent terms are silent no-ops; mutators return whether anything changed.

#[cfg(test)]
#[path = "search_terms_test.rs"]
mod search_terms_test;

use crate::util::query::QueryParams;

/// One named bucket of free-text filter values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermCategory {
    ProductName,
    Manufacturer,
    SideEffect,
}

impl TermCategory {
    /// Fixed display and serialization order.
    pub const ALL: [TermCategory; 3] = [Self::ProductName, Self::Manufacturer, Self::SideEffect];

    /// Repeated query parameter carrying this category's values.
    pub fn param(self) -> &'static str {
        match self {
            Self::ProductName => "product_name",
            Self::Manufacturer => "manufacturer",
            Self::SideEffect => "side_effect",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ProductName => "제품명",
            Self::Manufacturer => "제조사",
            Self::SideEffect => "부작용",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.param() == raw)
    }
}

/// Render model for one removable chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermChip {
    pub category: TermCategory,
    pub term: String,
}

/// Three deduplicated, insertion-ordered term lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTermSet {
    product_names: Vec<String>,
    manufacturers: Vec<String>,
    side_effects: Vec<String>,
}

impl SearchTermSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a raw query string.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut set = Self::new();
        set.init_from_query(query);
        set
    }

    /// Add every `product_name`, `manufacturer` and `side_effect` value in
    /// `query` with `add` semantics.
    pub fn init_from_query(&mut self, query: &str) -> bool {
        let params = QueryParams::parse(query);
        let mut changed = false;
        for category in TermCategory::ALL {
            for value in params.get_all(category.param()) {
                changed |= self.add(category, value);
            }
        }
        changed
    }

    /// Trim `raw` and append it to `category` unless it is empty or already
    /// present.
    pub fn add(&mut self, category: TermCategory, raw: &str) -> bool {
        let term = raw.trim();
        if term.is_empty() {
            return false;
        }
        let terms = self.terms_mut(category);
        if terms.iter().any(|t| t == term) {
            return false;
        }
        terms.push(term.to_owned());
        true
    }

    /// Remove the exact `term` from `category`.
    pub fn remove(&mut self, category: TermCategory, term: &str) -> bool {
        let terms = self.terms_mut(category);
        let before = terms.len();
        terms.retain(|t| t != term);
        terms.len() != before
    }

    /// Empty all three categories.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        self.product_names.clear();
        self.manufacturers.clear();
        self.side_effects.clear();
        changed
    }

    pub fn terms(&self, category: TermCategory) -> &[String] {
        match category {
            TermCategory::ProductName => &self.product_names,
            TermCategory::Manufacturer => &self.manufacturers,
            TermCategory::SideEffect => &self.side_effects,
        }
    }

    fn terms_mut(&mut self, category: TermCategory) -> &mut Vec<String> {
        match category {
            TermCategory::ProductName => &mut self.product_names,
            TermCategory::Manufacturer => &mut self.manufacturers,
            TermCategory::SideEffect => &mut self.side_effects,
        }
    }

    pub fn is_empty(&self) -> bool {
        TermCategory::ALL.into_iter().all(|c| self.terms(c).is_empty())
    }

    pub fn len(&self) -> usize {
        TermCategory::ALL.into_iter().map(|c| self.terms(c).len()).sum()
    }

    /// Full chip list in category order.
    pub fn chips(&self) -> Vec<TermChip> {
        TermCategory::ALL
            .into_iter()
            .flat_map(|category| {
                self.terms(category).iter().map(move |term| TermChip {
                    category,
                    term: term.clone(),
                })
            })
            .collect()
    }

    /// One repeated parameter per stored value, category order first.
    pub fn to_query_params(&self) -> QueryParams {
        TermCategory::ALL
            .into_iter()
            .flat_map(|category| {
                self.terms(category)
                    .iter()
                    .map(move |term| (category.param(), term.as_str()))
            })
            .collect()
    }
}

/// Chips for the terms already applied to a result page URL.
///
/// Values are shown as the URL carries them so that removing a chip matches
/// the exact parameter value; blanks and repeats are skipped.
pub fn applied_chips(query: &str) -> Vec<TermChip> {
    let params = QueryParams::parse(query);
    let mut chips: Vec<TermChip> = Vec::new();
    for category in TermCategory::ALL {
        for value in params.get_all(category.param()) {
            if value.trim().is_empty() {
                continue;
            }
            if chips.iter().any(|c| c.category == category && c.term == value) {
                continue;
            }
            chips.push(TermChip {
                category,
                term: value.to_owned(),
            });
        }
    }
    chips
}
