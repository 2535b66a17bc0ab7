// crates/regiondb-core/src/traits.rs
use crate::model::{Country, Language, Region};
use crate::text::fold_key;

/// Name-based matching helpers for records that expose a display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use regiondb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Île-de-France").is_named("ile-de-france"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Extra names that should also match (other translations).
    fn alt_names(&self) -> Vec<&str> {
        Vec::new()
    }

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Substring match on the folded canonical name and any alternate names.
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        fold_key(self.name_str()).contains(&q)
            || self
                .alt_names()
                .into_iter()
                .any(|n| fold_key(n).contains(&q))
    }
}

/// Translations searched in addition to the English name.
const SEARCHABLE: [Language; 6] = [
    Language::French,
    Language::German,
    Language::Italian,
    Language::Spanish,
    Language::Dutch,
    Language::Portuguese,
];

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alt_names(&self) -> Vec<&str> {
        SEARCHABLE
            .iter()
            .map(|&l| self.translations.get(l))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl NameMatch for Region {
    fn name_str(&self) -> &str {
        &self.name
    }

    fn alt_names(&self) -> Vec<&str> {
        SEARCHABLE
            .iter()
            .map(|&l| self.translations.get(l))
            .filter(|s| !s.is_empty())
            .collect()
    }
}
