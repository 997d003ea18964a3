//! Accent variants.
//!
//! The site styles each product card with a gradient string; here that is a
//! closed set of named variants resolved through a lookup table, so the
//! rendering surface maps an [`Accent`] to whatever palette it owns.

/// Named accent variant for a card or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Azure,
    Cyan,
    Teal,
    Green,
    Emerald,
    Lime,
    Amber,
    Ember,
    Coral,
}

/// Category token to accent, first match wins.
const ACCENT_TABLE: &[(&str, Accent)] = &[
    ("compliance", Accent::Azure),
    ("communication", Accent::Cyan),
    ("environmental", Accent::Teal),
    ("vehicles", Accent::Green),
    ("mining", Accent::Emerald),
    ("processing", Accent::Lime),
    ("infrastructure", Accent::Amber),
    ("integration", Accent::Ember),
    ("services", Accent::Coral),
];

impl Accent {
    /// Resolve the accent for a category token.
    ///
    /// Unknown tokens fall back to [`Accent::Azure`], the house primary.
    pub fn for_category(token: &str) -> Self {
        ACCENT_TABLE
            .iter()
            .find(|(key, _)| token.eq_ignore_ascii_case(key))
            .map(|(_, accent)| *accent)
            .unwrap_or(Accent::Azure)
    }

    /// Stable lowercase name, usable as a palette key.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Azure => "azure",
            Accent::Cyan => "cyan",
            Accent::Teal => "teal",
            Accent::Green => "green",
            Accent::Emerald => "emerald",
            Accent::Lime => "lime",
            Accent::Amber => "amber",
            Accent::Ember => "ember",
            Accent::Coral => "coral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        for (token, accent) in ACCENT_TABLE {
            assert_eq!(Accent::for_category(token), *accent);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Accent::for_category("Mining"), Accent::Emerald);
    }

    #[test]
    fn unknown_token_falls_back() {
        assert_eq!(Accent::for_category("kelp-farming"), Accent::Azure);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = [
            Accent::Azure,
            Accent::Cyan,
            Accent::Teal,
            Accent::Green,
            Accent::Emerald,
            Accent::Lime,
            Accent::Amber,
            Accent::Ember,
            Accent::Coral,
        ]
        .iter()
        .map(|a| a.name())
        .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}
