//! Heading anchors.
//!
//! Anchors are derived from the visible heading text and must be usable as a
//! URL fragment. Han ideographs (U+4E00..=U+9FA5) are kept as-is so reports
//! written in Chinese still get readable anchors.

use once_cell::sync::Lazy;
use regex::Regex;
use reportview_types::AnchorId;
use std::collections::HashSet;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-\x{4E00}-\x{9FA5}]").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Converts heading text to an anchor. May return an empty string.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lower, "-");
    let stripped = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Hands out anchors that are unique within one render.
///
/// A repeated base gets `-1`, `-2`, ... appended; an empty base is replaced
/// by `heading-<position>`.
#[derive(Debug, Default)]
pub struct Slugger {
    used: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor_for(&mut self, text: &str, position: usize) -> AnchorId {
        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("heading-{}", position);
        }

        let mut candidate = base.clone();
        let mut counter = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{}-{}", base, counter);
            counter += 1;
        }
        self.used.insert(candidate.clone());
        AnchorId::from(candidate)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-' || ('\u{4E00}'..='\u{9FA5}').contains(&c)
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Market Overview"), "market-overview");
        assert_eq!(slugify("  Pricing   & Margins  "), "pricing-margins");
        assert_eq!(slugify("1. Executive Summary"), "1-executive-summary");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_slugify_collapses_and_trims_hyphens() {
        assert_eq!(slugify("--Top -- Sellers--"), "top-sellers");
        assert_eq!(slugify("A - B"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_han_and_drops_other_scripts() {
        assert_eq!(slugify("市场 概览"), "市场-概览");
        assert_eq!(slugify("Café Crème"), "caf-crme");
        assert_eq!(slugify("Обзор"), "");
    }

    #[test]
    fn test_slugify_can_be_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_duplicates_get_counter_suffix() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.anchor_for("Market Overview", 0).as_str(), "market-overview");
        assert_eq!(slugger.anchor_for("Market Overview", 1).as_str(), "market-overview-1");
        assert_eq!(slugger.anchor_for("Market Overview", 2).as_str(), "market-overview-2");
    }

    #[test]
    fn test_suffix_skips_taken_candidates() {
        let mut slugger = Slugger::new();
        slugger.anchor_for("Risks 1", 0);
        slugger.anchor_for("Risks", 1);
        // "risks-1" is taken by the first heading
        assert_eq!(slugger.anchor_for("Risks", 2).as_str(), "risks-2");
    }

    #[test]
    fn test_empty_slug_uses_position() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.anchor_for("???", 3).as_str(), "heading-3");
        assert_eq!(slugger.anchor_for("", 3).as_str(), "heading-3-1");
    }

    #[test]
    fn test_identical_headings_yield_distinct_anchors() {
        let mut slugger = Slugger::new();
        let anchors: Vec<_> = (0..25).map(|i| slugger.anchor_for("Summary", i)).collect();

        let unique: HashSet<_> = anchors.iter().map(|a| a.as_str().to_string()).collect();
        assert_eq!(unique.len(), 25);
        assert_eq!(anchors[0].as_str(), "summary");
        for (n, anchor) in anchors.iter().enumerate().skip(1) {
            assert_eq!(anchor.as_str(), format!("summary-{}", n));
        }
    }

    #[test]
    fn test_anchors_are_non_empty_and_restricted() {
        let texts = ["Hello, World!", "¿Qué?", "   ", "价格 — Pricing", "a\tb\nc", "🚀 Launch"];
        let mut slugger = Slugger::new();
        for (i, text) in texts.iter().enumerate() {
            let anchor = slugger.anchor_for(text, i);
            assert!(!anchor.as_str().is_empty(), "empty anchor for {:?}", text);
            assert!(anchor.as_str().chars().all(is_allowed), "bad anchor {:?}", anchor);
        }
        assert_eq!(slugger.len(), texts.len());
    }
}
