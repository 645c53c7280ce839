//! The search entry page: an ASIN typed by the visitor is validated and
//! carried through to the report creation page.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::form_urlencoded;

pub const ASIN_PARAM: &str = "asin";
pub const MARKETPLACE_PARAM: &str = "marketplace";
pub const DEFAULT_CREATE_PAGE: &str = "create.html";
const ASIN_LEN: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("No ASIN was provided")]
    MissingAsin,
    #[error("'{0}' is not a valid ASIN (expected 10 letters or digits)")]
    InvalidAsin(String),
    #[error("Unsupported marketplace '{0}'")]
    UnknownMarketplace(String),
}

/// Amazon marketplaces reports can be generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Marketplace {
    #[default]
    Us,
    Uk,
    De,
    Fr,
    It,
    Es,
    Ca,
    Jp,
}

impl Marketplace {
    pub const ALL: [Marketplace; 8] = [
        Marketplace::Us,
        Marketplace::Uk,
        Marketplace::De,
        Marketplace::Fr,
        Marketplace::It,
        Marketplace::Es,
        Marketplace::Ca,
        Marketplace::Jp,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Marketplace::Us => "US",
            Marketplace::Uk => "UK",
            Marketplace::De => "DE",
            Marketplace::Fr => "FR",
            Marketplace::It => "IT",
            Marketplace::Es => "ES",
            Marketplace::Ca => "CA",
            Marketplace::Jp => "JP",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Marketplace {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Marketplace::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EntryError::UnknownMarketplace(wanted.to_string()))
    }
}

/// Normalizes and validates an ASIN: trimmed, upper-cased, exactly ten
/// ASCII letters or digits.
pub fn normalize_asin(raw: &str) -> Result<String, EntryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EntryError::MissingAsin);
    }
    if trimmed.len() != ASIN_LEN || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EntryError::InvalidAsin(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// A validated search-entry submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub asin: String,
    pub marketplace: Marketplace,
}

impl SearchEntry {
    pub fn new(asin: &str, marketplace: Marketplace) -> Result<Self, EntryError> {
        Ok(Self {
            asin: normalize_asin(asin)?,
            marketplace,
        })
    }

    /// Reads `asin` and the optional `marketplace` from a query string.
    pub fn from_query(query: &str) -> Result<Self, EntryError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut asin = None;
        let mut marketplace = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                ASIN_PARAM if asin.is_none() => asin = Some(value.into_owned()),
                MARKETPLACE_PARAM if marketplace.is_none() => marketplace = Some(value.into_owned()),
                _ => {}
            }
        }

        let marketplace = match marketplace.as_deref().map(str::trim) {
            None | Some("") => Marketplace::default(),
            Some(code) => code.parse()?,
        };
        Self::new(asin.as_deref().unwrap_or(""), marketplace)
    }

    /// URL of the creation page with the entry passed through as query
    /// parameters.
    pub fn creation_url(&self, create_page: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(ASIN_PARAM, &self.asin)
            .append_pair(MARKETPLACE_PARAM, self.marketplace.code())
            .finish();
        let sep = if create_page.contains('?') { '&' } else { '?' };
        format!("{}{}{}", create_page, sep, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_asin() {
        assert_eq!(normalize_asin(" b07zpkbl9v ").unwrap(), "B07ZPKBL9V");
        assert_eq!(normalize_asin("0306406152").unwrap(), "0306406152");
        assert_eq!(normalize_asin(""), Err(EntryError::MissingAsin));
        assert!(matches!(normalize_asin("B07ZPKBL9"), Err(EntryError::InvalidAsin(_))));
        assert!(matches!(normalize_asin("B07-PKBL9V"), Err(EntryError::InvalidAsin(_))));
        assert!(matches!(normalize_asin("B07ZPKBL9É"), Err(EntryError::InvalidAsin(_))));
    }

    #[test]
    fn test_from_query_defaults_marketplace() {
        let entry = SearchEntry::from_query("?asin=B07ZPKBL9V").unwrap();
        assert_eq!(entry.asin, "B07ZPKBL9V");
        assert_eq!(entry.marketplace, Marketplace::Us);
    }

    #[test]
    fn test_from_query_reads_marketplace() {
        let entry = SearchEntry::from_query("asin=b07zpkbl9v&marketplace=de").unwrap();
        assert_eq!(entry.marketplace, Marketplace::De);
        assert_eq!(entry.asin, "B07ZPKBL9V");
    }

    #[test]
    fn test_from_query_errors() {
        assert_eq!(SearchEntry::from_query("?q=coffee"), Err(EntryError::MissingAsin));
        assert_eq!(
            SearchEntry::from_query("?asin=B07ZPKBL9V&marketplace=BR"),
            Err(EntryError::UnknownMarketplace("BR".to_string()))
        );
    }

    #[test]
    fn test_creation_url_passes_asin_through() {
        let entry = SearchEntry::new("B07ZPKBL9V", Marketplace::Uk).unwrap();
        assert_eq!(
            entry.creation_url(DEFAULT_CREATE_PAGE),
            "create.html?asin=B07ZPKBL9V&marketplace=UK"
        );
        assert_eq!(
            entry.creation_url("/create?lang=en"),
            "/create?lang=en&asin=B07ZPKBL9V&marketplace=UK"
        );
    }

    #[test]
    fn test_marketplace_round_trips_through_code() {
        for m in Marketplace::ALL {
            assert_eq!(m.code().parse::<Marketplace>().unwrap(), m);
        }
    }
}
