//! Raw page-selection input.

use crate::window::PageEntry;

/// A page selection as it arrives from a control: a clicked entry, a typed
/// value, or a number computed elsewhere.
///
/// Anything that is not an integer collapses to [`PageRequest::Invalid`];
/// range checks happen later against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// An integer page number, not yet range-checked.
    Page(i64),
    /// Not an integer (ellipsis, text, fraction, NaN).
    Invalid,
}

impl PageRequest {
    /// Parse typed input. Surrounding whitespace is ignored and integral
    /// decimals such as `"3.0"` count as integers.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(page) = raw.parse::<i64>() {
            return Self::Page(page);
        }
        match raw.parse::<f64>() {
            Ok(value) => Self::from(value),
            Err(_) => Self::Invalid,
        }
    }

    /// The integer page number, if any.
    pub fn page(self) -> Option<i64> {
        match self {
            Self::Page(page) => Some(page),
            Self::Invalid => None,
        }
    }
}

impl From<i64> for PageRequest {
    fn from(page: i64) -> Self {
        Self::Page(page)
    }
}

impl From<usize> for PageRequest {
    fn from(page: usize) -> Self {
        i64::try_from(page).map_or(Self::Invalid, Self::Page)
    }
}

impl From<i32> for PageRequest {
    fn from(page: i32) -> Self {
        Self::Page(i64::from(page))
    }
}

impl From<f64> for PageRequest {
    fn from(value: f64) -> Self {
        let in_range = value >= i64::MIN as f64 && value <= i64::MAX as f64;
        if value.is_finite() && value.fract() == 0.0 && in_range {
            Self::Page(value as i64)
        } else {
            Self::Invalid
        }
    }
}

impl From<&str> for PageRequest {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<PageEntry> for PageRequest {
    fn from(entry: PageEntry) -> Self {
        entry.page().map_or(Self::Invalid, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(PageRequest::parse("3"), PageRequest::Page(3));
        assert_eq!(PageRequest::parse(" 7 "), PageRequest::Page(7));
        assert_eq!(PageRequest::parse("-2"), PageRequest::Page(-2));
        assert_eq!(PageRequest::parse("4.0"), PageRequest::Page(4));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(PageRequest::parse("..."), PageRequest::Invalid);
        assert_eq!(PageRequest::parse(""), PageRequest::Invalid);
        assert_eq!(PageRequest::parse("2.5"), PageRequest::Invalid);
        assert_eq!(PageRequest::parse("NaN"), PageRequest::Invalid);
        assert_eq!(PageRequest::parse("inf"), PageRequest::Invalid);
        assert_eq!(PageRequest::parse("next"), PageRequest::Invalid);
    }

    #[test]
    fn test_from_entry() {
        assert_eq!(PageRequest::from(PageEntry::Page(9)), PageRequest::Page(9));
        assert_eq!(PageRequest::from(PageEntry::Ellipsis), PageRequest::Invalid);
    }

    #[test]
    fn test_from_float() {
        assert_eq!(PageRequest::from(2.0), PageRequest::Page(2));
        assert_eq!(PageRequest::from(2.5), PageRequest::Invalid);
        assert_eq!(PageRequest::from(f64::NAN), PageRequest::Invalid);
    }
}
