//! Text document identifier type.

use std::fmt;

use crate::common::{Error, Result};

/// Identifies a text document in the backing store.
///
/// Valid identifiers are `1..=key_domain_size`. Zero is never a valid
/// document, which keeps the on-disk file names (`1.txt`, `2.txt`, ...)
/// aligned with the ids.
///
/// # Example
/// ```
/// use textcache::TextId;
///
/// let id = TextId::new(42);
/// assert!(id.in_domain(100));
/// assert_eq!(id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextId(pub u32);

impl TextId {
    /// Create a new TextId without checking the domain.
    #[inline]
    pub fn new(id: u32) -> Self {
        TextId(id)
    }

    /// Build a TextId from raw user input, rejecting anything outside
    /// `1..=domain`.
    ///
    /// # Errors
    /// Returns `Error::KeyOutOfDomain` if `raw` is not a valid document id.
    pub fn checked(raw: i64, domain: u32) -> Result<Self> {
        if raw >= 1 && raw <= i64::from(domain) {
            Ok(TextId(raw as u32))
        } else {
            Err(Error::KeyOutOfDomain { key: raw, domain })
        }
    }

    /// Check if this id lies in `1..=domain`.
    #[inline]
    pub fn in_domain(&self, domain: u32) -> bool {
        self.0 >= 1 && self.0 <= domain
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_id_new() {
        let id = TextId::new(42);
        assert_eq!(id.0, 42);
        assert!(id.in_domain(100));
    }

    #[test]
    fn test_text_id_checked_bounds() {
        assert_eq!(TextId::checked(1, 100).unwrap(), TextId(1));
        assert_eq!(TextId::checked(100, 100).unwrap(), TextId(100));
        assert!(TextId::checked(0, 100).is_err());
        assert!(TextId::checked(101, 100).is_err());
        assert!(TextId::checked(-1, 100).is_err());
    }

    #[test]
    fn test_text_id_zero_not_in_domain() {
        assert!(!TextId::new(0).in_domain(100));
    }

    #[test]
    fn test_text_id_ordering() {
        assert!(TextId::new(1) < TextId::new(2));
        assert!(TextId::new(5) > TextId::new(3));
    }

    #[test]
    fn test_text_id_display() {
        assert_eq!(format!("{}", TextId::new(42)), "Text(42)");
    }
}
