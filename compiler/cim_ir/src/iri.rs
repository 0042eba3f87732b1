//! Interned IRI handle and IRI string helpers.

use std::fmt;

/// Interned IRI.
///
/// A plain index into an [`IriInterner`](crate::IriInterner). Two `Iri`s from
/// the same interner are equal exactly when their strings are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Iri(u32);

impl Iri {
    /// Pre-interned empty string.
    pub const EMPTY: Iri = Iri(0);

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Iri(index)
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iri({})", self.0)
    }
}

/// Position just past the last namespace separator (`#`, `/` or `:`).
fn split_point(iri: &str) -> usize {
    iri.rfind(|c: char| matches!(c, '#' | '/' | ':')).map_or(0, |idx| idx + 1)
}

/// The local part of an IRI: everything after the last `#`, `/` or `:`.
///
/// An IRI without any separator is entirely local.
pub fn local_name(iri: &str) -> &str {
    &iri[split_point(iri)..]
}

/// The namespace of an IRI, including its trailing separator.
pub fn namespace_of(iri: &str) -> &str {
    &iri[..split_point(iri)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_after_hash() {
        assert_eq!(local_name("http://iec.ch/TC57/CIM#Breaker"), "Breaker");
        assert_eq!(namespace_of("http://iec.ch/TC57/CIM#Breaker"), "http://iec.ch/TC57/CIM#");
    }

    #[test]
    fn local_name_after_slash() {
        assert_eq!(local_name("http://example.com/ns/Switch"), "Switch");
        assert_eq!(namespace_of("http://example.com/ns/Switch"), "http://example.com/ns/");
    }

    #[test]
    fn hash_wins_over_earlier_slash() {
        assert_eq!(local_name("http://a/b#c.d"), "c.d");
    }

    #[test]
    fn iri_without_separator_is_all_local() {
        assert_eq!(local_name("Breaker"), "Breaker");
        assert_eq!(namespace_of("Breaker"), "");
    }

    #[test]
    fn trailing_separator_has_empty_local() {
        assert_eq!(local_name("http://a/b#"), "");
    }
}
