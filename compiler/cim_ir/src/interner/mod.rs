//! String interner for IRIs.
//!
//! Every ontology identifier and every canonical identifier the engine
//! produces is interned once. Interned strings are leaked, so lookups hand
//! out `&'static str` without holding the lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Iri;

/// Storage for interned strings.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        let mut strings = Vec::with_capacity(256);
        strings.push(empty);
        InternTable { map, strings }
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Table exceeded capacity (over 4 billion strings).
    #[error("IRI interner exceeded capacity: {count} strings, max is {}", u32::MAX)]
    Overflow { count: usize },
}

/// IRI interner.
///
/// Interior mutability lets the engine derive and intern new identifiers
/// while holding only a shared reference to the ontology store that owns it.
pub struct IriInterner {
    table: RwLock<InternTable>,
}

impl IriInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        IriInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its `Iri` or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Iri, InternError> {
        // Fast path: already interned
        if let Some(&index) = self.table.read().map.get(s) {
            return Ok(Iri::new(index));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(s) {
            return Ok(Iri::new(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Iri::new(index))
    }

    /// Intern a string, returning its `Iri`.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Iri {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Find an already-interned string without interning it.
    pub fn get(&self, s: &str) -> Option<Iri> {
        self.table.read().map.get(s).map(|&index| Iri::new(index))
    }

    /// Look up the string for an `Iri`.
    ///
    /// # Panics
    /// Panics if `iri` was produced by a different interner with more entries.
    pub fn lookup(&self, iri: Iri) -> &'static str {
        self.table.read().strings[iri.index()]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for IriInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IriInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IriInterner").field("len", &self.len()).finish()
    }
}
