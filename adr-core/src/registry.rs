//! Algorithm registry — selects an ADR engine by id.
//!
//! The host builds the registry once at startup and resolves each device
//! profile's configured algorithm id through it. The registry holds no
//! per-device state.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::adr::{AdrAlgorithm, AdrRequest, AdrResponse, DefaultAdr};
use crate::errors::AdrError;

/// Registered ADR algorithms, keyed by id.
pub struct AdrRegistry {
    algorithms: BTreeMap<String, Box<dyn AdrAlgorithm>>,
}

impl AdrRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        AdrRegistry {
            algorithms: BTreeMap::new(),
        }
    }

    /// A registry holding the built-in default algorithm.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let default = DefaultAdr::new();
        registry.insert(default.id().to_owned(), Box::new(default));
        registry
    }

    /// Add an algorithm. Ids must be unique.
    pub fn register(&mut self, algorithm: Box<dyn AdrAlgorithm>) -> Result<(), AdrError> {
        let id = algorithm.id().to_owned();
        if self.algorithms.contains_key(&id) {
            warn!(id = %id, "rejected duplicate adr algorithm");
            return Err(AdrError::DuplicateAlgorithm(id));
        }
        self.insert(id, algorithm);
        Ok(())
    }

    fn insert(&mut self, id: String, algorithm: Box<dyn AdrAlgorithm>) {
        debug!(id = %id, name = algorithm.name(), "registered adr algorithm");
        self.algorithms.insert(id, algorithm);
    }

    /// Look up an algorithm by id.
    pub fn get(&self, id: &str) -> Result<&dyn AdrAlgorithm, AdrError> {
        self.algorithms
            .get(id)
            .map(|algorithm| algorithm.as_ref())
            .ok_or_else(|| AdrError::UnknownAlgorithm(id.to_owned()))
    }

    /// `(id, name)` pairs in id order.
    pub fn algorithms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.algorithms
            .iter()
            .map(|(id, algorithm)| (id.as_str(), algorithm.name()))
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// True when no algorithm is registered.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Run the algorithm registered under `id`.
    pub fn decide(&self, id: &str, req: &AdrRequest) -> Result<AdrResponse, AdrError> {
        Ok(self.get(id)?.decide(req))
    }
}

impl Default for AdrRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for AdrRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.algorithms.keys()).finish()
    }
}
