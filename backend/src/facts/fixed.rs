//! In-memory fact source for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;

use super::error::{FactError, FactResult};
use super::lookup::FactLookup;

/// Serves facts from a fixed map; numbers without an entry are unavailable.
#[derive(Debug, Clone, Default)]
pub struct FixedFacts {
    facts: HashMap<i64, String>,
}

impl FixedFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fact(mut self, number: i64, fact: impl Into<String>) -> Self {
        self.facts.insert(number, fact.into());
        self
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FromIterator<(i64, String)> for FixedFacts {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl FactLookup for FixedFacts {
    async fn lookup_fact(&self, number: i64) -> FactResult<String> {
        self.facts
            .get(&number)
            .cloned()
            .ok_or_else(|| FactError::unavailable(number, "no fixed fact registered"))
    }
}
