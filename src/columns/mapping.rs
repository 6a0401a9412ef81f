// src/columns/mapping.rs

use crate::columns::classify::{classify_column, CanonicalColumn};
use crate::config::CollisionPolicy;
use crate::error::LoadError;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// What happens to one original column when the mapping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFate {
    Rename(CanonicalColumn),
    Keep,
    /// Superseded column whose header already equals the winning canonical name.
    Drop,
}

/// A column that matched a canonical field but lost to a later match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Superseded {
    pub original: String,
    pub canonical: CanonicalColumn,
    pub winner: String,
    pub dropped: bool,
}

/// Original header → canonical field, at most one original per canonical field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    renames: BTreeMap<String, CanonicalColumn>,
    superseded: Vec<Superseded>,
}

impl ColumnMapping {
    /// Canonical name the given original column is renamed to, if any.
    pub fn renamed(&self, original: &str) -> Option<&'static str> {
        self.renames.get(original).map(|c| c.as_str())
    }

    pub fn fate(&self, original: &str) -> ColumnFate {
        if let Some(canonical) = self.renames.get(original) {
            return ColumnFate::Rename(*canonical);
        }
        match self.superseded.iter().find(|s| s.original == original) {
            Some(s) if s.dropped => ColumnFate::Drop,
            _ => ColumnFate::Keep,
        }
    }

    pub fn superseded(&self) -> &[Superseded] {
        &self.superseded
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// Iterate `(original, canonical)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalColumn)> {
        self.renames.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Classify every header and resolve collisions according to `policy`.
pub fn build_column_mapping<S: AsRef<str>>(
    columns: &[S],
    policy: CollisionPolicy,
) -> Result<ColumnMapping, LoadError> {
    let mut matches: BTreeMap<CanonicalColumn, Vec<String>> = BTreeMap::new();
    for col in columns {
        let col = col.as_ref();
        if let Some(canonical) = classify_column(col) {
            matches.entry(canonical).or_default().push(col.to_string());
        }
    }

    let mut mapping = ColumnMapping::default();
    for (canonical, mut originals) in matches {
        if originals.len() > 1 && policy == CollisionPolicy::Reject {
            return Err(LoadError::DuplicateCanonical {
                canonical: canonical.to_string(),
                originals,
            });
        }

        // header order preserved, so the last entry is the winner
        let Some(winner) = originals.pop() else {
            continue;
        };
        for original in originals {
            let dropped = original == canonical.as_str();
            warn!(
                original = %original,
                winner = %winner,
                canonical = %canonical,
                dropped,
                "column superseded by a later match"
            );
            mapping.superseded.push(Superseded {
                original,
                canonical,
                winner: winner.clone(),
                dropped,
            });
        }
        debug!(original = %winner, canonical = %canonical, "column renamed");
        mapping.renames.insert(winner, canonical);
    }

    Ok(mapping)
}
