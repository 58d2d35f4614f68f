//! Chirp and Document definitions
//!
//! The record type and the full on-disk document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChirpyError, Result};

/// A single chirp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Store-assigned id, strictly positive and never reused
    #[serde(rename = "Id")]
    pub id: u64,

    /// Text of the chirp
    pub body: String,
}

impl Chirp {
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

/// The entire persisted state: every chirp keyed by its id
///
/// This is the unit of both read and write. Keys are written as strings
/// (`"1"`) since JSON object keys must be strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chirps: BTreeMap<u64, Chirp>,
}

impl Document {
    /// Parse a document from raw file contents
    ///
    /// Zero bytes is the empty document, not a parse error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let document: Document = serde_json::from_slice(bytes)
            .map_err(|e| ChirpyError::Load(format!("malformed document: {}", e)))?;
        document.validate()?;

        Ok(document)
    }

    /// Serialize the full document
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Check that every key matches its chirp's id and that ids are positive
    pub fn validate(&self) -> Result<()> {
        for (key, chirp) in &self.chirps {
            if *key == 0 {
                return Err(ChirpyError::Load("chirp id 0 is not allowed".to_string()));
            }
            if *key != chirp.id {
                return Err(ChirpyError::Load(format!(
                    "key {} does not match embedded id {}",
                    key, chirp.id
                )));
            }
        }
        Ok(())
    }

    /// Next id to assign: max existing id + 1, or 1 when empty
    ///
    /// Full scan over the records; fine at the record counts this store targets.
    /// Fails once `u64::MAX` has been handed out.
    pub fn next_id(&self) -> Result<u64> {
        match self.chirps.values().map(|chirp| chirp.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| ChirpyError::Write(format!("no id left after {}", max))),
        }
    }

    /// Insert a chirp under its own id
    pub fn insert(&mut self, chirp: Chirp) {
        self.chirps.insert(chirp.id, chirp);
    }

    pub fn len(&self) -> usize {
        self.chirps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty()
    }

    /// Consume the document, yielding every chirp
    pub fn into_chirps(self) -> Vec<Chirp> {
        self.chirps.into_values().collect()
    }
}

/// `"chirps": null` reads as an empty map
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<u64, Chirp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<u64, Chirp>>::deserialize(deserializer)?.unwrap_or_default())
}
