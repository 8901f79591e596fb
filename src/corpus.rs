//! Corpus records and the lookup interface the exporter drives.
//!
//! The exporter never sorts: iteration order is whatever order the corpus
//! hands back, and `JsonCorpus` preserves file order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// One word form belonging to a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub name: String,
}

/// One corpus entry: a group of word forms sharing a sense, with its
/// definition text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    /// Synset name, e.g. `dog.n.01`. Unique across the corpus.
    pub name: String,
    pub definition: String,
    #[serde(default)]
    pub lemmas: Vec<LemmaRecord>,
}

/// Lookup interface over a synset corpus.
pub trait Corpus {
    /// Records whose lemmas include `term` (case-insensitive), in corpus
    /// order. An unmatched term yields an empty result, not an error.
    fn lookup(&self, term: &str) -> Vec<&SynsetRecord>;

    /// Every record, in corpus order.
    fn all_records(&self) -> &[SynsetRecord];
}

/// In-memory corpus backed by a JSON array of synset records.
#[derive(Debug, Default)]
pub struct JsonCorpus {
    records: Vec<SynsetRecord>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl JsonCorpus {
    pub fn new(records: Vec<SynsetRecord>) -> Self {
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            for lemma in &record.lemmas {
                by_lemma
                    .entry(lemma.name.to_lowercase())
                    .or_default()
                    .push(idx);
            }
        }
        Self { records, by_lemma }
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: &Path) -> ExportResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ExportError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<SynsetRecord> =
            serde_json::from_str(&raw).map_err(|source| ExportError::CorpusParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Corpus for JsonCorpus {
    fn lookup(&self, term: &str) -> Vec<&SynsetRecord> {
        match self.by_lemma.get(&term.to_lowercase()) {
            Some(indices) => indices.iter().map(|&i| &self.records[i]).collect(),
            None => Vec::new(),
        }
    }

    fn all_records(&self) -> &[SynsetRecord] {
        &self.records
    }
}
