use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk metadata record, one per corpus passage, written by the
/// offline index build in the same order as the embedding matrix rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    #[serde(default)]
    pub title: String,
    pub url: String,
    pub text: String,
}

/// A metadata record resolved by row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceSnippet {
    pub row_id: usize,
    pub title: String,
    pub url: String,
    pub text: String,
}

/// Read-only, positionally ordered snippet collection. Row id `i` here
/// must correspond to vector `i` in the index built from the same
/// corpus; the alignment is validated once at startup.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    records: Vec<SnippetRecord>,
}

impl MetadataStore {
    /// Loads the ordered JSON array of `{title, url, text}` records.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let records: Vec<SnippetRecord> = serde_json::from_str(&raw)?;
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<SnippetRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, row_id: usize) -> Option<EvidenceSnippet> {
        self.records.get(row_id).map(|r| EvidenceSnippet {
            row_id,
            title: r.title.clone(),
            url: r.url.clone(),
            text: r.text.clone(),
        })
    }
}
