use crate::capability::interface::{
    stance_pair_input, EmbeddingEncoder, StanceClassifier, VectorIndex,
};
use crate::checker::model::{FactCheckReport, PresentationRecord, VerdictSummary};
use crate::corpus::index::FlatL2Index;
use crate::corpus::matrix::EmbeddingMatrix;
use crate::corpus::store::MetadataStore;
use crate::error::{CoreError, CoreResult};
use std::path::Path;

pub const DEFAULT_TOP_K: usize = 5;

/// Owns the three capability handles and the metadata store. Built once
/// at startup and read-only afterwards; every request flows through
/// `fact_check` without touching any other state.
pub struct FactChecker<E, I, S> {
    encoder: E,
    index: I,
    classifier: S,
    store: MetadataStore,
}

impl<E, I, S> FactChecker<E, I, S>
where
    E: EmbeddingEncoder,
    I: VectorIndex,
    S: StanceClassifier,
{
    /// Wires the capabilities together, refusing to start on any
    /// row-count or dimensionality mismatch. A misaligned store would
    /// silently return wrong evidence for every claim.
    pub fn new(encoder: E, index: I, classifier: S, store: MetadataStore) -> CoreResult<Self> {
        if index.len() != store.len() {
            return Err(CoreError::Alignment(format!(
                "index holds {} vectors but metadata holds {} records",
                index.len(),
                store.len()
            )));
        }
        if encoder.dimension() != index.dimension() {
            return Err(CoreError::Alignment(format!(
                "encoder produces {}-dimensional vectors but index holds {}-dimensional vectors",
                encoder.dimension(),
                index.dimension()
            )));
        }
        Ok(Self {
            encoder,
            index,
            classifier,
            store,
        })
    }

    /// Retrieves the nearest evidence for a claim, classifies each
    /// snippet's stance, and aggregates an overall verdict. Any
    /// capability failure aborts the whole request; no partial evidence
    /// list is returned.
    pub fn fact_check(&self, claim: &str, top_k: usize) -> CoreResult<FactCheckReport> {
        let claim = claim.trim();
        if claim.is_empty() {
            return Err(CoreError::InvalidInput(
                "claim cannot be empty".to_string(),
            ));
        }
        if top_k == 0 {
            return Err(CoreError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }

        let query = self.encoder.encode_one(claim)?;
        let neighbors = self.index.search(&query, top_k)?;

        // Ascending-distance order is the ranking contract; sources keep it.
        let mut sources = Vec::with_capacity(neighbors.len());
        for neighbor in &neighbors {
            let snippet = self.store.get(neighbor.row_id).ok_or_else(|| {
                CoreError::Alignment(format!(
                    "index returned row {} outside the metadata range",
                    neighbor.row_id
                ))
            })?;
            let judgement = self
                .classifier
                .classify(&stance_pair_input(claim, &snippet.text))?;
            sources.push(PresentationRecord::for_snippet(&snippet, &judgement));
        }

        let summary = VerdictSummary::from_sources(&sources);
        let verdict = summary.overall_verdict();
        Ok(FactCheckReport {
            claim: claim.to_string(),
            sources,
            verdict,
            summary,
        })
    }
}

impl<E, S> FactChecker<E, FlatL2Index, S>
where
    E: EmbeddingEncoder,
    S: StanceClassifier,
{
    /// Startup path over the persisted corpus artifacts: loads the
    /// float32 matrix and the metadata file, rebuilds the exact L2
    /// index from the matrix, and validates alignment.
    pub fn open(
        matrix_path: impl AsRef<Path>,
        meta_path: impl AsRef<Path>,
        encoder: E,
        classifier: S,
    ) -> CoreResult<Self> {
        let matrix = EmbeddingMatrix::load(matrix_path, encoder.dimension())?;
        let store = MetadataStore::load(meta_path)?;
        let index = FlatL2Index::new(matrix);
        Self::new(encoder, index, classifier, store)
    }
}
