use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Separator the stance model recognizes as a sentence-pair delimiter.
pub const PAIR_SEPARATOR: &str = " </s></s> ";

/// Builds the single classifier input for one (claim, snippet) pair.
pub fn stance_pair_input(claim: &str, snippet_text: &str) -> String {
    format!("{}{}{}", claim, PAIR_SEPARATOR, snippet_text)
}

/// Stance vocabulary as emitted by the model. The vocabulary is
/// model-defined, so anything outside the three known classes is kept
/// verbatim in `Other` and resolved downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawStanceLabel {
    Entailment,
    Contradiction,
    Neutral,
    Other(String),
}

impl RawStanceLabel {
    pub fn from_model_label(label: &str) -> Self {
        match label {
            "ENTAILMENT" => RawStanceLabel::Entailment,
            "CONTRADICTION" => RawStanceLabel::Contradiction,
            "NEUTRAL" => RawStanceLabel::Neutral,
            other => RawStanceLabel::Other(other.to_string()),
        }
    }
}

/// Highest-scoring class for one (claim, snippet) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StanceJudgement {
    pub label: RawStanceLabel,
    pub confidence: f32,
}

/// One hit returned by a vector index search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row_id: usize,
    pub distance: f32,
}

/// Text to fixed-dimension vector. Must be deterministic for a fixed
/// model version: identical text yields an identical vector.
pub trait EmbeddingEncoder {
    fn dimension(&self) -> usize;

    /// Encodes a batch of texts, one vector per input in the same order.
    fn encode(&self, texts: &[&str]) -> CoreResult<Vec<Vec<f32>>>;

    fn encode_one(&self, text: &str) -> CoreResult<Vec<f32>> {
        let mut vectors = self.encode(&[text])?;
        if vectors.len() != 1 {
            return Err(CoreError::Capability(format!(
                "encoder returned {} vectors for a single input",
                vectors.len()
            )));
        }
        Ok(vectors.remove(0))
    }
}

/// Nearest-neighbor search over fixed-dimension vectors, immutable at
/// query time. Results are ordered ascending by distance and contain at
/// most `min(k, len)` hits.
pub trait VectorIndex {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dimension(&self) -> usize;

    fn search(&self, query: &[f32], k: usize) -> CoreResult<Vec<Neighbor>>;
}

/// (claim, snippet) pair to stance judgement. The input is the joined
/// pair produced by `stance_pair_input`.
pub trait StanceClassifier {
    fn classify(&self, pair_input: &str) -> CoreResult<StanceJudgement>;
}
