use crate::capability::interface::StanceJudgement;
use crate::checker::labels::{
    domain_label, quote_snippet, source_domain, status_for, verdict_phrase, Status,
};
use crate::corpus::store::EvidenceSnippet;
use serde::{Deserialize, Serialize};

/// One labeled evidence source, ready for presentation. Recomputed per
/// request; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    pub url: String,
    pub domain: String,
    pub status: Status,
    pub verdict: String,
    pub quote: String,
    pub title: String,
}

impl PresentationRecord {
    pub fn for_snippet(snippet: &EvidenceSnippet, judgement: &StanceJudgement) -> Self {
        let status = status_for(domain_label(&judgement.label));
        Self {
            url: snippet.url.clone(),
            domain: source_domain(&snippet.url),
            status,
            verdict: verdict_phrase(status).to_string(),
            quote: quote_snippet(&snippet.text),
            title: snippet.title.clone(),
        }
    }
}

/// Per-status counts over one request's sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub total: usize,
    pub supports: usize,
    pub debunks: usize,
    pub neutral: usize,
}

impl VerdictSummary {
    pub fn from_sources(sources: &[PresentationRecord]) -> Self {
        let supports = sources
            .iter()
            .filter(|s| s.status == Status::Supports)
            .count();
        let debunks = sources
            .iter()
            .filter(|s| s.status == Status::Debunks)
            .count();
        let neutral = sources
            .iter()
            .filter(|s| s.status == Status::Neutral)
            .count();
        Self {
            total: sources.len(),
            supports,
            debunks,
            neutral,
        }
    }

    /// Composes the overall verdict sentence from the support and
    /// contradiction counts; equal counts (including all-zero) read as
    /// mixed evidence.
    pub fn overall_verdict(&self) -> String {
        if self.supports > self.debunks {
            format!(
                "Based on {} sources, this claim appears to be **accurate**. {} source(s) support it, while {} contradict it.",
                self.total, self.supports, self.debunks
            )
        } else if self.debunks > self.supports {
            format!(
                "Based on {} sources, this claim appears to be **inaccurate**. {} source(s) contradict it, while {} support it.",
                self.total, self.debunks, self.supports
            )
        } else {
            format!(
                "Based on {} sources, the evidence is **mixed**. {} support, {} contradict, and {} are neutral.",
                self.total, self.supports, self.debunks, self.neutral
            )
        }
    }
}

/// Full response for one fact-checked claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckReport {
    pub claim: String,
    pub sources: Vec<PresentationRecord>,
    pub verdict: String,
    pub summary: VerdictSummary,
}
