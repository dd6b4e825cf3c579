use crate::capability::interface::RawStanceLabel;
use serde::{Deserialize, Serialize};
use url::Url;

pub const UNKNOWN_DOMAIN: &str = "unknown";
pub const QUOTE_LIMIT_CHARS: usize = 200;
pub const QUOTE_ELLIPSIS: &str = "...";

/// Internal stance vocabulary after normalizing the classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainLabel {
    Support,
    Refute,
    Neutral,
}

/// User-facing status attached to each evidence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Supports,
    Debunks,
    Neutral,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Supports => "supports",
            Status::Debunks => "debunks",
            Status::Neutral => "neutral",
        }
    }
}

/// First mapping stage. Total over every possible classifier label:
/// anything outside the three known classes resolves to Neutral rather
/// than failing the request.
pub fn domain_label(raw: &RawStanceLabel) -> DomainLabel {
    match raw {
        RawStanceLabel::Entailment => DomainLabel::Support,
        RawStanceLabel::Contradiction => DomainLabel::Refute,
        RawStanceLabel::Neutral | RawStanceLabel::Other(_) => DomainLabel::Neutral,
    }
}

/// Second mapping stage: domain label to presentation status.
pub fn status_for(label: DomainLabel) -> Status {
    match label {
        DomainLabel::Support => Status::Supports,
        DomainLabel::Refute => Status::Debunks,
        DomainLabel::Neutral => Status::Neutral,
    }
}

/// Single source of truth for the per-source verdict wording.
pub fn verdict_phrase(status: Status) -> &'static str {
    match status {
        Status::Supports => "Confirms claim",
        Status::Debunks => "Contradicts claim",
        Status::Neutral => "No clear stance",
    }
}

/// Attributes a snippet URL to a source domain: the host when one is
/// present, otherwise the first non-empty path segment, otherwise
/// "unknown".
pub fn source_domain(raw_url: &str) -> String {
    if let Ok(parsed) = Url::parse(raw_url) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
        let segment = parsed
            .path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("");
        if !segment.is_empty() {
            return segment.to_string();
        }
        return UNKNOWN_DOMAIN.to_string();
    }
    // Schemeless strings don't parse as absolute URLs; treat everything
    // before the first slash as the host-like segment.
    let segment = raw_url.trim().split('/').next().unwrap_or("");
    if segment.is_empty() {
        UNKNOWN_DOMAIN.to_string()
    } else {
        segment.to_string()
    }
}

/// Quote shown for a source: snippet text unchanged at 200 chars or
/// fewer, otherwise the first 200 chars plus an ellipsis marker.
pub fn quote_snippet(text: &str) -> String {
    match text.char_indices().nth(QUOTE_LIMIT_CHARS) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], QUOTE_ELLIPSIS),
    }
}
