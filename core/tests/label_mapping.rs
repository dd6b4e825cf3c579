use factcheck_core::capability::interface::RawStanceLabel;
use factcheck_core::checker::labels::{
    domain_label, quote_snippet, source_domain, status_for, verdict_phrase, DomainLabel, Status,
    QUOTE_LIMIT_CHARS,
};

#[test]
fn known_labels_map_to_their_domain_labels() {
    assert_eq!(
        domain_label(&RawStanceLabel::Entailment),
        DomainLabel::Support
    );
    assert_eq!(
        domain_label(&RawStanceLabel::Contradiction),
        DomainLabel::Refute
    );
    assert_eq!(domain_label(&RawStanceLabel::Neutral), DomainLabel::Neutral);
}

#[test]
fn unrecognized_labels_default_to_neutral() {
    for raw in ["SARCASM", "entailment", "", "CONTRADICTION "] {
        assert_eq!(
            domain_label(&RawStanceLabel::from_model_label(raw)),
            DomainLabel::Neutral,
            "label {:?} should resolve to neutral",
            raw
        );
    }
}

#[test]
fn model_label_parsing_keeps_unknown_values() {
    assert_eq!(
        RawStanceLabel::from_model_label("ENTAILMENT"),
        RawStanceLabel::Entailment
    );
    assert_eq!(
        RawStanceLabel::from_model_label("MOSTLY_TRUE"),
        RawStanceLabel::Other("MOSTLY_TRUE".to_string())
    );
}

#[test]
fn status_and_verdict_wording_table() {
    let cases = [
        (DomainLabel::Support, Status::Supports, "Confirms claim"),
        (DomainLabel::Refute, Status::Debunks, "Contradicts claim"),
        (DomainLabel::Neutral, Status::Neutral, "No clear stance"),
    ];
    for (label, status, phrase) in cases {
        assert_eq!(status_for(label), status);
        assert_eq!(verdict_phrase(status), phrase);
    }
    assert_eq!(Status::Supports.as_str(), "supports");
    assert_eq!(Status::Debunks.as_str(), "debunks");
    assert_eq!(Status::Neutral.as_str(), "neutral");
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Status::Debunks).unwrap(),
        "\"debunks\""
    );
    assert_eq!(
        serde_json::from_str::<Status>("\"supports\"").unwrap(),
        Status::Supports
    );
}

#[test]
fn quote_keeps_short_text_unchanged() {
    let text = "a".repeat(QUOTE_LIMIT_CHARS);
    assert_eq!(quote_snippet(&text), text);
    assert_eq!(quote_snippet(""), "");
}

#[test]
fn quote_truncates_long_text_with_ellipsis() {
    let text = "b".repeat(QUOTE_LIMIT_CHARS + 1);
    let expected = format!("{}...", "b".repeat(QUOTE_LIMIT_CHARS));
    assert_eq!(quote_snippet(&text), expected);
}

#[test]
fn quote_counts_chars_not_bytes() {
    let text = "é".repeat(QUOTE_LIMIT_CHARS + 50);
    let quote = quote_snippet(&text);
    assert_eq!(quote.chars().count(), QUOTE_LIMIT_CHARS + 3);
    assert!(quote.ends_with("..."));
}

#[test]
fn domain_comes_from_the_url_host() {
    assert_eq!(
        source_domain("https://en.wikipedia.org/wiki/Paris"),
        "en.wikipedia.org"
    );
    assert_eq!(
        source_domain("http://example.org:8080/page"),
        "example.org"
    );
}

#[test]
fn schemeless_url_falls_back_to_first_segment() {
    assert_eq!(
        source_domain("en.wikipedia.org/wiki/Paris"),
        "en.wikipedia.org"
    );
}

#[test]
fn hostless_strings_resolve_to_unknown() {
    assert_eq!(source_domain(""), "unknown");
    assert_eq!(source_domain("/wiki/Paris"), "unknown");
    assert_eq!(source_domain("   "), "unknown");
}
