use factcheck_core::capability::interface::{
    EmbeddingEncoder, RawStanceLabel, StanceClassifier, StanceJudgement,
};
use factcheck_core::checker::workflow::{FactChecker, DEFAULT_TOP_K};
use factcheck_core::error::CoreResult;
use std::path::Path;

/// Deterministic stand-in encoder so the pipeline runs end-to-end
/// against persisted corpus artifacts without model weights. Real
/// deployments substitute an adapter over the actual embedding model.
struct HashingEncoder {
    dimension: usize,
}

impl EmbeddingEncoder for HashingEncoder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(&self, texts: &[&str]) -> CoreResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| hash_embed(t, self.dimension))
            .collect())
    }
}

// FNV-1a per component, seeded by the component index.
fn hash_embed(text: &str, dimension: usize) -> Vec<f32> {
    let mut vector = vec![0f32; dimension];
    for (i, slot) in vector.iter_mut().enumerate() {
        let mut h: u64 = 0xcbf29ce484222325 ^ (i as u64).wrapping_mul(0x100000001b3);
        for b in text.bytes() {
            h ^= u64::from(b);
            h = h.wrapping_mul(0x100000001b3);
        }
        *slot = (h % 2000) as f32 / 1000.0 - 1.0;
    }
    vector
}

/// Stand-in classifier with no model behind it; every pair reads as
/// having no clear stance.
struct NeutralClassifier;

impl StanceClassifier for NeutralClassifier {
    fn classify(&self, _pair_input: &str) -> CoreResult<StanceJudgement> {
        Ok(StanceJudgement {
            label: RawStanceLabel::Neutral,
            confidence: 1.0,
        })
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!("usage: claim_runner <matrix.f32> <meta.json> <dimension> <claim> [top_k]");
        std::process::exit(2);
    }
    let dimension: usize = match args[3].parse() {
        Ok(d) if d > 0 => d,
        _ => {
            eprintln!("invalid dimension: {}", args[3]);
            std::process::exit(2);
        }
    };
    let top_k: usize = match args.get(5) {
        None => DEFAULT_TOP_K,
        Some(raw) => match raw.parse() {
            Ok(k) if k > 0 => k,
            _ => {
                eprintln!("invalid top_k: {}", raw);
                std::process::exit(2);
            }
        },
    };

    let checker = match FactChecker::open(
        Path::new(&args[1]),
        Path::new(&args[2]),
        HashingEncoder { dimension },
        NeutralClassifier,
    ) {
        Ok(checker) => checker,
        Err(e) => {
            eprintln!("startup error: {}", e);
            std::process::exit(1);
        }
    };

    match checker.fact_check(&args[4], top_k) {
        Ok(report) => println!("{}", serde_json::to_string_pretty(&report).unwrap()),
        Err(e) => {
            eprintln!("fact-check error: {}", e);
            std::process::exit(1);
        }
    }
}
