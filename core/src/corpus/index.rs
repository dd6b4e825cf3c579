use crate::capability::interface::{Neighbor, VectorIndex};
use crate::corpus::matrix::EmbeddingMatrix;
use crate::error::{CoreError, CoreResult};

/// Exact nearest-neighbor index over the embedding matrix, ranked by
/// squared Euclidean distance. Brute force over every row, so the top-k
/// result is the true k nearest, never an approximation.
#[derive(Debug, Clone)]
pub struct FlatL2Index {
    matrix: EmbeddingMatrix,
}

impl FlatL2Index {
    pub fn new(matrix: EmbeddingMatrix) -> Self {
        Self { matrix }
    }
}

impl VectorIndex for FlatL2Index {
    fn len(&self) -> usize {
        self.matrix.rows()
    }

    fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    fn search(&self, query: &[f32], k: usize) -> CoreResult<Vec<Neighbor>> {
        if k == 0 {
            return Err(CoreError::InvalidInput(
                "search requires k of at least 1".to_string(),
            ));
        }
        if query.len() != self.matrix.dimension() {
            return Err(CoreError::Capability(format!(
                "query has {} dimensions, index holds {}-dimensional vectors",
                query.len(),
                self.matrix.dimension()
            )));
        }

        let mut hits: Vec<Neighbor> = (0..self.matrix.rows())
            .map(|row_id| Neighbor {
                row_id,
                distance: squared_l2(query, self.matrix.row(row_id).unwrap_or(&[])),
            })
            .collect();
        // Ties break on row id so results stay deterministic.
        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.row_id.cmp(&b.row_id))
        });
        hits.truncate(k.min(self.matrix.rows()));
        Ok(hits)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
