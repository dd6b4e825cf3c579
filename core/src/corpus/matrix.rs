use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::Path;

/// Row-aligned float32 embedding matrix. Row `i` holds the vector for
/// metadata record `i`; that positional alignment is what the whole
/// retrieval pipeline depends on.
#[derive(Debug, Clone)]
pub struct EmbeddingMatrix {
    data: Vec<f32>,
    dimension: usize,
}

impl EmbeddingMatrix {
    /// Loads a raw little-endian float32 matrix file. The byte length
    /// must divide evenly into `dimension`-sized rows.
    pub fn load(path: impl AsRef<Path>, dimension: usize) -> CoreResult<Self> {
        if dimension == 0 {
            return Err(CoreError::InvalidInput(
                "embedding dimension must be at least 1".to_string(),
            ));
        }
        let bytes = fs::read(path.as_ref())?;
        if bytes.len() % 4 != 0 {
            return Err(CoreError::Alignment(format!(
                "matrix file holds {} bytes, not a whole number of float32 values",
                bytes.len()
            )));
        }
        let data: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        if data.len() % dimension != 0 {
            return Err(CoreError::Alignment(format!(
                "matrix file holds {} values, not a whole number of {}-dimensional rows",
                data.len(),
                dimension
            )));
        }
        Ok(Self { data, dimension })
    }

    /// Builds a matrix from in-memory rows. Every row must match the
    /// given dimension.
    pub fn from_vectors(rows: Vec<Vec<f32>>, dimension: usize) -> CoreResult<Self> {
        if dimension == 0 {
            return Err(CoreError::InvalidInput(
                "embedding dimension must be at least 1".to_string(),
            ));
        }
        let mut data = Vec::with_capacity(rows.len() * dimension);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(CoreError::Alignment(format!(
                    "row {} holds {} values, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, dimension })
    }

    pub fn rows(&self) -> usize {
        self.data.len() / self.dimension
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn row(&self, i: usize) -> Option<&[f32]> {
        let start = i.checked_mul(self.dimension)?;
        self.data.get(start..start + self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vectors_rejects_ragged_rows() {
        let err = EmbeddingMatrix::from_vectors(vec![vec![1.0, 2.0], vec![3.0]], 2).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn row_access_is_bounded() {
        let m = EmbeddingMatrix::from_vectors(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 2).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.row(1), Some(&[3.0f32, 4.0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn load_rejects_partial_float() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.f32");
        std::fs::write(&path, [0u8; 10]).unwrap();
        let err = EmbeddingMatrix::load(&path, 2).unwrap_err();
        assert!(err.to_string().contains("float32"));
    }

    #[test]
    fn load_rejects_partial_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.f32");
        // 3 floats cannot form whole 2-dimensional rows.
        std::fs::write(&path, [0u8; 12]).unwrap();
        let err = EmbeddingMatrix::load(&path, 2).unwrap_err();
        assert!(err.to_string().contains("2-dimensional"));
    }
}
