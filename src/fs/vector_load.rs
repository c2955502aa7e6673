use std::path::Path;

use tracing::debug;

use crate::errors::{HamError, Result};

pub trait VectorSet: Sized {
    fn load_from_npy(path: &Path) -> Result<Self>;
}

impl VectorSet for Vec<Vec<f32>> {
    /// Loads a 2-d `f32` array, one vector per row.
    fn load_from_npy(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let npy = npyz::NpyFile::new(&bytes[..])?;

        let shape = npy.shape().to_vec();
        if shape.len() != 2 {
            return Err(HamError::Shape(shape));
        }
        let (rows, dim) = (shape[0] as usize, shape[1] as usize);
        debug!(?path, rows, dim, "loading vectors");

        let mut iter = npy
            .data::<f32>()
            .map_err(|e| HamError::Npy(e.to_string()))?;

        let mut result = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Vec::with_capacity(dim);
            for _ in 0..dim {
                let value = iter
                    .next()
                    .ok_or_else(|| HamError::Npy("payload shorter than shape".to_string()))??;
                row.push(value);
            }
            result.push(row);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Version 1.0 `.npy` encoding of a little-endian f32 array.
    fn npy_bytes(shape: &[usize], data: &[f32]) -> Vec<u8> {
        let dims = match shape {
            [d] => format!("({d},)"),
            _ => format!(
                "({})",
                shape
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };
        let mut header = format!("{{'descr': '<f4', 'fortran_order': False, 'shape': {dims}, }}");
        while (10 + header.len() + 1) % 64 != 0 {
            header.push(' ');
        }
        header.push('\n');

        let mut bytes = b"\x93NUMPY\x01\x00".to_vec();
        bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
        bytes.extend_from_slice(header.as_bytes());
        for v in data {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hamsimd-{}-{name}.npy", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_load_rows() {
        let data: Vec<f32> = (0..6).map(|i| i as f32).collect();
        let path = write_temp("rows", &npy_bytes(&[2, 3], &data));

        let vectors = Vec::<Vec<f32>>::load_from_npy(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(vectors, vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_rejects_1d() {
        let path = write_temp("flat", &npy_bytes(&[4], &[1.0, 2.0, 3.0, 4.0]));

        let err = Vec::<Vec<f32>>::load_from_npy(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, HamError::Shape(ref s) if s == &vec![4]));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("hamsimd-does-not-exist.npy");
        let err = Vec::<Vec<f32>>::load_from_npy(&path).unwrap_err();
        assert!(matches!(err, HamError::Io(_)));
    }
}
