//! Error types shared by the loaders and the benchmark driver.

use std::fmt;

use crate::numerics::DistanceError;

pub type Result<T> = std::result::Result<T, HamError>;

#[derive(Debug)]
pub enum HamError {
    Io(std::io::Error),
    /// The file is readable but not a usable `.npy` payload.
    Npy(String),
    /// The array does not have the expected rank.
    Shape(Vec<u64>),
    /// No kernel exists for this register width.
    LaneWidth(usize),
    Distance(DistanceError),
    InvalidParameter(String),
    WorkerPanic,
    /// The kernel disagreed with the scalar reference.
    Checksum { expected: f64, got: f64 },
}

impl fmt::Display for HamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Npy(msg) => write!(f, "invalid npy file: {msg}"),
            Self::Shape(shape) => write!(f, "expected a 2-d array, got shape {shape:?}"),
            Self::LaneWidth(lanes) => {
                write!(f, "unsupported lane width {lanes}, expected one of 4, 8, 16")
            }
            Self::Distance(e) => write!(f, "{e}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::WorkerPanic => write!(f, "a benchmark worker panicked"),
            Self::Checksum { expected, got } => {
                write!(f, "checksum mismatch: expected {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for HamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Distance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HamError {
    fn from(e: std::io::Error) -> Self {
        HamError::Io(e)
    }
}

impl From<DistanceError> for HamError {
    fn from(e: DistanceError) -> Self {
        HamError::Distance(e)
    }
}
