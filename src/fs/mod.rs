//! File system I/O for loading vector sets.
//!
//! Vectors are read from NumPy `.npy` files, one vector per row of a 2-d `f32` array.

mod vector_load;

pub use vector_load::*;
