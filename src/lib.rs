#![feature(portable_simd)]

pub mod bench;
pub mod dataset;
pub mod errors;
pub mod fs;
pub mod numerics;
pub mod statistics;
