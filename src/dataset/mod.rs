//! Vector pairs to run the kernel on, either synthetic or loaded from disk.

mod pairs;

pub use pairs::*;
