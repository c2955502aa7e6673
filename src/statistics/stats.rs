use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    kernel_calls: usize,
    elements_compared: usize,
    mismatches: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            kernel_calls: 0,
            elements_compared: 0,
            mismatches: 0,
        }
    }

    /// Record into the statistics object that the kernel ran over `len` elements and
    /// found `distance` of them differing
    pub fn bump_call(&mut self, len: usize, distance: f32) {
        self.kernel_calls += 1;
        self.elements_compared += len;
        self.mismatches += distance as usize;
    }

    pub fn get_kernel_calls(&self) -> usize {
        self.kernel_calls
    }

    pub fn get_elements_compared(&self) -> usize {
        self.elements_compared
    }

    pub fn get_mismatches(&self) -> usize {
        self.mismatches
    }

    /// Share of compared elements that differed, 0 when nothing was compared
    pub fn mismatch_ratio(&self) -> f64 {
        if self.elements_compared == 0 {
            0.0
        } else {
            self.mismatches as f64 / self.elements_compared as f64
        }
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            kernel_calls: self.kernel_calls + other.kernel_calls,
            elements_compared: self.elements_compared + other.elements_compared,
            mismatches: self.mismatches + other.mismatches,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
