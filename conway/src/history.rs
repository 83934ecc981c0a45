// history.rs - Detects when a simulation starts repeating itself

const HISTORY_LEN: usize = 10;

/// Remembers the fingerprints of the last ten generations.
///
/// Seeing a fingerprint again means the grid has settled into a still life,
/// died out, or entered an oscillator with a period of at most ten.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    ring: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `fingerprint` was already seen, otherwise records it.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.ring[..filled].contains(&fingerprint) {
            return true;
        }
        self.ring[self.count % HISTORY_LEN] = fingerprint;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
