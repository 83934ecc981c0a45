// buffer.rs - Live + staging buffer pair

/// Two equally sized buffers: the live generation and a staging area that
/// the next generation is written into before the two are swapped.
///
/// Keeping the staging buffer around avoids an allocation per generation.
#[derive(Debug, Clone, Default)]
pub struct DoubleBuffer<T> {
    live: Vec<T>,
    staging: Vec<T>,
}

impl<T: Copy + Default> DoubleBuffer<T> {
    pub fn new(len: usize, value: T) -> Self {
        Self {
            live: vec![value; len],
            staging: Vec::with_capacity(len),
        }
    }

    #[inline]
    pub fn live(&self) -> &[T] {
        &self.live
    }

    #[inline]
    pub fn live_mut(&mut self) -> &mut [T] {
        &mut self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Makes the staging buffer as long as the live one.
    pub fn prepare_staging(&mut self) {
        self.staging.resize(self.live.len(), T::default());
    }

    /// Borrows the live buffer for reading and the staging buffer for writing.
    pub fn split(&mut self) -> (&[T], &mut [T]) {
        (&self.live, &mut self.staging)
    }

    /// Staging becomes live. The old live buffer is kept as the next staging area.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.live, &mut self.staging);
    }

    /// Drops everything past `len`, keeping the leading elements as they are.
    pub fn truncate(&mut self, len: usize) {
        self.live.truncate(len);
        self.staging.truncate(len);
    }

    /// Replaces the live buffer with `len` copies of `value`.
    pub fn reset(&mut self, len: usize, value: T) {
        self.live = vec![value; len];
        self.staging.clear();
    }

    pub fn fill(&mut self, value: T) {
        self.live.fill(value);
    }
}
