//! Rotating index for the testimonial carousel

/// Rotation interval of the testimonial carousel (3 seconds)
pub const ROTATION_INTERVAL_MS: u32 = 3_000;

/// Wrapping index over `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Move to the next slide, wrapping back to the first one.
    /// A carousel without slides never moves.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
