//! Exclusive open/closed state of the FAQ accordion

/// At most one item open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `index`, or close it when it is already the open item
    pub fn toggle(&mut self, index: usize) {
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Icon shown next to the question
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) { "−" } else { "+" }
    }
}
