#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Section opened when an accordion first mounts.
pub const DEFAULT_OPEN_INDEX: usize = 1;

/// Which accordion section is expanded, if any.
///
/// At most one section is ever open: opening one implicitly closes the
/// previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expansion {
    open: Option<usize>,
}

impl Default for Expansion {
    fn default() -> Self {
        Self { open: Some(DEFAULT_OPEN_INDEX) }
    }
}

impl Expansion {
    /// Expansion with nothing open.
    pub fn collapsed() -> Self {
        Self { open: None }
    }

    /// Index of the open section.
    pub fn open_index(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    /// Handle a click on the header of section `idx`.
    pub fn toggle(&mut self, idx: usize) {
        *self = if self.is_open(idx) { Self::collapsed() } else { Self { open: Some(idx) } };
    }
}
