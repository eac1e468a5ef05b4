/// Tracks the single hovered card in a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverIndex(Option<usize>);

impl HoverIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    pub fn enter(&mut self, index: usize) {
        self.0 = Some(index);
    }

    /// Leave `index`. A stale leave for a card that is no longer hovered is
    /// ignored.
    pub fn leave(&mut self, index: usize) {
        if self.0 == Some(index) {
            self.0 = None;
        }
    }

    #[must_use]
    pub const fn current(self) -> Option<usize> {
        self.0
    }

    #[must_use]
    pub fn is_hovered(self, index: usize) -> bool {
        self.0 == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_replaces_previous() {
        let mut hover = HoverIndex::new();
        hover.enter(1);
        hover.enter(3);
        assert_eq!(hover.current(), Some(3));
        assert!(!hover.is_hovered(1));
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut hover = HoverIndex::new();
        hover.enter(1);
        hover.enter(2);
        hover.leave(1);
        assert_eq!(hover.current(), Some(2));
        hover.leave(2);
        assert_eq!(hover.current(), None);
    }
}
