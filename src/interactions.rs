//! Small pieces of UI interaction state shared by the view components.

/// Scroll offset past which the header swaps to its opaque background.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Strictly greater-than: exactly at the threshold still counts as top.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}

/// Which item in a list currently has its dropdown open, if any.
///
/// Held at the list level so at most one disclosure is open at a time:
/// toggling the open index closes it, toggling another index replaces it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure(Option<usize>);

impl Disclosure {
    pub fn closed() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn toggle(self, index: usize) -> Self {
        if self.0 == Some(index) {
            Self(None)
        } else {
            Self(Some(index))
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn open_index(self) -> Option<usize> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_flag_crosses_at_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(49.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(51.0));
        assert!(header_scrolled(500.0));
    }

    #[test]
    fn test_toggle_same_index_twice_closes() {
        let d = Disclosure::closed().toggle(2);
        assert!(d.is_open(2));
        let d = d.toggle(2);
        assert_eq!(d, Disclosure::closed());
        assert_eq!(d.open_index(), None);
    }

    #[test]
    fn test_toggle_other_index_replaces() {
        let d = Disclosure::closed().toggle(0).toggle(3);
        assert!(!d.is_open(0));
        assert!(d.is_open(3));
        // at most one open at any time
        assert_eq!(d.open_index(), Some(3));
    }
}
