//! Bounded cursor over a game's precomputed position list.
//!
//! The cursor never touches board contents; it only selects which entry of
//! an externally supplied sequence is displayed. All navigation is clamped -
//! stepping past either end is a no-op, never a wraparound.

/// Cursor over an ordered, fixed sequence of items (typically one entry per
/// ply of a fetched game).
#[derive(Debug, Clone)]
pub struct MoveListCursor<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> MoveListCursor<T> {
    /// Cursor positioned at the first entry.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Cursor positioned at `start`, clamped into range. An out-of-range
    /// start falls back to 0, matching sequence replacement.
    pub fn with_start_index(items: Vec<T>, start: usize) -> Self {
        let mut cursor = Self::new(items);
        if start < cursor.items.len() {
            cursor.index = start;
        }
        cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current zero-based index; inactive (None) for an empty sequence.
    pub fn index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    /// The selected entry.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_at_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.items.is_empty() || self.index + 1 == self.items.len()
    }

    /// Jump to `index`, clamped into `[0, N-1]`. No-op on an empty
    /// sequence.
    pub fn go_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.index = index.min(self.items.len() - 1);
    }

    pub fn first(&mut self) {
        self.go_to(0);
    }

    pub fn last(&mut self) {
        if !self.items.is_empty() {
            self.go_to(self.items.len() - 1);
        }
    }

    pub fn next(&mut self) {
        if !self.is_at_last() {
            self.go_to(self.index + 1);
        }
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.go_to(self.index - 1);
        }
    }

    /// Direct entry of a one-based display number, as typed by the user.
    /// Anything non-numeric or outside `[1, N]` abandons the edit: the
    /// current index stays where it was and no error surfaces.
    pub fn go_to_display_number(&mut self, text: &str) -> bool {
        let Ok(number) = text.trim().parse::<usize>() else {
            return false;
        };
        if number == 0 || number > self.items.len() {
            return false;
        }
        self.go_to(number - 1);
        true
    }

    /// Replace the sequence wholesale. A supplied in-range start index is
    /// adopted; anything else resets to the first entry.
    pub fn replace(&mut self, items: Vec<T>, start: Option<usize>) {
        self.items = items;
        self.index = match start {
            Some(start) if start < self.items.len() => start,
            _ => 0,
        };
    }
}

impl<T> Default for MoveListCursor<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cursor(n: usize) -> MoveListCursor<usize> {
        MoveListCursor::new((0..n).collect())
    }

    #[test]
    fn starts_at_the_first_entry() {
        let c = cursor(5);
        assert_eq!(c.index(), Some(0));
        assert_eq!(c.current(), Some(&0));
    }

    #[test]
    fn empty_sequence_is_inactive() {
        let mut c = cursor(0);
        assert_eq!(c.index(), None);
        assert_eq!(c.current(), None);
        c.go_to(3);
        c.next();
        c.previous();
        c.last();
        assert_eq!(c.index(), None);
    }

    #[test]
    fn go_to_clamps_into_range() {
        let mut c = cursor(5);
        c.go_to(99);
        assert_eq!(c.index(), Some(4));
        c.go_to(2);
        assert_eq!(c.index(), Some(2));
    }

    #[test]
    fn next_at_the_end_does_not_wrap() {
        let mut c = cursor(5);
        c.last();
        assert_eq!(c.index(), Some(4));
        c.next();
        assert_eq!(c.index(), Some(4));
    }

    #[test]
    fn previous_at_the_start_does_not_wrap() {
        let mut c = cursor(5);
        c.previous();
        assert_eq!(c.index(), Some(0));
    }

    #[test]
    fn first_and_last_jump_to_the_boundaries() {
        let mut c = cursor(7);
        c.go_to(3);
        c.first();
        assert_eq!(c.index(), Some(0));
        c.last();
        assert_eq!(c.index(), Some(6));
    }

    #[test]
    fn display_number_entry_is_one_based() {
        let mut c = cursor(5);
        assert!(c.go_to_display_number("3"));
        assert_eq!(c.index(), Some(2));
        assert!(c.go_to_display_number(" 5 "));
        assert_eq!(c.index(), Some(4));
    }

    #[test]
    fn invalid_display_number_reverts_silently() {
        let mut c = cursor(5);
        c.go_to(2);
        for input in ["", "abc", "0", "6", "-1", "2.5"] {
            assert!(!c.go_to_display_number(input));
            assert_eq!(c.index(), Some(2), "input {input:?} must not move the cursor");
        }
    }

    #[test]
    fn replace_resets_or_adopts_the_start_index() {
        let mut c = cursor(5);
        c.go_to(4);

        c.replace((0..10).collect(), Some(7));
        assert_eq!(c.index(), Some(7));

        c.replace((0..3).collect(), Some(9));
        assert_eq!(c.index(), Some(0));

        c.replace((0..3).collect(), None);
        assert_eq!(c.index(), Some(0));

        c.replace(Vec::new(), Some(0));
        assert_eq!(c.index(), None);
    }

    #[test]
    fn with_start_index_clamps() {
        let c = MoveListCursor::with_start_index((0..4).collect::<Vec<_>>(), 2);
        assert_eq!(c.index(), Some(2));
        let c = MoveListCursor::with_start_index((0..4).collect::<Vec<_>>(), 9);
        assert_eq!(c.index(), Some(0));
    }

    proptest! {
        #[test]
        fn go_to_always_lands_on_the_clamped_index(n in 0usize..64, target in 0usize..128) {
            let mut c = cursor(n);
            c.go_to(target);
            if n == 0 {
                prop_assert_eq!(c.index(), None);
            } else {
                prop_assert_eq!(c.index(), Some(target.min(n - 1)));
            }
        }

        #[test]
        fn stepping_never_leaves_the_range(n in 1usize..32, steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut c = cursor(n);
            for forward in steps {
                if forward { c.next() } else { c.previous() }
                let index = c.index().unwrap();
                prop_assert!(index < n);
            }
        }
    }
}
