/// Position of a menu within its pages.
///
/// The index is 0-based and always smaller than `total` unless `total` is 0,
/// in which case every operation is a no-op and the index stays 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageIndex {
    index: usize,
    total: usize,
}

/// How a jump target related to the available pages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpTarget {
    Exact,
    /// The target was below 1 and got clamped to the first page.
    ClampedStart,
    /// The target exceeded the last page and got clamped to it.
    ClampedEnd,
}

impl PageIndex {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// 1-based number of the current page
    pub fn curr_page(&self) -> usize {
        self.index + 1
    }

    /// 1-based number of the last page
    pub fn last_page(&self) -> usize {
        self.total.max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.index = self.index.min(self.last_index());
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.last_index();
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }

        self.index = if self.index == self.last_index() {
            0
        } else {
            self.index + 1
        };
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }

        self.index = if self.index == 0 {
            self.last_index()
        } else {
            self.index - 1
        };
    }

    /// Move to the 1-based page `target`, clamping it into the available pages.
    pub fn jump_to(&mut self, target: i64) -> JumpTarget {
        if self.is_empty() {
            return JumpTarget::Exact;
        }

        let last_page = self.total as i64;

        let (page, kind) = if target < 1 {
            (1, JumpTarget::ClampedStart)
        } else if target > last_page {
            (last_page, JumpTarget::ClampedEnd)
        } else {
            (target, JumpTarget::Exact)
        };

        self.index = (page - 1) as usize;

        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_stays_in_bounds() {
        for total in 1..=6 {
            let mut pages = PageIndex::new(total);

            for step in 0..40 {
                if step % 3 == 0 {
                    pages.previous();
                } else {
                    pages.next();
                }

                assert!(pages.index() < total, "total={total} index={}", pages.index());
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut pages = PageIndex::new(3);
        pages.previous();

        assert_eq!(pages.index(), 2);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut pages = PageIndex::new(3);
        pages.last();
        pages.next();

        assert_eq!(pages.index(), 0);
    }

    #[test]
    fn test_jump_to() {
        let mut pages = PageIndex::new(5);

        for target in 1..=5 {
            assert_eq!(pages.jump_to(target), JumpTarget::Exact);
            assert_eq!(pages.index(), target as usize - 1);
        }

        assert_eq!(pages.jump_to(10), JumpTarget::ClampedEnd);
        assert_eq!(pages.index(), 4);

        assert_eq!(pages.jump_to(0), JumpTarget::ClampedStart);
        assert_eq!(pages.index(), 0);

        pages.jump_to(3);
        assert_eq!(pages.jump_to(-7), JumpTarget::ClampedStart);
        assert_eq!(pages.index(), 0);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut pages = PageIndex::new(0);

        pages.next();
        pages.previous();
        pages.last();
        assert_eq!(pages.jump_to(4), JumpTarget::Exact);

        assert_eq!(pages.index(), 0);
        assert_eq!(pages.last_page(), 1);
    }

    #[test]
    fn test_set_total_reclamps() {
        let mut pages = PageIndex::new(8);
        pages.last();
        pages.set_total(3);

        assert_eq!(pages.index(), 2);

        pages.set_total(0);
        assert_eq!(pages.index(), 0);
    }
}
