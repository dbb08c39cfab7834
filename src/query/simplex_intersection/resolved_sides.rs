/// A set of sub-intersection slots already handled by a degenerate hit.
///
/// When a pathological point lies on a vertex or an edge shared by several slots, every slot
/// touching it would report the same point. Those slots are marked here and skipped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolvedSides(u16);

impl ResolvedSides {
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn contains(self, slot: usize) -> bool {
        self.0 & (1 << slot) != 0
    }

    #[inline]
    pub fn insert(&mut self, slot: usize) {
        self.0 |= 1 << slot;
    }

    pub fn insert_all(&mut self, slots: impl IntoIterator<Item = usize>) {
        for slot in slots {
            self.insert(slot);
        }
    }
}
