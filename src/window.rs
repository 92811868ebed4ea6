/// The set of line indices to emit: the clamped selection index, plus
/// every earlier index in head mode and every later index in tail mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    selection: usize,
    head: bool,
    tail: bool,
}

impl Window {
    /// Apply the signed offset to the trigger index and clamp the result
    /// into `[0, len - 1]`.
    ///
    /// `len` must be non-zero; a trigger index can only exist for a
    /// non-empty line sequence.
    pub fn select(trigger: usize, offset: i64, head: bool, tail: bool, len: usize) -> Self {
        let selection = (trigger as i64)
            .saturating_add(offset)
            .clamp(0, len as i64 - 1) as usize;
        Self {
            selection,
            head,
            tail,
        }
    }

    /// The clamped selection index.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Whether `index` belongs to the output window.
    pub fn contains(&self, index: usize) -> bool {
        index == self.selection
            || (self.head && index < self.selection)
            || (self.tail && index > self.selection)
    }
}
