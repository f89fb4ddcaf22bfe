use crate::Emphasis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection index {index} is out of range (count={count})")]
    OutOfRange { index: usize, count: usize },
}

/// The outcome of a successful [`Selection::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionChange {
    pub previous: usize,
    pub current: usize,
}

impl SelectionChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// The authoritative selected item.
///
/// Only explicit selection (a tap) mutates it. Scrolling recenters items visually but never
/// changes the selected index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.count > 0 && index == self.index
    }

    /// Selects `index`. On error the selection is left untouched.
    pub fn select(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        if index >= self.count {
            cwarn!(index, count = self.count, "Selection::select: out of range");
            return Err(SelectionError::OutOfRange {
                index,
                count: self.count,
            });
        }
        let previous = self.index;
        self.index = index;
        ctrace!(previous, current = index, "Selection::select");
        Ok(SelectionChange {
            previous,
            current: index,
        })
    }

    /// Updates the item count, pulling the selected index back into range when needed.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.index >= count {
            self.index = count.saturating_sub(1);
        }
    }

    pub fn emphasis(&self, index: usize) -> Emphasis {
        Emphasis::for_selected(self.is_selected(index))
    }
}
