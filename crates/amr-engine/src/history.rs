//! Fixed-window time series for the population and resistance charts.

use std::collections::VecDeque;

use amr_core::Tick;

/// Alive-agent count at the end of a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationSample {
    pub tick:  Tick,
    pub alive: usize,
}

/// Mean resistance over alive agents at the end of a tick.
///
/// `mean` is `None` when nothing was alive: an extinct colony has no
/// resistance level, and charting it as 0 would fake a trend.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceSample {
    pub tick: Tick,
    pub mean: Option<f64>,
}

/// FIFO buffer holding at most `window` entries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollingHistory<T> {
    window:  usize,
    entries: VecDeque<T>,
}

impl<T> RollingHistory<T> {
    pub fn new(window: usize) -> Self {
        Self { window, entries: VecDeque::with_capacity(window + 1) }
    }

    /// Append `value`, evicting and returning the oldest entry if the window
    /// overflowed.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.entries.push_back(value);
        if self.entries.len() > self.window {
            self.entries.pop_front()
        } else {
            None
        }
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.window
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.entries.front()
    }
}

impl<T: Clone> RollingHistory<T> {
    /// Copy the entries out, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}
