//! Scripted draw source for tests.

use std::collections::VecDeque;

use crate::lcg::Draw;

/// Replays fixed unit values, scaled by the requested bound.
pub(crate) struct Scripted {
    values: VecDeque<f64>,
}

impl Scripted {
    pub(crate) fn new<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl Draw for Scripted {
    fn draw(&mut self, bound: f64) -> f64 {
        self.values.pop_front().expect("scripted values exhausted") * bound
    }
}
