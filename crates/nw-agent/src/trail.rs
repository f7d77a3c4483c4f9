//! Bounded newest-first history of interpolated positions.

use std::collections::VecDeque;
use std::ops::Index;

use nw_core::Vec3;

/// Number of positions kept per agent.
pub const TRAIL_LEN: usize = 40;

/// The last [`TRAIL_LEN`] positions of an agent, newest first.
///
/// Index 0 is the position written by the most recent update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec3>,
}

impl Trail {
    pub fn new() -> Self {
        Self { points: VecDeque::with_capacity(TRAIL_LEN + 1) }
    }

    /// Record `p` as the newest point and drop the oldest past the bound.
    pub fn push(&mut self, p: Vec3) {
        self.points.push_front(p);
        self.points.truncate(TRAIL_LEN);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn newest(&self) -> Option<Vec3> {
        self.points.front().copied()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Vec3> {
        self.points.get(i).copied()
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Vec3> {
        self.iter().collect()
    }
}

impl Index<usize> for Trail {
    type Output = Vec3;
    fn index(&self, i: usize) -> &Vec3 {
        &self.points[i]
    }
}
