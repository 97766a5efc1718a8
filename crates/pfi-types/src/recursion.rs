//! Visited-set guard for walks over type graphs.
//!
//! `RecursionGuard` combines two safety mechanisms:
//! 1. **Revisit detection** via a visited set (`FxHashSet<K>`). Keys stay
//!    recorded after [`leave`](RecursionGuard::leave), so each key is entered
//!    at most once per guard. Diamond-shaped and self-referential
//!    hierarchies are therefore walked in linear time.
//! 2. **Depth limiting** to prevent stack overflow on pathological chains.
//!
//! Once a limit trips, [`is_exceeded`](RecursionGuard::is_exceeded) stays set
//! so callers can report that the answer is partial.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Named limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Nominal inheritance walk (`extends` / `implements` chains).
    ///
    /// depth = 100
    BaseTypeWalk,

    /// Explicit limits.
    Custom { max_depth: u32 },
}

impl RecursionProfile {
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::BaseTypeWalk => 100,
            Self::Custom { max_depth } => max_depth,
        }
    }
}

/// Outcome of [`RecursionGuard::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key was already entered through this guard.
    Visited,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }
}

#[derive(Debug)]
pub struct RecursionGuard<K: Hash + Eq> {
    visited: FxHashSet<K>,
    depth: u32,
    max_depth: u32,
    exceeded: bool,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    pub fn with_profile(profile: RecursionProfile) -> Self {
        RecursionGuard {
            visited: FxHashSet::default(),
            depth: 0,
            max_depth: profile.max_depth(),
            exceeded: false,
        }
    }

    /// Try to enter the computation for `key`.
    ///
    /// Every `Entered` result must be paired with one [`leave`](Self::leave).
    pub fn enter(&mut self, key: K) -> RecursionResult {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        if !self.visited.insert(key) {
            return RecursionResult::Visited;
        }
        self.depth += 1;
        RecursionResult::Entered
    }

    pub fn leave(&mut self) {
        debug_assert!(
            self.depth > 0,
            "RecursionGuard::leave() called at depth 0. \
             This indicates a leave without a matching enter()."
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
