//! Animatable targets
//!
//! The host owns the live animatable handles; plans refer to them by name
//! through a [`TargetRegistry`].

use crate::easing::Easing;
use crate::step::{StateRecord, TransitionStep};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::{Duration, Instant};

/// Host animation primitives for one target
pub trait Animatable: Send + Sync {
    /// Animate from the current state to `to`
    fn transition_to(&self, to: &StateRecord, duration_ms: u64, easing: Easing, delay_ms: u64);

    /// Animate from `from` to `to`
    fn transition(&self, from: &StateRecord, to: &StateRecord, duration_ms: u64, easing: Easing);
}

/// Name to animatable handle lookup
#[derive(Clone, Default)]
pub struct TargetRegistry {
    targets: FxHashMap<String, Arc<dyn Animatable>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target` under `name`, returning the handle it replaced
    pub fn register(
        &mut self,
        name: impl Into<String>,
        target: Arc<dyn Animatable>,
    ) -> Option<Arc<dyn Animatable>> {
        self.targets.insert(name.into(), target)
    }

    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Animatable>> {
        self.targets.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Animatable>> {
        self.targets.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl std::fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.targets.keys()).finish()
    }
}

/// A primitive call received by a [`RecordingTarget`]
#[derive(Clone, Debug, PartialEq)]
pub enum TargetCall {
    TransitionTo {
        to: StateRecord,
        duration_ms: u64,
        easing: Easing,
        delay_ms: u64,
    },
    Transition {
        from: StateRecord,
        to: StateRecord,
        duration_ms: u64,
        easing: Easing,
    },
}

/// Target that records every call with the time it arrived
#[derive(Debug)]
pub struct RecordingTarget {
    created: Instant,
    calls: Mutex<Vec<(Duration, TargetCall)>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls so far, timestamped relative to creation
    pub fn calls(&self) -> Vec<(Duration, TargetCall)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: TargetCall) {
        let at = self.created.elapsed();
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((at, call));
    }
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Animatable for RecordingTarget {
    fn transition_to(&self, to: &StateRecord, duration_ms: u64, easing: Easing, delay_ms: u64) {
        self.record(TargetCall::TransitionTo {
            to: to.clone(),
            duration_ms,
            easing,
            delay_ms,
        });
    }

    fn transition(&self, from: &StateRecord, to: &StateRecord, duration_ms: u64, easing: Easing) {
        self.record(TargetCall::Transition {
            from: from.clone(),
            to: to.clone(),
            duration_ms,
            easing,
        });
    }
}

/// Issue a step's visual call; timing-only steps do nothing
pub(crate) fn apply_step(target: &dyn Animatable, step: &TransitionStep) {
    match (&step.from, &step.to) {
        (Some(from), Some(to)) => target.transition(from, to, step.duration_ms, step.easing),
        (None, Some(to)) => target.transition_to(to, step.duration_ms, step.easing, step.delay_ms),
        _ => {}
    }
}
