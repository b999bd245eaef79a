//! Timer-driven plan execution
//!
//! [`TransitionSequencer::run`] fires `animation_begin` synchronously, then
//! spawns one tokio task that sleeps from event to event of the plan's
//! [`Schedule`]. All events are measured from the moment `run` was called, so
//! callback jitter never shifts later steps.
//!
//! Plans are not cancelled when their handle is dropped. Owners that must not
//! see callbacks after teardown call [`TransitionHandle::cancel`] or opt into
//! [`TransitionHandle::cancel_on_drop`].

use crate::plan::{PlanHooks, TransitionPlan};
use crate::schedule::{PlanEvent, Schedule, DEFAULT_LEAD_MS};
use crate::step::TransitionStep;
use crate::target::{apply_step, Animatable, TargetRegistry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Notify};
use tokio::time::{Duration, Instant};

/// Lifecycle of a running plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanState {
    /// Started, no step has begun yet
    Idle,
    /// Step `n` has begun
    Running(usize),
    Complete,
    Cancelled,
}

impl PlanState {
    pub fn is_finished(&self) -> bool {
        matches!(self, PlanState::Complete | PlanState::Cancelled)
    }
}

/// How a plan finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Every step and lifecycle callback fired
    Completed,
    /// Stopped before its last event
    Cancelled,
}

#[derive(Debug, Default)]
struct CancelToken {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    async fn cancelled(&self) {
        loop {
            // Register before checking so a concurrent cancel is not missed
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

/// Handle to a started plan
#[derive(Debug)]
pub struct TransitionHandle {
    token: Arc<CancelToken>,
    state: watch::Receiver<PlanState>,
    cancel_on_drop: bool,
}

impl TransitionHandle {
    /// Stop the plan; no further callback or target call fires
    pub fn cancel(&self) {
        if !self.state().is_finished() {
            self.token.cancel();
        }
    }

    /// Cancel when this handle is dropped
    pub fn cancel_on_drop(mut self) -> Self {
        self.cancel_on_drop = true;
        self
    }

    pub fn state(&self) -> PlanState {
        *self.state.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Wait until every scheduled callback has fired or the plan is cancelled
    pub async fn completion(&self) -> PlanOutcome {
        let mut state = self.state.clone();
        // A closed channel means the driver died without finishing
        let completed = matches!(
            state.wait_for(PlanState::is_finished).await.as_deref(),
            Ok(PlanState::Complete)
        );
        if completed {
            PlanOutcome::Completed
        } else {
            PlanOutcome::Cancelled
        }
    }
}

impl Drop for TransitionHandle {
    fn drop(&mut self) {
        if self.cancel_on_drop {
            self.cancel();
        }
    }
}

/// Runs transition plans on the current tokio runtime
#[derive(Clone, Copy, Debug)]
pub struct TransitionSequencer {
    lead_ms: u64,
}

impl Default for TransitionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSequencer {
    pub fn new() -> Self {
        Self {
            lead_ms: DEFAULT_LEAD_MS,
        }
    }

    /// Delay between a step's start and its begin callback
    pub fn with_lead_ms(mut self, lead_ms: u64) -> Self {
        self.lead_ms = lead_ms;
        self
    }

    pub fn lead_ms(&self) -> u64 {
        self.lead_ms
    }

    /// Start `plan` against its registered target.
    ///
    /// Returns `None` without firing any callback when the target name is
    /// empty or not registered. Must be called within a tokio runtime.
    pub fn run(&self, registry: &TargetRegistry, plan: TransitionPlan) -> Option<TransitionHandle> {
        let TransitionPlan {
            target: name,
            steps,
            mut hooks,
        } = plan;
        let Some(target) = registry.get(&name) else {
            tracing::trace!(plan = %name, "no registered target, skipping plan");
            return None;
        };

        let start = Instant::now();
        let schedule = Schedule::compute(&steps, self.lead_ms);
        tracing::debug!(
            plan = %name,
            steps = steps.len(),
            total_ms = schedule.total_ms(),
            "transition plan started"
        );

        hooks.animation_begin();

        let token = Arc::new(CancelToken::default());
        let (state_tx, state_rx) = watch::channel(PlanState::Idle);
        let driver = Driver {
            name,
            target,
            steps,
            hooks,
            schedule,
            start,
            token: Arc::clone(&token),
            state: state_tx,
        };
        tokio::spawn(driver.run());

        Some(TransitionHandle {
            token,
            state: state_rx,
            cancel_on_drop: false,
        })
    }
}

/// Start `plan` with the default lead
pub fn run_transition_plan(
    registry: &TargetRegistry,
    plan: TransitionPlan,
) -> Option<TransitionHandle> {
    TransitionSequencer::new().run(registry, plan)
}

struct Driver {
    name: String,
    target: Arc<dyn Animatable>,
    steps: Vec<TransitionStep>,
    hooks: PlanHooks,
    schedule: Schedule,
    start: Instant,
    token: Arc<CancelToken>,
    state: watch::Sender<PlanState>,
}

impl Driver {
    async fn run(mut self) {
        for scheduled in self.schedule.events().to_vec() {
            let deadline = self.start + Duration::from_millis(scheduled.at_ms);
            tokio::select! {
                biased;
                _ = self.token.cancelled() => {
                    self.state.send_replace(PlanState::Cancelled);
                    tracing::debug!(
                        plan = %self.name,
                        at_ms = scheduled.at_ms,
                        "transition plan cancelled"
                    );
                    return;
                }
                _ = tokio::time::sleep_until(deadline) => {}
            }

            tracing::trace!(
                plan = %self.name,
                at_ms = scheduled.at_ms,
                event = ?scheduled.event,
                "plan event"
            );
            match scheduled.event {
                PlanEvent::TransitionBegin(index) => {
                    self.state.send_replace(PlanState::Running(index));
                    self.hooks.transition_begin(index);
                }
                PlanEvent::Apply(index) => {
                    if let Some(step) = self.steps.get(index) {
                        apply_step(self.target.as_ref(), step);
                    }
                }
                PlanEvent::TransitionEnd(index) => self.hooks.transition_end(index),
                PlanEvent::AnimationEnd => self.hooks.animation_end(),
            }
        }

        self.state.send_replace(PlanState::Complete);
        tracing::debug!(plan = %self.name, "transition plan complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::RecordingTarget;

    #[tokio::test(start_paused = true)]
    async fn handle_tracks_state() {
        let mut registry = TargetRegistry::new();
        registry.register("x", Arc::new(RecordingTarget::new()));

        let handle = run_transition_plan(
            &registry,
            TransitionPlan::new("x").step(TransitionStep::wait(100)),
        )
        .unwrap();
        assert_eq!(handle.state(), PlanState::Idle);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.state(), PlanState::Running(0));

        assert_eq!(handle.completion().await, PlanOutcome::Completed);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_target_name_is_skipped() {
        let registry = TargetRegistry::new();
        assert!(run_transition_plan(&registry, TransitionPlan::new("")).is_none());
    }
}
