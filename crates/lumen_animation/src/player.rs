//! Frame-driven plan playback
//!
//! For hosts that own an animation-frame loop: a [`PlanPlayer`] walks the same
//! [`Schedule`] as the async sequencer, but only advances when ticked.

use crate::plan::{PlanHooks, TransitionPlan};
use crate::schedule::{PlanEvent, Schedule};
use crate::sequencer::PlanState;
use crate::step::TransitionStep;
use crate::target::{apply_step, Animatable, TargetRegistry};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::Arc;

/// Progress of the step currently running
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepProgress {
    pub index: usize,
    /// Linear progress through the step's duration, 0.0 to 1.0
    pub linear: f32,
    /// `linear` through the step's easing
    pub eased: f32,
}

/// A plan advanced by explicit ticks
pub struct PlanPlayer {
    name: String,
    target: Arc<dyn Animatable>,
    steps: Vec<TransitionStep>,
    hooks: PlanHooks,
    schedule: Schedule,
    /// Milliseconds since `start`
    current_time: f64,
    next_event: usize,
    state: PlanState,
    playing: bool,
}

impl PlanPlayer {
    pub fn new(target: Arc<dyn Animatable>, plan: TransitionPlan, lead_ms: u64) -> Self {
        let TransitionPlan {
            target: name,
            steps,
            hooks,
        } = plan;
        let schedule = Schedule::compute(&steps, lead_ms);
        Self {
            name,
            target,
            steps,
            hooks,
            schedule,
            current_time: 0.0,
            next_event: 0,
            state: PlanState::Idle,
            playing: false,
        }
    }

    /// Player for a registered target; `None` when the target is unknown
    pub fn from_registry(
        registry: &TargetRegistry,
        plan: TransitionPlan,
        lead_ms: u64,
    ) -> Option<Self> {
        let target = registry.get(&plan.target)?;
        Some(Self::new(target, plan, lead_ms))
    }

    /// Fire `animation_begin` and start the clock
    pub fn start(&mut self) {
        if self.playing || self.state.is_finished() {
            return;
        }
        self.playing = true;
        tracing::debug!(plan = %self.name, steps = self.steps.len(), "plan player started");
        self.hooks.animation_begin();
    }

    /// Stop without firing the remaining events
    pub fn stop(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.playing = false;
        self.state = PlanState::Cancelled;
        tracing::debug!(plan = %self.name, at_ms = self.current_time, "plan player stopped");
    }

    /// Advance the clock and fire every event that became due
    pub fn tick(&mut self, dt_ms: f32) -> PlanState {
        if !self.playing {
            return self.state;
        }
        self.current_time += f64::from(dt_ms.max(0.0));

        while let Some(scheduled) = self.schedule.events().get(self.next_event).copied() {
            if scheduled.at_ms as f64 > self.current_time {
                break;
            }
            self.next_event += 1;
            match scheduled.event {
                PlanEvent::TransitionBegin(index) => {
                    self.state = PlanState::Running(index);
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

        if self.next_event >= self.schedule.events().len() {
            self.playing = false;
            self.state = PlanState::Complete;
            tracing::debug!(plan = %self.name, "plan player complete");
        }
        self.state
    }

    pub fn state(&self) -> PlanState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Progress of the running step's animation, after its delay
    pub fn progress(&self) -> Option<StepProgress> {
        let PlanState::Running(index) = self.state else {
            return None;
        };
        let step = self.steps.get(index)?;
        let start = self
            .schedule
            .step_start(index)?
            .saturating_add(self.schedule.lead_ms())
            .saturating_add(step.delay_ms);
        let local = self.current_time - start as f64;
        let linear = if local < 0.0 {
            0.0
        } else if step.duration_ms == 0 {
            1.0
        } else {
            (local / step.duration_ms as f64).min(1.0) as f32
        };
        Some(StepProgress {
            index,
            linear,
            eased: step.easing.apply(linear),
        })
    }
}

impl std::fmt::Debug for PlanPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanPlayer")
            .field("name", &self.name)
            .field("steps", &self.steps.len())
            .field("current_time", &self.current_time)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

new_key_type! {
    pub struct PlanId;
}

/// Ticks every active player of a frame loop
#[derive(Debug, Default)]
pub struct TransitionScheduler {
    players: SlotMap<PlanId, PlanPlayer>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add and start a player
    pub fn add(&mut self, mut player: PlanPlayer) -> PlanId {
        player.start();
        self.players.insert(player)
    }

    pub fn get(&self, id: PlanId) -> Option<&PlanPlayer> {
        self.players.get(id)
    }

    pub fn get_mut(&mut self, id: PlanId) -> Option<&mut PlanPlayer> {
        self.players.get_mut(id)
    }

    pub fn remove(&mut self, id: PlanId) -> Option<PlanPlayer> {
        self.players.remove(id)
    }

    /// Stop and drop a player before it completes
    pub fn cancel(&mut self, id: PlanId) -> bool {
        match self.players.remove(id) {
            Some(mut player) => {
                player.stop();
                true
            }
            None => false,
        }
    }

    /// Tick all players; finished players are removed and their ids returned
    pub fn tick(&mut self, dt_ms: f32) -> SmallVec<[PlanId; 4]> {
        let mut finished: SmallVec<[PlanId; 4]> = SmallVec::new();
        for (id, player) in self.players.iter_mut() {
            if player.tick(dt_ms).is_finished() {
                finished.push(id);
            }
        }
        for id in &finished {
            self.players.remove(*id);
        }
        finished
    }

    pub fn has_active_animations(&self) -> bool {
        self.players.values().any(PlanPlayer::is_playing)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
