//! Lumen Transition Sequencing
//!
//! Timed multi-step transitions for one named animatable target.
//!
//! # Features
//!
//! - **Plans**: ordered [`TransitionStep`]s with begin/end hooks per step and
//!   for the whole animation
//! - **Declared timing**: each step waits out its `duration + delay`; the host
//!   is never asked when it actually finished
//! - **Async runner**: [`TransitionSequencer`] drives a plan on tokio timers
//!   and hands back a cancellable [`TransitionHandle`]
//! - **Frame-driven playback**: [`PlanPlayer`] and [`TransitionScheduler`]
//!   for hosts with their own frame loop
//!
//! # Example
//!
//! ```rust
//! use lumen_animation::{
//!     run_transition_plan, PlanOutcome, RecordingTarget, TargetRegistry, TransitionPlan,
//!     TransitionStep,
//! };
//! use lumen_core::{record, StyleValue};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut registry = TargetRegistry::new();
//! registry.register("card", Arc::new(RecordingTarget::new()));
//!
//! let plan = TransitionPlan::new("card")
//!     .step(TransitionStep::to(record([("opacity", StyleValue::Number(1.0))]), 30))
//!     .on_animation_end(|| println!("done"));
//!
//! let handle = run_transition_plan(&registry, plan).expect("card is registered");
//! assert_eq!(handle.completion().await, PlanOutcome::Completed);
//! # }
//! ```

pub mod easing;
mod error;
mod plan;
pub mod player;
pub mod schedule;
mod sequencer;
mod step;
mod target;

pub use easing::{Easing, EASE};
pub use error::{PlanError, Result};
pub use plan::{PlanHooks, TransitionPlan};
pub use player::{PlanId, PlanPlayer, StepProgress, TransitionScheduler};
pub use schedule::{PlanEvent, Schedule, ScheduledEvent, DEFAULT_LEAD_MS};
pub use sequencer::{
    run_transition_plan, PlanOutcome, PlanState, TransitionHandle, TransitionSequencer,
};
pub use step::{StateRecord, StepShape, TransitionStep};
pub use target::{Animatable, RecordingTarget, TargetCall, TargetRegistry};
