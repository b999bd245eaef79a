//! Plan timing
//!
//! Sequencing is simulated from declared timings: step `i` begins once every
//! earlier step's `duration + delay` has elapsed, independent of when the
//! host actually finishes animating.
//!
//! ```text
//! t = 0            animation begin (fired by the caller, not scheduled)
//! start_i + lead   transition begin(i), then the visual call for `to` steps
//! + delay_i        visual call for `from` + `to` steps
//! start_{i+1}      transition end(i), never before begin(i)
//! total + lead     animation end
//! ```

use crate::step::{StepShape, TransitionStep};
use serde::Serialize;
use smallvec::SmallVec;

/// Gap between a step's scheduled start and its begin callback
pub const DEFAULT_LEAD_MS: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "event", content = "step", rename_all = "kebab-case")]
pub enum PlanEvent {
    TransitionBegin(usize),
    /// Issue the step's visual call on the target
    Apply(usize),
    TransitionEnd(usize),
    AnimationEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledEvent {
    pub at_ms: u64,
    pub event: PlanEvent,
}

/// Every event of a plan, ordered by fire time then declaration order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    events: Vec<ScheduledEvent>,
    starts: SmallVec<[u64; 8]>,
    total_ms: u64,
    lead_ms: u64,
}

impl Schedule {
    pub fn compute(steps: &[TransitionStep], lead_ms: u64) -> Self {
        let mut events = Vec::with_capacity(steps.len() * 3 + 1);
        let mut starts = SmallVec::with_capacity(steps.len());
        let mut elapsed = 0u64;

        for (index, step) in steps.iter().enumerate() {
            let begin = elapsed.saturating_add(lead_ms);
            starts.push(elapsed);
            events.push(ScheduledEvent {
                at_ms: begin,
                event: PlanEvent::TransitionBegin(index),
            });
            match step.shape() {
                StepShape::To => events.push(ScheduledEvent {
                    at_ms: begin,
                    event: PlanEvent::Apply(index),
                }),
                StepShape::Between => events.push(ScheduledEvent {
                    at_ms: begin.saturating_add(step.delay_ms),
                    event: PlanEvent::Apply(index),
                }),
                StepShape::Timing => {}
            }

            elapsed = elapsed.saturating_add(step.span_ms());
            events.push(ScheduledEvent {
                at_ms: elapsed.max(begin),
                event: PlanEvent::TransitionEnd(index),
            });
        }
        events.push(ScheduledEvent {
            at_ms: elapsed.saturating_add(lead_ms),
            event: PlanEvent::AnimationEnd,
        });

        // Stable: equal times keep declaration order
        events.sort_by_key(|e| e.at_ms);

        Self {
            events,
            starts,
            total_ms: elapsed,
            lead_ms,
        }
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// Sum of every step's `duration + delay`
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn lead_ms(&self) -> u64 {
        self.lead_ms
    }

    /// When the plan's last event fires
    pub fn end_ms(&self) -> u64 {
        self.total_ms.saturating_add(self.lead_ms)
    }

    /// Start of step `index` on the plan clock, before the lead
    pub fn step_start(&self, index: usize) -> Option<u64> {
        self.starts.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{record, StyleValue};
    use pretty_assertions::assert_eq;

    fn at(at_ms: u64, event: PlanEvent) -> ScheduledEvent {
        ScheduledEvent { at_ms, event }
    }

    fn opacity(v: f32) -> crate::StateRecord {
        record([("opacity", StyleValue::Number(v))])
    }

    #[test]
    fn single_step() {
        let schedule = Schedule::compute(&[TransitionStep::to(opacity(1.0), 300)], DEFAULT_LEAD_MS);
        assert_eq!(
            schedule.events(),
            &[
                at(5, PlanEvent::TransitionBegin(0)),
                at(5, PlanEvent::Apply(0)),
                at(300, PlanEvent::TransitionEnd(0)),
                at(305, PlanEvent::AnimationEnd),
            ]
        );
    }

    #[test]
    fn steps_follow_declared_spans() {
        let steps = [
            TransitionStep::to(opacity(1.0), 100),
            TransitionStep::wait(50),
            TransitionStep::between(opacity(0.0), opacity(1.0), 200).delay(10),
        ];
        let schedule = Schedule::compute(&steps, DEFAULT_LEAD_MS);
        assert_eq!(
            schedule.events(),
            &[
                at(5, PlanEvent::TransitionBegin(0)),
                at(5, PlanEvent::Apply(0)),
                at(100, PlanEvent::TransitionEnd(0)),
                at(105, PlanEvent::TransitionBegin(1)),
                at(150, PlanEvent::TransitionEnd(1)),
                at(155, PlanEvent::TransitionBegin(2)),
                at(165, PlanEvent::Apply(2)),
                at(360, PlanEvent::TransitionEnd(2)),
                at(365, PlanEvent::AnimationEnd),
            ]
        );
        assert_eq!(schedule.total_ms(), 360);
        assert_eq!(schedule.step_start(2), Some(150));
    }

    #[test]
    fn zero_length_steps_end_after_begin() {
        let schedule = Schedule::compute(&[TransitionStep::wait(0), TransitionStep::wait(0)], 5);
        assert_eq!(
            schedule.events(),
            &[
                at(5, PlanEvent::TransitionBegin(0)),
                at(5, PlanEvent::TransitionEnd(0)),
                at(5, PlanEvent::TransitionBegin(1)),
                at(5, PlanEvent::TransitionEnd(1)),
                at(5, PlanEvent::AnimationEnd),
            ]
        );
    }

    #[test]
    fn empty_plan_only_ends() {
        let schedule = Schedule::compute(&[], 5);
        assert_eq!(schedule.events(), &[at(5, PlanEvent::AnimationEnd)]);
        assert_eq!(schedule.end_ms(), 5);
    }
}
