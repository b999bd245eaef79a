//! Transition steps
//!
//! A step describes one visual change of a target: `to` only animates from the
//! target's current state, `from` + `to` is an explicit two-point transition,
//! and neither is a timing-only placeholder that still takes up its
//! `duration + delay`.

use crate::easing::Easing;
use lumen_core::StyleRecord;
use serde::Deserialize;
use serde_json::Value;

/// Visual state of a target: property name to value
pub type StateRecord = StyleRecord;

/// What a step does to its target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepShape {
    /// Animate from the current state to `to`
    To,
    /// Explicit `from` to `to`
    Between,
    /// No visual change
    Timing,
}

/// One step of a [`TransitionPlan`](crate::TransitionPlan)
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct TransitionStep {
    pub from: Option<StateRecord>,
    pub to: Option<StateRecord>,
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl TransitionStep {
    /// Animate from the current state to `to`
    pub fn to(to: StateRecord, duration_ms: u64) -> Self {
        Self {
            to: Some(to),
            duration_ms,
            ..Default::default()
        }
    }

    /// Explicit two-point transition
    pub fn between(from: StateRecord, to: StateRecord, duration_ms: u64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            duration_ms,
            ..Default::default()
        }
    }

    /// Placeholder that only consumes time
    pub fn wait(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Default::default()
        }
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn shape(&self) -> StepShape {
        match (&self.from, &self.to) {
            (Some(_), Some(_)) => StepShape::Between,
            (None, Some(_)) => StepShape::To,
            _ => StepShape::Timing,
        }
    }

    /// Time the step occupies on the plan's clock
    pub fn span_ms(&self) -> u64 {
        self.duration_ms.saturating_add(self.delay_ms)
    }
}

/// Steps are read leniently: timing comes from an `option` object (or the
/// step itself), and a step whose `from`/`to` are not flat records loses both
/// and becomes timing-only.
impl From<Value> for TransitionStep {
    fn from(value: Value) -> Self {
        let Value::Object(step) = value else {
            tracing::warn!("transition step is not an object, treating as empty");
            return TransitionStep::default();
        };

        let timing = match step.get("option") {
            Some(Value::Object(option)) => option,
            _ => &step,
        };
        let millis = |key: &str| {
            timing
                .get(key)
                .and_then(Value::as_f64)
                .filter(|ms| ms.is_finite() && *ms > 0.0)
                .map_or(0, |ms| ms.round() as u64)
        };
        let easing = timing
            .get("easing")
            .and_then(Value::as_str)
            .map(Easing::from_name)
            .unwrap_or_default();

        let from = state(step.get("from"));
        let to = state(step.get("to"));
        let (from, to) = match (from, to) {
            (Ok(from), Ok(to)) if from.is_none() || to.is_some() => (from, to),
            _ => {
                tracing::warn!("malformed transition step, keeping timing only");
                (None, None)
            }
        };

        TransitionStep {
            from,
            to,
            duration_ms: millis("duration"),
            delay_ms: millis("delay"),
            easing,
        }
    }
}

/// A state slot: absent or null is `None`, a flat object is a record
fn state(value: Option<&Value>) -> Result<Option<StateRecord>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v @ Value::Object(_)) => StateRecord::deserialize(v).map(Some).map_err(|_| ()),
        Some(_) => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{record, StyleValue};
    use serde_json::json;

    #[test]
    fn reads_option_block() {
        let step: TransitionStep = serde_json::from_value(json!({
            "to": {"opacity": 1},
            "option": {"duration": 300, "delay": 20, "easing": "ease-out"}
        }))
        .unwrap();
        assert_eq!(step.shape(), StepShape::To);
        assert_eq!(step.to, Some(record([("opacity", StyleValue::Number(1.0))])));
        assert_eq!(step.duration_ms, 300);
        assert_eq!(step.delay_ms, 20);
        assert_eq!(step.easing, Easing::EaseOut);
        assert_eq!(step.span_ms(), 320);
    }

    #[test]
    fn flat_timing_keys() {
        let step: TransitionStep =
            serde_json::from_value(json!({"from": {"x": 0}, "to": {"x": 10}, "duration": 50}))
                .unwrap();
        assert_eq!(step.shape(), StepShape::Between);
        assert_eq!(step.duration_ms, 50);
    }

    #[test]
    fn malformed_steps_keep_timing() {
        let nested: TransitionStep = serde_json::from_value(json!({
            "to": {"transform": {"scale": 2}},
            "option": {"duration": 100}
        }))
        .unwrap();
        assert_eq!(nested.shape(), StepShape::Timing);
        assert_eq!(nested.duration_ms, 100);

        let from_only: TransitionStep =
            serde_json::from_value(json!({"from": {"x": 1}, "duration": 10})).unwrap();
        assert_eq!(from_only.shape(), StepShape::Timing);
        assert_eq!(from_only.span_ms(), 10);

        let scalar: TransitionStep = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(scalar, TransitionStep::default());
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        let step: TransitionStep =
            serde_json::from_value(json!({"option": {"duration": -5, "delay": 2.6}})).unwrap();
        assert_eq!(step.duration_ms, 0);
        assert_eq!(step.delay_ms, 3);
    }
}
