//! Transition plans: ordered steps for one named target plus lifecycle hooks

use crate::error::{PlanError, Result};
use crate::step::TransitionStep;
use serde::Deserialize;
use std::path::Path;

type IndexHook = Box<dyn FnMut(usize) + Send>;
type Hook = Box<dyn FnMut() + Send>;

/// Optional lifecycle callbacks of a plan
#[derive(Default)]
pub struct PlanHooks {
    pub(crate) transition_begin: Option<IndexHook>,
    pub(crate) transition_end: Option<IndexHook>,
    pub(crate) animation_begin: Option<Hook>,
    pub(crate) animation_end: Option<Hook>,
}

impl PlanHooks {
    pub(crate) fn transition_begin(&mut self, index: usize) {
        if let Some(hook) = self.transition_begin.as_mut() {
            hook(index);
        }
    }

    pub(crate) fn transition_end(&mut self, index: usize) {
        if let Some(hook) = self.transition_end.as_mut() {
            hook(index);
        }
    }

    pub(crate) fn animation_begin(&mut self) {
        if let Some(hook) = self.animation_begin.as_mut() {
            hook();
        }
    }

    pub(crate) fn animation_end(&mut self) {
        if let Some(hook) = self.animation_end.as_mut() {
            hook();
        }
    }
}

impl std::fmt::Debug for PlanHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanHooks")
            .field("transition_begin", &self.transition_begin.is_some())
            .field("transition_end", &self.transition_end.is_some())
            .field("animation_begin", &self.animation_begin.is_some())
            .field("animation_end", &self.animation_end.is_some())
            .finish()
    }
}

/// An ordered sequence of steps bound to one named target
#[derive(Debug, Default)]
pub struct TransitionPlan {
    pub target: String,
    pub steps: Vec<TransitionStep>,
    pub hooks: PlanHooks,
}

impl TransitionPlan {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn step(mut self, step: TransitionStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = TransitionStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn on_transition_begin(mut self, hook: impl FnMut(usize) + Send + 'static) -> Self {
        self.hooks.transition_begin = Some(Box::new(hook));
        self
    }

    pub fn on_transition_end(mut self, hook: impl FnMut(usize) + Send + 'static) -> Self {
        self.hooks.transition_end = Some(Box::new(hook));
        self
    }

    pub fn on_animation_begin(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.animation_begin = Some(Box::new(hook));
        self
    }

    pub fn on_animation_end(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.animation_end = Some(Box::new(hook));
        self
    }

    /// Plan from a JSON document, without hooks
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: PlanDocument = serde_json::from_str(json)?;
        document.into_plan()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Serialized form: `{"target": "x", "steps": [{"to": {...}, "option": {...}}]}`
#[derive(Debug, Deserialize)]
struct PlanDocument {
    #[serde(default)]
    target: String,
    #[serde(default)]
    steps: Vec<TransitionStep>,
}

impl PlanDocument {
    fn into_plan(self) -> Result<TransitionPlan> {
        if self.target.trim().is_empty() {
            return Err(PlanError::MissingTarget);
        }
        Ok(TransitionPlan::new(self.target).steps(self.steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepShape;

    #[test]
    fn parses_document() {
        let plan = TransitionPlan::from_json_str(
            r#"{"target": "card", "steps": [
                {"to": {"opacity": 1}, "option": {"duration": 300}},
                {"option": {"duration": 40}},
                "garbage"
            ]}"#,
        )
        .unwrap();
        assert_eq!(plan.target, "card");
        let shapes: Vec<_> = plan.steps.iter().map(TransitionStep::shape).collect();
        assert_eq!(shapes, [StepShape::To, StepShape::Timing, StepShape::Timing]);
    }

    #[test]
    fn requires_target() {
        assert!(matches!(
            TransitionPlan::from_json_str(r#"{"steps": []}"#),
            Err(PlanError::MissingTarget)
        ));
        assert!(matches!(
            TransitionPlan::from_json_str("[1, 2"),
            Err(PlanError::Parse(_))
        ));
    }
}
