//! Run a transition plan against a recording target and report the timeline

use anyhow::{Context, Result};
use lumen_animation::{
    PlanOutcome, RecordingTarget, TargetCall, TargetRegistry, TransitionPlan, TransitionSequencer,
};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::{Duration, Instant};

/// One line of the simulated timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub event: String,
}

type Timeline = Arc<Mutex<Vec<TimelineEntry>>>;

pub fn run(path: &Path, lead_ms: u64) -> Result<()> {
    let plan = TransitionPlan::load(path)
        .with_context(|| format!("Failed to load plan {}", path.display()))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start tokio runtime")?;
    let (outcome, timeline) = runtime.block_on(simulate(plan, lead_ms))?;

    for entry in &timeline {
        println!("{:>7}ms  {}", entry.at.as_millis(), entry.event);
    }
    println!("outcome: {outcome:?}");
    Ok(())
}

/// Drive `plan` to completion on the current runtime
pub async fn simulate(
    plan: TransitionPlan,
    lead_ms: u64,
) -> Result<(PlanOutcome, Vec<TimelineEntry>)> {
    let name = plan.target.clone();
    let target = Arc::new(RecordingTarget::new());
    let mut registry = TargetRegistry::new();
    registry.register(name.clone(), target.clone());

    let timeline = Timeline::default();
    let start = Instant::now();
    let plan = plan
        .on_animation_begin({
            let record = recorder(&timeline, start, |_| "animation begin".into());
            move || record(0)
        })
        .on_animation_end({
            let record = recorder(&timeline, start, |_| "animation end".into());
            move || record(0)
        })
        .on_transition_begin(recorder(&timeline, start, |i| format!("transition {i} begin")))
        .on_transition_end(recorder(&timeline, start, |i| format!("transition {i} end")));

    let handle = TransitionSequencer::new()
        .with_lead_ms(lead_ms)
        .run(&registry, plan)
        .with_context(|| format!("Plan target `{name}` is not registered"))?;
    let outcome = handle.completion().await;

    let mut entries = timeline.lock().unwrap_or_else(PoisonError::into_inner).clone();
    entries.extend(target.calls().into_iter().map(|(at, call)| TimelineEntry {
        at,
        event: describe(&call),
    }));
    entries.sort_by_key(|e| e.at);
    Ok((outcome, entries))
}

/// Hook body appending `(elapsed, label(index))`, usable for both hook shapes
fn recorder(
    timeline: &Timeline,
    start: Instant,
    label: impl Fn(usize) -> String + Send + 'static,
) -> impl Fn(usize) + Send + 'static {
    let timeline = Arc::clone(timeline);
    move |index| {
        let entry = TimelineEntry {
            at: start.elapsed(),
            event: label(index),
        };
        timeline
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

fn describe(call: &TargetCall) -> String {
    match call {
        TargetCall::TransitionTo {
            to,
            duration_ms,
            easing,
            delay_ms,
        } => format!(
            "  transition_to {} over {duration_ms}ms ({easing}, delay {delay_ms}ms)",
            json(to)
        ),
        TargetCall::Transition {
            from,
            to,
            duration_ms,
            easing,
        } => format!(
            "  transition {} -> {} over {duration_ms}ms ({easing})",
            json(from),
            json(to)
        ),
    }
}

fn json(record: &lumen_animation::StateRecord) -> String {
    serde_json::to_string(record).unwrap_or_default()
}
