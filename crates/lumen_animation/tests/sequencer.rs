//! Timing of the async sequencer under tokio's paused clock

use lumen_animation::{
    run_transition_plan, Easing, PlanOutcome, PlanState, RecordingTarget, TargetCall,
    TargetRegistry, TransitionPlan, TransitionSequencer, TransitionStep,
};
use lumen_core::{record, StyleValue};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration, Instant};

type Log = Arc<Mutex<Vec<(u64, String)>>>;

fn opacity(v: f32) -> lumen_animation::StateRecord {
    record([("opacity", StyleValue::Number(v))])
}

/// Attach every hook, logging `(ms since start, event)`
fn logged(plan: TransitionPlan, start: Instant, log: &Log) -> TransitionPlan {
    let push = |log: &Log| {
        let log = Arc::clone(log);
        move |event: String| {
            let at = start.elapsed().as_millis() as u64;
            log.lock().unwrap().push((at, event));
        }
    };
    let (begin, end, anim_begin, anim_end) = (push(log), push(log), push(log), push(log));
    plan.on_transition_begin(move |i| begin(format!("begin {i}")))
        .on_transition_end(move |i| end(format!("end {i}")))
        .on_animation_begin(move || anim_begin("animation begin".into()))
        .on_animation_end(move || anim_end("animation end".into()))
}

fn registry_with(name: &str) -> (TargetRegistry, Arc<RecordingTarget>) {
    let target = Arc::new(RecordingTarget::new());
    let mut registry = TargetRegistry::new();
    registry.register(name, target.clone());
    (registry, target)
}

fn entries(log: &Log) -> Vec<(u64, String)> {
    log.lock().unwrap().clone()
}

fn expected(events: &[(u64, &str)]) -> Vec<(u64, String)> {
    events.iter().map(|(at, e)| (*at, e.to_string())).collect()
}

#[tokio::test(start_paused = true)]
async fn single_step_timeline() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let start = Instant::now();

    let plan = logged(
        TransitionPlan::new("x").step(TransitionStep::to(opacity(1.0), 300)),
        start,
        &log,
    );
    let handle = run_transition_plan(&registry, plan).unwrap();

    // Animation begin is synchronous
    assert_eq!(entries(&log), expected(&[(0, "animation begin")]));

    assert_eq!(handle.completion().await, PlanOutcome::Completed);
    assert_eq!(start.elapsed(), Duration::from_millis(305));
    assert_eq!(
        entries(&log),
        expected(&[
            (0, "animation begin"),
            (5, "begin 0"),
            (300, "end 0"),
            (305, "animation end"),
        ])
    );
    assert_eq!(
        target.calls(),
        vec![(
            Duration::from_millis(5),
            TargetCall::TransitionTo {
                to: opacity(1.0),
                duration_ms: 300,
                easing: Easing::Linear,
                delay_ms: 0,
            }
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn steps_run_strictly_in_order() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let start = Instant::now();

    let plan = logged(
        TransitionPlan::new("x").steps([
            TransitionStep::to(opacity(0.5), 100),
            TransitionStep::to(opacity(0.2), 50),
            TransitionStep::to(opacity(1.0), 200),
        ]),
        start,
        &log,
    );
    let handle = run_transition_plan(&registry, plan).unwrap();
    assert_eq!(handle.completion().await, PlanOutcome::Completed);
    assert!(start.elapsed() >= Duration::from_millis(100 + 50 + 200));

    assert_eq!(
        entries(&log),
        expected(&[
            (0, "animation begin"),
            (5, "begin 0"),
            (100, "end 0"),
            (105, "begin 1"),
            (150, "end 1"),
            (155, "begin 2"),
            (350, "end 2"),
            (355, "animation end"),
        ])
    );

    let applied: Vec<u64> = target
        .calls()
        .iter()
        .map(|(at, _)| at.as_millis() as u64)
        .collect();
    assert_eq!(applied, [5, 105, 155]);
    // Each step ends before the next one is applied
    assert!(100 < applied[1] && 150 < applied[2]);
}

#[tokio::test(start_paused = true)]
async fn two_point_steps_wait_for_their_delay() {
    let (registry, target) = registry_with("x");
    let plan = TransitionPlan::new("x").steps([
        TransitionStep::between(opacity(0.0), opacity(1.0), 100)
            .delay(40)
            .easing(Easing::EaseOut),
        TransitionStep::to(opacity(0.0), 10).delay(15),
    ]);
    let handle = run_transition_plan(&registry, plan).unwrap();
    handle.completion().await;

    let calls = target.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, Duration::from_millis(45));
    assert_eq!(
        calls[0].1,
        TargetCall::Transition {
            from: opacity(0.0),
            to: opacity(1.0),
            duration_ms: 100,
            easing: Easing::EaseOut,
        }
    );
    // `to` steps hand their delay to the host instead
    assert_eq!(calls[1].0, Duration::from_millis(145));
    assert!(matches!(calls[1].1, TargetCall::TransitionTo { delay_ms: 15, .. }));
}

#[tokio::test(start_paused = true)]
async fn unregistered_target_is_a_silent_no_op() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let plan = logged(
        TransitionPlan::new("missing").step(TransitionStep::to(opacity(1.0), 10)),
        Instant::now(),
        &log,
    );
    assert!(run_transition_plan(&registry, plan).is_none());

    sleep(Duration::from_millis(100)).await;
    assert!(entries(&log).is_empty());
    assert!(target.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn timing_only_steps_consume_time() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let start = Instant::now();
    let plan = logged(
        TransitionPlan::new("x").steps([
            TransitionStep::wait(60),
            TransitionStep::to(opacity(1.0), 20),
        ]),
        start,
        &log,
    );
    run_transition_plan(&registry, plan).unwrap().completion().await;

    assert_eq!(
        entries(&log),
        expected(&[
            (0, "animation begin"),
            (5, "begin 0"),
            (60, "end 0"),
            (65, "begin 1"),
            (80, "end 1"),
            (85, "animation end"),
        ])
    );
    assert_eq!(target.calls().len(), 1);
    assert_eq!(target.calls()[0].0, Duration::from_millis(65));
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_pending_events() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let start = Instant::now();
    let plan = logged(
        TransitionPlan::new("x").steps([
            TransitionStep::to(opacity(0.5), 100),
            TransitionStep::to(opacity(1.0), 100),
        ]),
        start,
        &log,
    );
    let handle = run_transition_plan(&registry, plan).unwrap();

    sleep(Duration::from_millis(50)).await;
    assert_eq!(handle.state(), PlanState::Running(0));
    handle.cancel();
    assert_eq!(handle.completion().await, PlanOutcome::Cancelled);
    assert_eq!(handle.state(), PlanState::Cancelled);

    sleep(Duration::from_millis(500)).await;
    assert_eq!(entries(&log), expected(&[(0, "animation begin"), (5, "begin 0")]));
    assert_eq!(target.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_keeps_the_plan_running() {
    let (registry, _target) = registry_with("x");
    let log = Log::default();
    let plan = logged(
        TransitionPlan::new("x").step(TransitionStep::wait(30)),
        Instant::now(),
        &log,
    );
    drop(run_transition_plan(&registry, plan));

    sleep(Duration::from_millis(100)).await;
    assert_eq!(entries(&log).last().map(|(_, e)| e.as_str()), Some("animation end"));
}

#[tokio::test(start_paused = true)]
async fn cancel_on_drop_tears_down() {
    let (registry, target) = registry_with("x");
    let log = Log::default();
    let plan = logged(
        TransitionPlan::new("x").step(TransitionStep::to(opacity(1.0), 30).delay(0)),
        Instant::now(),
        &log,
    );
    let handle = run_transition_plan(&registry, plan).unwrap().cancel_on_drop();
    drop(handle);

    sleep(Duration::from_millis(100)).await;
    assert_eq!(entries(&log), expected(&[(0, "animation begin")]));
    assert!(target.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn custom_lead() {
    let (registry, target) = registry_with("x");
    let sequencer = TransitionSequencer::new().with_lead_ms(20);
    let start = Instant::now();
    let handle = sequencer
        .run(&registry, TransitionPlan::new("x").step(TransitionStep::to(opacity(1.0), 10)))
        .unwrap();
    handle.completion().await;

    assert_eq!(target.calls()[0].0, Duration::from_millis(20));
    assert_eq!(start.elapsed(), Duration::from_millis(30));
}
