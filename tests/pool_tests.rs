use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use taskmill::{PoolOpts, TaskResult, run_tasks};

fn opts(workers: usize) -> PoolOpts {
    PoolOpts {
        num_workers: Some(workers),
        ..Default::default()
    }
}

// --- one result per task ---

#[test]
fn test_every_task_yields_exactly_one_result() {
    for workers in [1, 2, 8] {
        let outcome = run_tasks(
            0..100_u32,
            |n: &u32| Ok(n * 2),
            &opts(workers),
            None::<fn(&TaskResult<u32, u32>)>,
        )
        .unwrap();
        assert_eq!(outcome.results.len(), 100, "workers={}", workers);
        assert_eq!(outcome.submitted, 100);
        assert_eq!(outcome.num_workers, workers);
        let tasks: HashSet<u32> = outcome.results.iter().map(|r| r.task).collect();
        assert_eq!(tasks.len(), 100, "duplicate or lost task, workers={}", workers);
        assert!(outcome.results.iter().all(|r| r.is_ok()));
        for r in &outcome.results {
            assert_eq!(*r.outcome.as_ref().unwrap(), r.task * 2);
        }
    }
}

#[test]
fn test_all_failures_still_complete() {
    let outcome = run_tasks(
        0..25_u32,
        |n: &u32| -> taskmill::Result<u32> { Err(anyhow::anyhow!("task {} refused", n)) },
        &opts(4),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert_eq!(outcome.results.len(), 25);
    assert!(outcome.results.iter().all(|r| r.error().is_some()));
}

// --- ordering ---

#[test]
fn test_single_worker_preserves_submission_order() {
    let outcome = run_tasks(
        0..50_u32,
        |n: &u32| Ok(*n),
        &opts(1),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    let order: Vec<u32> = outcome.results.iter().map(|r| r.task).collect();
    let expected: Vec<u32> = (0..50).collect();
    assert_eq!(order, expected);
}

// --- timing and overlap ---

#[test]
fn test_workers_overlap_wall_clock_below_sequential_sum() {
    // 8 uniform 100 ms tasks on 4 workers: two waves, roughly 200 ms. The
    // sequential sum is 800 ms; stay well below it even on a loaded machine.
    let started = Instant::now();
    let outcome = run_tasks(
        0..8_u32,
        |_n: &u32| {
            thread::sleep(Duration::from_millis(100));
            Ok(())
        },
        &opts(4),
        None::<fn(&TaskResult<u32, ()>)>,
    )
    .unwrap();
    let wall = started.elapsed();
    assert_eq!(outcome.results.len(), 8);
    assert!(
        wall >= Duration::from_millis(200),
        "8 tasks of 100 ms on 4 workers need two waves, got {:?}",
        wall
    );
    assert!(
        wall < Duration::from_millis(600),
        "expected parallel overlap, got {:?}",
        wall
    );
}

#[test]
fn test_mixed_outcomes_two_workers() {
    // Three tasks on two workers: one scripted failure, and the slow task
    // overlaps the two short ones instead of running after them.
    let specs: Vec<(&'static str, u64, bool)> = vec![
        ("alpha", 300, false),
        ("beta", 150, true),
        ("gamma", 30, false),
    ];
    let started = Instant::now();
    let outcome = run_tasks(
        specs,
        |task: &(&'static str, u64, bool)| {
            let (name, delay_ms, fail) = *task;
            thread::sleep(Duration::from_millis(delay_ms));
            if fail {
                Err(anyhow::anyhow!("{} failed", name))
            } else {
                Ok(name.to_string())
            }
        },
        &opts(2),
        None::<fn(&TaskResult<(&'static str, u64, bool), String>)>,
    )
    .unwrap();
    let wall = started.elapsed();

    assert_eq!(outcome.results.len(), 3);
    let errors: Vec<_> = outcome
        .results
        .iter()
        .filter(|r| r.error().is_some())
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].task.0, "beta");
    // Sequential would be 480 ms; two workers finish near the 300 ms task.
    assert!(wall >= Duration::from_millis(300), "got {:?}", wall);
    assert!(wall < Duration::from_millis(450), "expected overlap, got {:?}", wall);
    for r in &outcome.results {
        assert!(r.elapsed >= Duration::from_millis(r.task.1));
    }
}

// --- completion signal and callback ---

#[test]
fn test_callback_sees_every_result_before_completion() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_cb = Arc::clone(&seen);
    let outcome = run_tasks(
        0..40_u32,
        |n: &u32| Ok(*n),
        &opts(4),
        Some(move |_r: &TaskResult<u32, u32>| {
            seen_cb.fetch_add(1, Ordering::Relaxed);
        }),
    )
    .unwrap();
    assert_eq!(seen.load(Ordering::Relaxed), 40);
    assert_eq!(outcome.results.len(), 40);
}

#[test]
fn test_no_more_than_n_tasks_run_at_once() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let in_flight_task = Arc::clone(&in_flight);
    let peak_task = Arc::clone(&peak);
    let outcome = run_tasks(
        0..20_u32,
        move |n: &u32| {
            let active = in_flight_task.fetch_add(1, Ordering::SeqCst) + 1;
            peak_task.fetch_max(active, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(5));
            in_flight_task.fetch_sub(1, Ordering::SeqCst);
            Ok(*n)
        },
        &opts(3),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert_eq!(outcome.results.len(), 20);
    assert!(
        peak.load(Ordering::SeqCst) <= 3,
        "{} tasks ran at once on 3 workers",
        peak.load(Ordering::SeqCst)
    );
    assert_eq!(
        in_flight.load(Ordering::SeqCst),
        0,
        "run returned while a worker was still mid-task"
    );
}

// --- edge cases ---

#[test]
fn test_zero_tasks_complete_cleanly() {
    let outcome = run_tasks(
        Vec::<u32>::new(),
        |n: &u32| Ok(*n),
        &opts(2),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.submitted, 0);
}

#[test]
fn test_zero_workers_rejected_before_start() {
    let err = run_tasks(
        vec![1_u32],
        |n: &u32| Ok(*n),
        &opts(0),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn test_default_worker_count_comes_from_cpus() {
    let outcome = run_tasks(
        0..4_u32,
        |n: &u32| Ok(*n),
        &PoolOpts::default(),
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert!(outcome.num_workers >= 1);
    assert_eq!(outcome.results.len(), 4);
}

#[test]
fn test_buffered_channels_also_complete() {
    let outcome = run_tasks(
        0..30_u32,
        |n: &u32| Ok(*n),
        &PoolOpts {
            num_workers: Some(3),
            channel_capacity: 4,
            ..Default::default()
        },
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert_eq!(outcome.results.len(), 30);
}

// --- cancellation ---

#[test]
fn test_cancel_before_start_emits_nothing() {
    let cancel = Arc::new(AtomicBool::new(true));
    let outcome = run_tasks(
        0..1000_u32,
        |n: &u32| Ok(*n),
        &PoolOpts {
            num_workers: Some(4),
            cancel: Some(cancel),
            ..Default::default()
        },
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert_eq!(outcome.submitted, 0);
    assert!(outcome.results.is_empty());
}

#[test]
fn test_cancel_mid_run_keeps_tasks_already_taken() {
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_inside = Arc::clone(&cancel);
    let outcome = run_tasks(
        0..1000_u32,
        move |n: &u32| {
            if *n == 0 {
                cancel_inside.store(true, Ordering::Relaxed);
            }
            thread::sleep(Duration::from_millis(1));
            Ok(*n)
        },
        &PoolOpts {
            num_workers: Some(2),
            cancel: Some(Arc::clone(&cancel)),
            ..Default::default()
        },
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert!(outcome.submitted < 1000, "source kept feeding after cancel");
    assert_eq!(
        outcome.results.len(),
        outcome.submitted,
        "a task handed to a worker lost its result"
    );
}

#[test]
fn test_cancel_with_buffered_channels_drains_queue() {
    // With capacity > 0 the source runs ahead of the workers, so tasks sit
    // queued in the channel when cancel lands. They still get processed.
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_inside = Arc::clone(&cancel);
    let outcome = run_tasks(
        0..1000_u32,
        move |n: &u32| {
            if *n == 0 {
                cancel_inside.store(true, Ordering::Relaxed);
            }
            thread::sleep(Duration::from_millis(1));
            Ok(*n)
        },
        &PoolOpts {
            num_workers: Some(2),
            channel_capacity: 8,
            cancel: Some(Arc::clone(&cancel)),
        },
        None::<fn(&TaskResult<u32, u32>)>,
    )
    .unwrap();
    assert!(outcome.submitted < 1000, "source kept feeding after cancel");
    assert_eq!(
        outcome.results.len(),
        outcome.submitted,
        "a queued task was dropped instead of drained"
    );
}
