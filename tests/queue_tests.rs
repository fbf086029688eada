use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

use forage::queue::{FlipFlopQueue, OrderedQueue, ResponseQueue};

#[tokio::test]
async fn ordered_pops_in_fifo_order() {
    let queue = OrderedQueue::new();
    queue.push_response("s1", json!("a"));
    queue.push_response("s1", json!("b"));

    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, Some(json!("a")));
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, Some(json!("b")));
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, None);
}

#[tokio::test]
async fn ordered_sessions_are_independent() {
    let queue = OrderedQueue::new();
    queue.push_response("s1", json!(1));
    queue.push_response("s2", json!(2));

    assert_eq!(queue.wait_for_response("s2", Some(0.0)).await, Some(json!(2)));
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, Some(json!(1)));
}

#[tokio::test]
async fn ordered_unknown_session_returns_none_immediately() {
    let queue = OrderedQueue::new();
    let start = Instant::now();
    assert_eq!(queue.wait_for_response("missing", Some(0.0)).await, None);
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[tokio::test]
async fn ordered_bounded_wait_expires() {
    let queue = OrderedQueue::new();
    let start = Instant::now();
    let result = queue.wait_for_response("s1", Some(0.3)).await;
    let elapsed = start.elapsed();
    assert_eq!(result, None);
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn ordered_bounded_wait_is_woken_by_push() {
    let queue = Arc::new(OrderedQueue::new());

    let pusher = queue.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        pusher.push_response("s1", json!("late"));
    });

    let start = Instant::now();
    let result = queue.wait_for_response("s1", Some(5.0)).await;
    assert_eq!(result, Some(json!("late")));
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn ordered_unbounded_wait_is_woken_by_push() {
    let queue = Arc::new(OrderedQueue::new());

    let pusher = queue.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(250)).await;
        pusher.push_response("s1", json!("eventually"));
    });

    let result = queue.wait_for_response("s1", None).await;
    assert_eq!(result, Some(json!("eventually")));
}

#[tokio::test]
async fn ordered_tolerates_oversized_timeouts() {
    let queue = OrderedQueue::new();
    queue.push_response("s1", json!("a"));

    // values straight off a query string must never panic the waiter
    assert_eq!(
        queue.wait_for_response("s1", Some(1e300)).await,
        Some(json!("a"))
    );
    queue.push_response("s1", json!("b"));
    assert_eq!(
        queue.wait_for_response("s1", Some(f64::INFINITY)).await,
        Some(json!("b"))
    );
}

#[tokio::test]
async fn ordered_nan_timeout_checks_once() {
    let queue = OrderedQueue::new();

    let start = Instant::now();
    assert_eq!(queue.wait_for_response("s1", Some(f64::NAN)).await, None);
    assert!(start.elapsed() < Duration::from_millis(50));

    queue.push_response("s1", json!("a"));
    assert_eq!(
        queue.wait_for_response("s1", Some(f64::NAN)).await,
        Some(json!("a"))
    );
}

#[tokio::test]
async fn ordered_drained_session_drops_its_buffer() {
    let queue = OrderedQueue::new();
    queue.push_response("s1", json!("a"));
    queue.push_response("s2", json!("b"));
    assert_eq!(queue.session_count(), 2);

    queue.wait_for_response("s1", Some(0.0)).await;
    assert_eq!(queue.session_count(), 1);

    // a buffer with items left keeps its entry
    queue.push_response("s2", json!("c"));
    queue.wait_for_response("s2", Some(0.0)).await;
    assert_eq!(queue.session_count(), 1);
    queue.wait_for_response("s2", Some(0.0)).await;
    assert_eq!(queue.session_count(), 0);
}

#[tokio::test]
async fn ordered_clear_discards_buffered_items() {
    let queue = OrderedQueue::new();
    queue.push_response("s1", json!("a"));
    queue.push_response("s1", json!("b"));
    queue.clear_session("s1");
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, None);
}

#[tokio::test]
async fn flipflop_newest_push_overwrites() {
    let queue = FlipFlopQueue::new();
    queue.push_response("s1", json!("a"));
    queue.push_response("s1", json!("b"));

    assert_eq!(queue.wait_for_response("s1", Some(5.0)).await, Some(json!("b")));
    // slot is consumed by the read
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, None);
}

#[tokio::test]
async fn flipflop_never_blocks_whatever_the_timeout() {
    let queue = FlipFlopQueue::new();

    let start = Instant::now();
    assert_eq!(queue.wait_for_response("empty", Some(10.0)).await, None);
    assert_eq!(queue.wait_for_response("empty", None).await, None);
    assert!(start.elapsed() < Duration::from_millis(50));
}

#[tokio::test]
async fn flipflop_clear_empties_the_slot() {
    let queue = FlipFlopQueue::new();
    queue.push_response("s1", json!("a"));
    queue.clear_session("s1");
    assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, None);
}

#[tokio::test]
async fn variants_are_interchangeable_behind_the_trait() {
    let queues: Vec<Arc<dyn ResponseQueue>> = vec![
        Arc::new(OrderedQueue::new()),
        Arc::new(FlipFlopQueue::new()),
    ];
    for queue in queues {
        queue.push_response("s1", json!({"status": "done"}));
        let got = queue.wait_for_response("s1", Some(0.0)).await;
        assert_eq!(got, Some(json!({"status": "done"})));
        assert_eq!(queue.wait_for_response("s1", Some(0.0)).await, None);
    }
}
