//! Property-based tests for the session queue
//!
//! Uses proptest to verify the cursor invariants across many random
//! operation sequences.

use lark_session::{QueueItem, SessionQueue};
use proptest::prelude::*;

// ===== Helpers =====

fn item(id: &str) -> QueueItem {
    QueueItem {
        id: id.to_string(),
        title: format!("Track {id}"),
        artist: "Test Artist".to_string(),
        artwork: None,
        source: format!("file:///music/{id}.mp3"),
    }
}

/// A queue mutation as issued by a control surface
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
    Advance,
    Retreat,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    // Small id alphabet so removals actually hit existing entries
    prop_oneof![
        "[a-e]".prop_map(Op::Add),
        "[a-e]".prop_map(Op::Remove),
        Just(Op::Advance),
        Just(Op::Retreat),
    ]
}

fn apply(queue: &mut SessionQueue, op: Op) {
    match op {
        Op::Add(id) => queue.add_item(item(&id)),
        Op::Remove(id) => {
            queue.remove_item(&id);
        }
        Op::Advance => {
            queue.advance().ok();
        }
        Op::Retreat => {
            queue.retreat().ok();
        }
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: the cursor is None exactly when the queue is empty, and
    /// otherwise a valid index, after every operation
    #[test]
    fn cursor_always_valid(ops in prop::collection::vec(arbitrary_op(), 0..100)) {
        let mut queue = SessionQueue::new();

        for op in ops {
            apply(&mut queue, op);

            match queue.cursor() {
                None => prop_assert!(queue.is_empty()),
                Some(cursor) => prop_assert!(cursor < queue.len()),
            }
        }
    }

    /// Property: current() always agrees with the item at the cursor
    #[test]
    fn current_matches_cursor(ops in prop::collection::vec(arbitrary_op(), 0..100)) {
        let mut queue = SessionQueue::new();

        for op in ops {
            apply(&mut queue, op);

            match queue.cursor() {
                None => prop_assert!(queue.current().is_none()),
                Some(cursor) => {
                    prop_assert_eq!(queue.current(), Some(&queue.items()[cursor]));
                }
            }
        }
    }

    /// Property: advancing len times returns the cursor to its start
    /// (cyclic skip order is preserved)
    #[test]
    fn advancing_len_times_is_identity(
        ids in prop::collection::vec("[a-z]{1,8}", 1..20),
        offset in 0usize..20,
    ) {
        let mut queue = SessionQueue::new();
        for id in &ids {
            queue.add_item(item(id));
        }
        for _ in 0..(offset % ids.len()) {
            queue.advance().unwrap();
        }
        let start = queue.cursor();

        for _ in 0..queue.len() {
            queue.advance().unwrap();
        }

        prop_assert_eq!(queue.cursor(), start);
    }

    /// Property: retreat undoes advance at any cursor position
    #[test]
    fn retreat_inverts_advance(
        ids in prop::collection::vec("[a-z]{1,8}", 1..20),
        offset in 0usize..20,
    ) {
        let mut queue = SessionQueue::new();
        for id in &ids {
            queue.add_item(item(id));
        }
        for _ in 0..(offset % ids.len()) {
            queue.advance().unwrap();
        }
        let start = queue.cursor();

        queue.advance().unwrap();
        queue.retreat().unwrap();

        prop_assert_eq!(queue.cursor(), start);
    }
}
