//! Property-based tests for the message log

use std::sync::Arc;

use chatline::backend::chat::MessageLog;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_ids_are_sequential_from_one(bodies in prop::collection::vec("[a-z]{1,6}", 1..40)) {
        let log = MessageLog::new();
        for body in &bodies {
            log.append("user", body.clone()).unwrap();
        }

        let snapshot = log.snapshot();
        let ids: Vec<u64> = snapshot.iter().map(|m| m.id).collect();
        prop_assert_eq!(ids, (1..=bodies.len() as u64).collect::<Vec<_>>());
        prop_assert!(snapshot.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_concurrent_appends_leave_no_gaps(threads in 2usize..6, per_thread in 1usize..20) {
        let log = Arc::new(MessageLog::new());
        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for n in 0..per_thread {
                        log.append(format!("t{t}"), format!("m{n}")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ids: Vec<u64> = log.snapshot().iter().map(|m| m.id).collect();
        prop_assert_eq!(ids, (1..=(threads * per_thread) as u64).collect::<Vec<_>>());
    }
}
