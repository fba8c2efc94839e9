//! Work queue shared by the worker pool
//!
//! The queue is pre-loaded with one token per request. Workers claim tokens
//! concurrently until the queue is exhausted; exhaustion is the pool's
//! termination signal, so workers naturally load-balance by speed instead of
//! being handed a fixed per-worker quota.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A single unit of work: "perform one request"
///
/// Tokens carry no payload beyond the claim index, which becomes the request
/// id in the corresponding [`Outcome`](crate::outcome::Outcome). Each token is
/// created once at startup and consumed exactly once by some worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkToken(pub(crate) usize);

impl WorkToken {
    /// The claim index of this token (0-based)
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Fixed-size pool of work tokens supporting concurrent claims
///
/// Claiming is a single atomic increment, so multiple workers can pull
/// without double-delivery or loss; once all tokens are handed out every
/// current and future claim returns `None`.
#[derive(Debug)]
pub struct WorkQueue {
    next: AtomicUsize,
    total: usize,
}

impl WorkQueue {
    /// Create a queue pre-loaded with `total` tokens
    pub fn new(total: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            total,
        }
    }

    /// Claim the next token, or `None` if the queue is exhausted
    pub fn claim(&self) -> Option<WorkToken> {
        let claimed = self.next.fetch_add(1, Ordering::SeqCst);
        if claimed >= self.total {
            // Rollback: we over-claimed due to concurrent access near the
            // limit. This keeps the counter accurate for other claimants.
            self.next.fetch_sub(1, Ordering::SeqCst);
            return None;
        }
        Some(WorkToken(claimed))
    }

    /// Total number of tokens the queue was created with
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of tokens not yet claimed
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.next.load(Ordering::SeqCst))
    }

    /// Whether every token has been claimed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_claim_all_then_exhausted() {
        let queue = WorkQueue::new(3);
        assert_eq!(queue.total(), 3);
        assert_eq!(queue.remaining(), 3);

        assert_eq!(queue.claim(), Some(WorkToken(0)));
        assert_eq!(queue.claim(), Some(WorkToken(1)));
        assert_eq!(queue.claim(), Some(WorkToken(2)));

        assert!(queue.is_exhausted());
        assert_eq!(queue.claim(), None);
        // Exhaustion is stable: repeated claims keep returning None.
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_empty_queue() {
        let queue = WorkQueue::new(0);
        assert!(queue.is_exhausted());
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn test_concurrent_claims_no_loss_no_duplicates() {
        let total = 1000;
        let queue = Arc::new(WorkQueue::new(total));
        let claimed = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let queue = Arc::clone(&queue);
            let claimed = Arc::clone(&claimed);
            handles.push(std::thread::spawn(move || {
                let mut local = Vec::new();
                while let Some(token) = queue.claim() {
                    local.push(token.index());
                }
                claimed.lock().unwrap().extend(local);
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let claimed = claimed.lock().unwrap();
        assert_eq!(claimed.len(), total);

        let unique: HashSet<usize> = claimed.iter().copied().collect();
        assert_eq!(unique.len(), total);
        assert!(queue.is_exhausted());
    }
}
