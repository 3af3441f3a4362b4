//! Cooperative cancellation for the worker pool.
//!
//! Reader, workers, and writer each hold a clone of the [`CancelToken`]:
//! any stage can flip it to stop the others early once it hits an error,
//! so the rest of the pipeline stops producing or consuming work instead
//! of running to completion on data nobody wants anymore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag any pipeline stage can set to ask the others to stop.
#[derive(Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_starts_clear() {
        let token = CancelToken::new();
        assert!(!token.is_canceled());
        token.cancel();
        assert!(token.is_canceled());
    }

    #[test]
    fn cancel_propagates_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_canceled());
    }
}
