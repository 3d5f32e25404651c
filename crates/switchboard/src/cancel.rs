//! Cooperative cancellation of a generation pass.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::GeneratorError;

/// Shared flag the host raises to abandon a pass.
///
/// Clones observe the same flag, so a host can keep one handle and give the
/// other to the generator.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Fails with [`GeneratorError::Cancelled`] once cancellation was
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Cancelled`] when the token is cancelled.
    pub fn check(&self) -> Result<(), GeneratorError> {
        if self.is_cancelled() {
            Err(GeneratorError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(token.check().is_ok());

        handle.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(GeneratorError::Cancelled)));
    }

    #[test]
    fn cancel_is_visible_across_threads() {
        let token = CancellationToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel())
            .join()
            .unwrap_or_else(|_| panic!("cancelling thread panicked"));
        assert!(token.is_cancelled());
    }
}
