/*
[INPUT]:  A route, a delay, and a navigator implementation
[OUTPUT]: A scheduled redirect with a cancellation handle
[POS]:    Navigation layer - deferred redirects decoupled from the clock
[UPDATE]: When navigation targets or scheduling semantics change
*/

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Something that can move the user to another screen
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// A redirect scheduled to fire after a delay.
///
/// The handle exposes the target immediately, so callers and tests can
/// assert "navigation scheduled" without waiting on a real clock, and can
/// cancel before it fires. Dropping the handle does not cancel the
/// redirect.
#[derive(Debug)]
pub struct DeferredNavigation {
    target: String,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl DeferredNavigation {
    /// Schedule `navigator.navigate(route)` to run after `delay`
    pub fn schedule(navigator: Arc<dyn Navigator>, route: &str, delay: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let target = route.to_string();
        let task_route = target.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(route = %task_route, "deferred navigation cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    navigator.navigate(&task_route);
                }
            }
        });

        Self {
            target,
            cancel,
            task,
        }
    }

    /// Where the redirect will go
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Cancel the redirect if it has not fired yet
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait until the redirect fired or was cancelled
    pub async fn wait(self) {
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &str) {
            self.routes.lock().unwrap().push(route.to_string());
        }
    }

    #[tokio::test]
    async fn test_schedule_exposes_target_before_firing() {
        let navigator = Arc::new(RecordingNavigator::default());
        let pending = DeferredNavigation::schedule(
            navigator.clone(),
            "/dashboard",
            Duration::from_secs(60),
        );

        // Asserted without waiting on the clock.
        assert_eq!(pending.target(), "/dashboard");
        assert!(navigator.routes.lock().unwrap().is_empty());

        pending.cancel();
        pending.wait().await;
        assert!(navigator.routes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_navigation_fires_after_delay() {
        let navigator = Arc::new(RecordingNavigator::default());
        let pending = DeferredNavigation::schedule(
            navigator.clone(),
            "/dashboard",
            Duration::from_millis(10),
        );

        pending.wait().await;
        assert_eq!(
            navigator.routes.lock().unwrap().as_slice(),
            ["/dashboard".to_string()]
        );
    }
}
