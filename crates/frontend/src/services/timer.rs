use std::time::Duration;

use async_trait::async_trait;
use auth_form::Timer;

/// `setTimeout`-backed delays. Dropping the sleep clears the timeout.
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo::timers::future::sleep(duration).await;
    }
}
