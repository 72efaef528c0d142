use std::time::Duration;

/// Sequential rate gate for third-party RPC endpoints: no wait before the
/// first call, a fixed delay before every call after that.
pub struct Pacer {
    delay: Duration,
    primed: bool,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            primed: false,
        }
    }

    pub async fn wait(&mut self) {
        if self.primed && !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.primed = true;
    }
}
