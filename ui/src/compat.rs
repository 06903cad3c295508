// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    pub mod interval {
        use std::time::Duration;
        use tokio::sync::mpsc;

        /// A repeating timer whose first tick arrives one full period after creation.
        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: mpsc::UnboundedReceiver<()>,
        }

        impl Interval {
            pub fn new(period: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded_channel();
                let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
                let gloo_interval = gloo_timers::callback::Interval::new(millis, move || {
                    let _ = tx.send(());
                });

                Self {
                    inner: Some(gloo_interval),
                    rx,
                }
            }

            /// Cancel safe.
            pub async fn tick(&mut self) {
                if self.rx.recv().await.is_none() {
                    // sender lives inside the gloo callback; only gone after drop.
                    std::future::pending::<()>().await;
                }
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    pub mod interval {
        use tokio::time::{self, Duration, Instant, MissedTickBehavior};

        /// A repeating timer whose first tick arrives one full period after creation.
        pub struct Interval {
            inner: tokio::time::Interval,
        }

        impl Interval {
            pub fn new(period: Duration) -> Self {
                let mut interval = time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }

            /// Cancel safe.
            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }
}
