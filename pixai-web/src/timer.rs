use std::time::Duration;

pub async fn after(ms: u32) {
    gloo_timers::future::sleep(Duration::from_millis(u64::from(ms))).await;
}
