use crate::FileStore;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Run the retention sweep on a plain background thread at a fixed
/// interval. The sweep only touches the store's directory listing and
/// holds no locks shared with request threads.
pub fn spawn_retention_sweeper(
    store: Arc<FileStore>,
    interval: Duration,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("retention-sweeper".to_string())
        .spawn(move || loop {
            thread::sleep(interval);
            if let Err(e) = store.sweep_expired() {
                log::warn!("retention sweep failed: {e}");
            }
        })
}
