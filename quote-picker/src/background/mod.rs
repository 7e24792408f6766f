pub mod catalog_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Running loads keyed by task id; starting a load under a busy id aborts the old one
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.remove(&task_id) {
            tracing::debug!("Cancelling running task {}", task_id);
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    pub fn cancel_all(&mut self) {
        for (task_id, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                tracing::debug!("Aborting task {}", task_id);
            }
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
