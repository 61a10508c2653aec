use tokio::{
    runtime::Runtime,
    task::{JoinError, JoinHandle},
};

/// Runs CPU-bound verification jobs on Tokio's blocking pool.
pub struct VerificationExecutor {
    runtime: Runtime,
}

impl VerificationExecutor {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
        })
    }

    /// Spawns a blocking task in a dedicated thread pool
    pub fn spawn_blocking<F, R>(&self, task: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        self.runtime.spawn_blocking(task)
    }

    /// Runs every task on the blocking pool and waits for all of them.
    ///
    /// Results are returned in the order the tasks were given. A task that
    /// panics shows up as a [`JoinError`] without affecting the others.
    pub fn run_blocking<F, R>(
        &self,
        tasks: impl IntoIterator<Item = F>,
    ) -> Vec<Result<R, JoinError>>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let handles: Vec<_> = tasks
            .into_iter()
            .map(|task| self.spawn_blocking(task))
            .collect();

        self.runtime.block_on(futures::future::join_all(handles))
    }

    /// Get a reference to the underlying runtime
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}
