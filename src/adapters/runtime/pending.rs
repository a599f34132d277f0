use crate::core::errors::{CloakError, Result};
use crate::core::traits::loader::LoadRequest;

/// A pending bundle load backed by a tokio blocking task.
///
/// [`BundleLoader`](crate::core::traits::loader::BundleLoader)
/// implementations can build their async entry points on this: the
/// blocking load runs on a dedicated thread and makes progress
/// immediately, while the caller gets a request it can poll or wait on.
///
/// The request owns its runtime, so it stays valid until waited on or
/// dropped. Dropping without waiting detaches the load; the work still
/// runs to completion but the handle is discarded.
#[derive(Debug)]
pub struct PendingBundle<H> {
    rt: tokio::runtime::Runtime,
    task: tokio::task::JoinHandle<Result<H>>,
}

impl<H: Send + 'static> PendingBundle<H> {
    /// Start `work` on a blocking thread and return the pending request.
    pub fn spawn<F>(work: F) -> Result<Self>
    where
        F: FnOnce() -> Result<H> + Send + 'static,
    {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| CloakError::LoadFailed {
                reason: format!("failed to create async runtime: {e}"),
            })?;
        let task = rt.spawn_blocking(work);
        Ok(Self { rt, task })
    }
}

impl<H: Send + 'static> LoadRequest for PendingBundle<H> {
    type Handle = H;

    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    fn wait(self) -> Result<H> {
        self.rt
            .block_on(self.task)
            .map_err(|e| CloakError::LoadFailed {
                reason: format!("async load task failed: {e}"),
            })?
    }
}
