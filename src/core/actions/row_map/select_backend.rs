use crate::core::actions::row_map::ports::compute_backend::{ComputeBackend, RowLayoutError};
use crate::core::actions::row_map::serial_backend::SerialBackend;
use crate::core::actions::row_map::threaded_backend::ThreadedBackend;

/// The backend chosen at initialization; the pipeline only ever sees the
/// `ComputeBackend` port.
#[derive(Debug, Copy, Clone)]
pub enum SelectedBackend {
    Threaded(ThreadedBackend),
    Serial(SerialBackend),
}

impl ComputeBackend for SelectedBackend {
    fn for_each_row<T, F>(
        &self,
        cells: &mut [T],
        row_len: usize,
        row_op: F,
    ) -> Result<(), RowLayoutError>
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Sync,
    {
        match self {
            Self::Threaded(backend) => backend.for_each_row(cells, row_len, row_op),
            Self::Serial(backend) => backend.for_each_row(cells, row_len, row_op),
        }
    }
}

/// Prefers the work-stealing thread pool, falling back to the serial host
/// loop when the host reports no available parallelism.
#[must_use]
pub fn select_backend() -> SelectedBackend {
    match ThreadedBackend::new() {
        Ok(backend) => SelectedBackend::Threaded(backend),
        Err(err) => {
            log::debug!("threaded backend unavailable ({}), using serial", err);
            SelectedBackend::Serial(SerialBackend)
        }
    }
}
