use rayon::prelude::*;

use crate::core::actions::row_map::ports::compute_backend::{
    ComputeBackend, RowLayoutError, check_row_layout,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThreadedBackendError {
    NoParallelism,
}

impl fmt::Display for ThreadedBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParallelism => {
                write!(f, "host reports no available parallelism")
            }
        }
    }
}

impl Error for ThreadedBackendError {}

/// Row mapping on rayon's work-stealing scheduler. Each `for_each_row`
/// call blocks until the whole pass has completed.
#[derive(Debug, Copy, Clone)]
pub struct ThreadedBackend;

impl ThreadedBackend {
    pub fn new() -> Result<Self, ThreadedBackendError> {
        std::thread::available_parallelism()
            .map(|_| Self)
            .map_err(|_| ThreadedBackendError::NoParallelism)
    }
}

impl ComputeBackend for ThreadedBackend {
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
        check_row_layout(cells.len(), row_len)?;

        cells
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, row_cells)| row_op(row, row_cells));

        Ok(())
    }
}
