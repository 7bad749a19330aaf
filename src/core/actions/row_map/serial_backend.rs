use crate::core::actions::row_map::ports::compute_backend::{
    ComputeBackend, RowLayoutError, check_row_layout,
};

/// Single-threaded host loop. Always constructible; the fallback when no
/// parallel execution is available.
#[derive(Debug, Copy, Clone, Default)]
pub struct SerialBackend;

impl ComputeBackend for SerialBackend {
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

        for (row, row_cells) in cells.chunks_mut(row_len).enumerate() {
            row_op(row, row_cells);
        }

        Ok(())
    }
}
