use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::core::{BarData, BarRect, CoordinateTransform, GradientColors};
use crate::error::ChartResult;

/// Per-data-set scratch storage for laid out bar rects.
///
/// Storage is reused across frames; only the first [`BarBuffer::filled`]
/// rects belong to the most recent preparation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarBuffer {
    pub(crate) rects: Vec<BarRect>,
    pub(crate) stack_top_indices: IndexSet<usize>,
    pub(crate) stack_bottom_indices: IndexSet<usize>,
    pub(crate) gradient_colors: Vec<GradientColors>,
    pub(crate) filled: usize,
}

impl BarBuffer {
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            rects: vec![BarRect::default(); size],
            ..Self::default()
        }
    }

    /// Capacity in rects (`entry_count * stack_size` for stacked sets).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Rects populated by the last preparation.
    #[must_use]
    pub fn rects(&self) -> &[BarRect] {
        &self.rects[..self.filled]
    }

    #[must_use]
    pub fn rect(&self, index: usize) -> Option<BarRect> {
        self.rects().get(index).copied()
    }

    #[must_use]
    pub fn storage_ptr(&self) -> *const BarRect {
        self.rects.as_ptr()
    }

    #[must_use]
    pub fn stack_top_indices(&self) -> &IndexSet<usize> {
        &self.stack_top_indices
    }

    #[must_use]
    pub fn stack_bottom_indices(&self) -> &IndexSet<usize> {
        &self.stack_bottom_indices
    }

    #[must_use]
    pub fn is_stack_top(&self, index: usize) -> bool {
        self.stack_top_indices.contains(&index)
    }

    #[must_use]
    pub fn is_stack_bottom(&self, index: usize) -> bool {
        self.stack_bottom_indices.contains(&index)
    }

    #[must_use]
    pub fn gradient_colors(&self, index: usize) -> Option<&GradientColors> {
        self.gradient_colors.get(index)
    }

    fn resize(&mut self, size: usize) {
        self.rects.clear();
        self.rects.resize(size, BarRect::default());
        self.filled = 0;
    }

    pub(crate) fn clear_layout(&mut self) {
        self.stack_top_indices.clear();
        self.stack_bottom_indices.clear();
        self.gradient_colors.clear();
        self.filled = 0;
    }

    /// Maps the populated rects from value space into pixel space in place.
    pub fn transform_to_pixels(&mut self, transformer: &dyn CoordinateTransform) {
        transformer.rects_value_to_pixel(&mut self.rects[..self.filled]);
    }
}

/// Buffers indexed by data set position, owned by one renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarBufferSet {
    buffers: Vec<BarBuffer>,
}

impl BarBufferSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BarBuffer> {
        self.buffers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BarBuffer> {
        self.buffers.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarBuffer> {
        self.buffers.iter()
    }

    /// Matches buffer count and sizes to `data`.
    ///
    /// Buffers whose size already matches are left untouched, so repeated
    /// calls with unchanged data never reallocate. `None` drops every buffer.
    pub fn init_buffers(&mut self, data: Option<&BarData>) -> ChartResult<()> {
        let Some(data) = data else {
            self.buffers.clear();
            return Ok(());
        };

        let sets = data.bar_data_sets().inspect_err(|err| {
            warn!(error = %err, "rejecting bar data during buffer sizing");
        })?;

        if self.buffers.len() != sets.len() {
            debug!(
                from = self.buffers.len(),
                to = sets.len(),
                "resize bar buffer list"
            );
            self.buffers.resize_with(sets.len(), BarBuffer::default);
        }

        for (index, (buffer, set)) in self.buffers.iter_mut().zip(sets).enumerate() {
            let size = set.buffer_size();
            if buffer.len() != size {
                debug!(index, from = buffer.len(), to = size, "resize bar buffer");
                buffer.resize(size);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BarBufferSet;
    use crate::core::{BarChartDataSet, BarData, BarEntry};

    fn data(counts: &[usize]) -> BarData {
        BarData::from_bar_sets(
            counts
                .iter()
                .map(|count| {
                    let entries = (0..*count)
                        .map(|i| BarEntry::new(i as f64, 1.0).expect("entry"))
                        .collect();
                    BarChartDataSet::new("set", entries)
                })
                .collect(),
        )
    }

    #[test]
    fn shrinks_and_grows_buffer_list() {
        let mut buffers = BarBufferSet::new();
        buffers.init_buffers(Some(&data(&[2, 3, 4]))).expect("init");
        assert_eq!(buffers.len(), 3);
        assert_eq!(buffers.get(2).expect("buffer").len(), 4);

        buffers.init_buffers(Some(&data(&[5]))).expect("init");
        assert_eq!(buffers.len(), 1);
        assert_eq!(buffers.get(0).expect("buffer").len(), 5);
    }

    #[test]
    fn missing_data_drops_all_buffers() {
        let mut buffers = BarBufferSet::new();
        buffers.init_buffers(Some(&data(&[1, 1]))).expect("init");
        buffers.init_buffers(None).expect("init");
        assert!(buffers.is_empty());
    }

    #[test]
    fn unchanged_data_keeps_storage() {
        let data = data(&[3, 6]);
        let mut buffers = BarBufferSet::new();
        buffers.init_buffers(Some(&data)).expect("init");
        let before: Vec<_> = buffers.iter().map(|b| b.storage_ptr()).collect();
        buffers.init_buffers(Some(&data)).expect("init");
        let after: Vec<_> = buffers.iter().map(|b| b.storage_ptr()).collect();
        assert_eq!(before, after);
    }
}
