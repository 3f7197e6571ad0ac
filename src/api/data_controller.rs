use tracing::debug;

use crate::core::Record;
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::{ChartLayout, StreamgraphEngine};

impl<R: Renderer> StreamgraphEngine<R> {
    /// Replaces the record set and rebuilds every derived structure.
    ///
    /// Records are used in the given order. Any open tooltip is dropped and
    /// the hover state returns to idle.
    pub fn set_records(&mut self, records: Vec<Record>) -> ChartResult<()> {
        let layout = ChartLayout::compute(&records, &self.config)?;
        debug!(
            count = records.len(),
            drawable = layout.is_some(),
            "set streamgraph records"
        );
        self.records = records;
        self.layout = layout;
        self.hover = HoverState::Idle;
        self.tooltip = None;
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
