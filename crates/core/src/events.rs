//! Event sink - where tile move/add records go
//!
//! The board never buffers events between calls. Each mutating operation pushes
//! its records into the sink it was handed, in the order the changes happen.

use crate::types::TileEvent;

/// Receiver for tile events emitted by board operations
pub trait EventSink {
    fn record(&mut self, event: TileEvent);
}

/// Ordered buffer; the usual sink for hosts and tests.
impl EventSink for Vec<TileEvent> {
    fn record(&mut self, event: TileEvent) {
        self.push(event);
    }
}

/// Discards everything. Search code uses this to branch without bookkeeping.
impl EventSink for () {
    fn record(&mut self, _event: TileEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: TileEvent) {
        (**self).record(event);
    }
}
