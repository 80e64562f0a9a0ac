//! Pattern 7: Drop as a Safety Net
//!
//! Unlike a finalizer, `Drop` runs deterministically when the owner goes
//! out of scope. It still should not be the primary way to release a
//! resource when releasing can fail or must be observed: give the type an
//! explicit `close()` and let `Drop` catch the callers that forget.

use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::section;

/// Shared view of whether a building's windows are closed.
#[derive(Debug, Clone, Default)]
pub struct WindowLatch(Rc<Cell<bool>>);

impl WindowLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.0.get()
    }

    fn close(&self) {
        self.0.set(true);
    }
}

#[derive(Debug)]
pub struct Building {
    name: String,
    windows: WindowLatch,
    closed_explicitly: bool,
}

impl Building {
    pub fn new(name: impl Into<String>, windows: WindowLatch) -> Self {
        Building {
            name: name.into(),
            windows,
            closed_explicitly: false,
        }
    }

    /// Closes all windows. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.closed_explicitly {
            return;
        }
        self.windows.close();
        self.closed_explicitly = true;
        debug!(building = %self.name, "windows closed");
    }

    /// Consuming variant for callers that are done with the building.
    pub fn close_and_leave(mut self) {
        self.close();
    }
}

impl Drop for Building {
    fn drop(&mut self) {
        if !self.closed_explicitly {
            warn!(building = %self.name, "dropped without close(), closing windows");
            self.windows.close();
        }
    }
}

pub fn run_demo() {
    section("Explicit close()");
    let latch = WindowLatch::new();
    {
        let mut office = Building::new("office", latch.clone());
        office.close();
        println!("after close(): windows closed = {}", latch.is_closed());
    }

    section("Forgotten close(), Drop steps in");
    let latch = WindowLatch::new();
    {
        let _warehouse = Building::new("warehouse", latch.clone());
        println!("inside scope:  windows closed = {}", latch.is_closed());
    }
    println!("after scope:   windows closed = {}", latch.is_closed());
}
