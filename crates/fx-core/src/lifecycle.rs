use std::cell::Cell;
use std::rc::Rc;

/// Returned by a per-frame callback to decide whether another frame is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared cancellation flag for a self-rescheduling loop.
///
/// Clones observe the same flag. Once stopped a handle never restarts; the
/// loop checks it before every re-schedule.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn control(&self) -> LoopControl {
        if self.is_stopped() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}
