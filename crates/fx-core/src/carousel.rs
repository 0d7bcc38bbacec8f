//! Cyclic slide state machine with auto-advance and swipe gestures.
//!
//! The carousel owns at most one pending auto-advance timer at any time.
//! Manual transitions (indicator click, swipe) cancel it and start a fresh
//! one; timer-driven transitions leave it running.

use crate::config::FxConfig;

/// Host capability: a repeating timer.
pub trait TimerHost {
    type Handle;

    /// `None` when the host could not schedule the timer.
    fn start_interval(&mut self, interval_ms: u32) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Slide pair to deactivate/activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    Timer,
    Manual,
}

pub struct Carousel<T: TimerHost> {
    count: usize,
    index: usize,
    interval_ms: u32,
    swipe_threshold: f64,
    host: T,
    timer: Option<T::Handle>,
    touch_start: Option<f64>,
}

impl<T: TimerHost> Carousel<T> {
    /// `None` when there are no slides; the component is then skipped.
    pub fn new(count: usize, config: &FxConfig, host: T) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            count,
            index: 0,
            interval_ms: config.carousel_interval_ms,
            swipe_threshold: config.swipe_threshold_px,
            host,
            timer: None,
            touch_start: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn host(&self) -> &T {
        &self.host
    }

    /// Start auto-advance. Any existing timer is replaced.
    pub fn start(&mut self) {
        self.restart_timer();
    }

    /// Cancel auto-advance (teardown).
    pub fn stop(&mut self) {
        if let Some(h) = self.timer.take() {
            self.host.cancel(h);
        }
    }

    fn restart_timer(&mut self) {
        self.stop();
        self.timer = self.host.start_interval(self.interval_ms);
        if self.timer.is_none() {
            log::debug!("[carousel] auto-advance unavailable");
        }
    }

    fn transition(&mut self, to: usize, origin: Origin) -> SlideChange {
        let change = SlideChange {
            from: self.index,
            to,
        };
        self.index = to;
        if origin == Origin::Manual {
            self.restart_timer();
        }
        log::trace!("[carousel] {:?} {} -> {}", origin, change.from, change.to);
        change
    }

    /// Auto-advance tick from the timer.
    pub fn on_timer(&mut self) -> SlideChange {
        self.transition((self.index + 1) % self.count, Origin::Timer)
    }

    pub fn next(&mut self) -> SlideChange {
        self.transition((self.index + 1) % self.count, Origin::Manual)
    }

    pub fn previous(&mut self) -> SlideChange {
        self.transition((self.index + self.count - 1) % self.count, Origin::Manual)
    }

    /// Jump to slide `i`.
    ///
    /// # Panics
    /// If `i` is not a valid slide index.
    pub fn goto(&mut self, i: usize) -> SlideChange {
        assert!(i < self.count, "slide index {i} out of range 0..{}", self.count);
        self.transition(i, Origin::Manual)
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
    }

    /// Finish a gesture. Leftward drags past the threshold go forward,
    /// rightward ones go back; shorter drags change nothing.
    pub fn touch_end(&mut self, x: f64) -> Option<SlideChange> {
        let start = self.touch_start.take()?;
        let dx = x - start;
        if dx < -self.swipe_threshold {
            Some(self.next())
        } else if dx > self.swipe_threshold {
            Some(self.previous())
        } else {
            None
        }
    }
}

impl<T: TimerHost> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
