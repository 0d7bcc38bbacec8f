//! Count-up animation for statistic displays.
//!
//! Targets above 100 render as whole numbers with thousands separators and a
//! trailing `+` ("1,250+"); smaller targets render with three decimals
//! ("4.500"). The last frame always shows the exact target.

use crate::config::FxConfig;
use crate::constants::COUNTER_GROUPED_ABOVE;
use crate::error::{FxError, Result};

/// Parse a `data-count` attribute. Rejects anything that is not a finite number.
pub fn parse_target(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FxError::InvalidCounterTarget(raw.to_string())),
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render `value` using the format chosen by `target`.
pub fn format_count(value: f64, target: f64) -> String {
    if target > COUNTER_GROUPED_ABOVE {
        format!("{}+", group_thousands(value.max(0.0).floor() as u64))
    } else {
        format!("{:.3}", value)
    }
}

/// One counter on the page. `triggered` flips once and never resets.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterDescriptor {
    target: f64,
    triggered: bool,
}

impl CounterDescriptor {
    pub fn new(target: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(FxError::InvalidCounterTarget(target.to_string()));
        }
        Ok(Self {
            target,
            triggered: false,
        })
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Self::new(parse_target(raw)?)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Begin the animation. Returns `None` if it has already been started.
    pub fn start(&mut self, duration_ms: f64, frame_ms: f64) -> Option<CounterAnimation> {
        if self.triggered {
            return None;
        }
        self.triggered = true;
        log::debug!("[counter] start target={} over {}ms", self.target, duration_ms);
        Some(CounterAnimation::new(self.target, duration_ms, frame_ms))
    }

    pub fn start_with(&mut self, config: &FxConfig) -> Option<CounterAnimation> {
        self.start(config.counter_duration_ms, config.counter_frame_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Running state of a started counter.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = duration_ms / frame_ms;
        let increment = if frames.is_finite() && frames > 0.0 {
            target / frames
        } else {
            target
        };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame. After the final frame this keeps returning the target.
    pub fn step(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.increment;
            if !(self.current < self.target) || self.increment <= 0.0 {
                self.finished = true;
            }
        }
        let shown = if self.finished {
            self.target
        } else {
            self.current
        };
        CounterFrame {
            text: format_count(shown, self.target),
            finished: self.finished,
        }
    }

    /// Drive to completion, returning every rendered frame.
    pub fn run_to_end(mut self) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        loop {
            let f = self.step();
            let done = f.finished;
            frames.push(f);
            if done {
                return frames;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn format_depends_on_target_not_value() {
        assert_eq!(format_count(12.7, 250.0), "12+");
        assert_eq!(format_count(12.7, 50.0), "12.700");
        assert_eq!(format_count(100.0, 100.0), "100.000");
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert!(parse_target("abc").is_err());
        assert!(parse_target("NaN").is_err());
        assert!(parse_target("inf").is_err());
        assert_eq!(parse_target(" 42.5 ").unwrap(), 42.5);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let frames = CounterAnimation::new(0.0, 2000.0, 16.0).run_to_end();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "0.000");
    }
}
