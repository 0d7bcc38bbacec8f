//! Runtime tunables for the visual layer.
//!
//! Every field defaults to the matching value in [`crate::constants`]. Hosts
//! may override individual fields from string key/value pairs (the web
//! front-end reads them from `data-fx-*` attributes) and must call
//! [`FxConfig::validate`] before handing the config to any component.

use crate::constants::*;
use crate::error::{FxError, Result};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub particle_count: usize,
    pub connection_distance: f32,
    pub follower_damping: f64,
    pub active_offset: f64,
    pub nav_sync_offset: f64,
    pub scroll_top_threshold: f64,
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,
    pub carousel_interval_ms: u32,
    pub swipe_threshold_px: f64,
    pub stagger_spacing_ms: u32,
    pub stagger_duration_ms: u32,
    pub hero_parallax_factor: f64,
    pub hero_fade_distance: f64,
    pub title_parallax_factor: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            follower_damping: FOLLOWER_DAMPING,
            active_offset: ACTIVE_SECTION_OFFSET,
            nav_sync_offset: NAV_SYNC_OFFSET,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_frame_ms: COUNTER_FRAME_MS,
            carousel_interval_ms: CAROUSEL_INTERVAL_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            stagger_spacing_ms: STAGGER_SPACING_MS,
            stagger_duration_ms: STAGGER_DURATION_MS,
            hero_parallax_factor: HERO_PARALLAX_FACTOR,
            hero_fade_distance: HERO_FADE_DISTANCE,
            title_parallax_factor: TITLE_PARALLAX_FACTOR,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| FxError::InvalidConfig {
        key,
        value: value.to_string(),
        reason: "not a number",
    })
}

impl FxConfig {
    /// Every key accepted by [`FxConfig::set`].
    pub const KEYS: &'static [&'static str] = &[
        "particle-count",
        "connection-distance",
        "follower-damping",
        "active-offset",
        "nav-sync-offset",
        "scroll-top-threshold",
        "counter-duration-ms",
        "counter-frame-ms",
        "carousel-interval-ms",
        "swipe-threshold-px",
        "stagger-spacing-ms",
        "stagger-duration-ms",
        "hero-parallax-factor",
        "hero-fade-distance",
        "title-parallax-factor",
    ];

    /// Apply a single override. The field is left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "particle-count" => self.particle_count = parse("particle-count", value)?,
            "connection-distance" => {
                self.connection_distance = parse("connection-distance", value)?
            }
            "follower-damping" => self.follower_damping = parse("follower-damping", value)?,
            "active-offset" => self.active_offset = parse("active-offset", value)?,
            "nav-sync-offset" => self.nav_sync_offset = parse("nav-sync-offset", value)?,
            "scroll-top-threshold" => {
                self.scroll_top_threshold = parse("scroll-top-threshold", value)?
            }
            "counter-duration-ms" => {
                self.counter_duration_ms = parse("counter-duration-ms", value)?
            }
            "counter-frame-ms" => self.counter_frame_ms = parse("counter-frame-ms", value)?,
            "carousel-interval-ms" => {
                self.carousel_interval_ms = parse("carousel-interval-ms", value)?
            }
            "swipe-threshold-px" => self.swipe_threshold_px = parse("swipe-threshold-px", value)?,
            "stagger-spacing-ms" => self.stagger_spacing_ms = parse("stagger-spacing-ms", value)?,
            "stagger-duration-ms" => {
                self.stagger_duration_ms = parse("stagger-duration-ms", value)?
            }
            "hero-parallax-factor" => {
                self.hero_parallax_factor = parse("hero-parallax-factor", value)?
            }
            "hero-fade-distance" => self.hero_fade_distance = parse("hero-fade-distance", value)?,
            "title-parallax-factor" => {
                self.title_parallax_factor = parse("title-parallax-factor", value)?
            }
            other => return Err(FxError::UnknownConfigKey(other.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        fn bad(key: &'static str, value: impl ToString, reason: &'static str) -> FxError {
            FxError::InvalidConfig {
                key,
                value: value.to_string(),
                reason,
            }
        }
        if self.particle_count == 0 {
            return Err(bad("particle-count", 0, "must be at least 1"));
        }
        if !(self.connection_distance > 0.0) {
            return Err(bad(
                "connection-distance",
                self.connection_distance,
                "must be positive",
            ));
        }
        if !(self.follower_damping > 0.0 && self.follower_damping <= 1.0) {
            return Err(bad(
                "follower-damping",
                self.follower_damping,
                "must lie in (0, 1]",
            ));
        }
        if !(self.counter_duration_ms > 0.0) {
            return Err(bad(
                "counter-duration-ms",
                self.counter_duration_ms,
                "must be positive",
            ));
        }
        if !(self.counter_frame_ms > 0.0) {
            return Err(bad(
                "counter-frame-ms",
                self.counter_frame_ms,
                "must be positive",
            ));
        }
        if self.carousel_interval_ms == 0 {
            return Err(bad("carousel-interval-ms", 0, "must be positive"));
        }
        if !(self.hero_fade_distance > 0.0) {
            return Err(bad(
                "hero-fade-distance",
                self.hero_fade_distance,
                "must be positive",
            ));
        }
        for (key, v) in [
            ("active-offset", self.active_offset),
            ("nav-sync-offset", self.nav_sync_offset),
            ("scroll-top-threshold", self.scroll_top_threshold),
            ("swipe-threshold-px", self.swipe_threshold_px),
        ] {
            if !(v >= 0.0) {
                return Err(bad(key, v, "must not be negative"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(FxConfig::default().validate(), Ok(()));
    }

    #[test]
    fn every_listed_key_is_settable() {
        let mut cfg = FxConfig::default();
        for key in FxConfig::KEYS {
            assert!(cfg.set(key, "1").is_ok(), "key {key} rejected");
        }
    }

    #[test]
    fn set_rejects_garbage_and_keeps_previous_value() {
        let mut cfg = FxConfig::default();
        let err = cfg.set("particle-count", "lots").unwrap_err();
        assert!(matches!(err, FxError::InvalidConfig { key: "particle-count", .. }));
        assert_eq!(cfg.particle_count, PARTICLE_COUNT);
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut cfg = FxConfig::default();
        assert_eq!(
            cfg.set("sparkles", "3"),
            Err(FxError::UnknownConfigKey("sparkles".into()))
        );
    }

    #[test]
    fn validate_catches_out_of_range_damping() {
        let mut cfg = FxConfig::default();
        cfg.set("follower-damping", "1.5").unwrap();
        assert!(cfg.validate().is_err());
        cfg.set("follower-damping", "1").unwrap();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_catches_zero_interval() {
        let mut cfg = FxConfig::default();
        cfg.carousel_interval_ms = 0;
        assert!(cfg.validate().is_err());
    }
}
