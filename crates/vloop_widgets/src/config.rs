//! Looping view configuration

use vloop_animation::Easing;
use vloop_core::clock::Millis;

use crate::error::{ConfigError, Result};

/// Timing and spacing for a [`LoopingView`](crate::looping::LoopingView)
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoopConfig {
    /// Duration of one upward slide
    pub animation_duration_ms: Millis,
    /// Pause between the end of one slide and the start of the next
    pub delay_ms: Millis,
    /// Height of the top and bottom fading edges, in pixels
    pub fade_length: i32,
    /// Gap above and below the visible item, in pixels
    pub spacing: i32,
    /// Inset on the left and right of both slots, in pixels
    pub horizontal_spacing: i32,
    /// Curve applied to the slide
    pub easing: Easing,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 500,
            delay_ms: 1000,
            fade_length: 20,
            spacing: 8,
            horizontal_spacing: 0,
            easing: Easing::AccelerateDecelerate,
        }
    }
}

impl LoopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide duration
    pub fn animation_duration_ms(mut self, ms: Millis) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Set the pause between slides
    pub fn delay_ms(mut self, ms: Millis) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the fading edge length
    pub fn fade_length(mut self, px: i32) -> Self {
        self.fade_length = px;
        self
    }

    /// Set the vertical spacing
    pub fn spacing(mut self, px: i32) -> Self {
        self.spacing = px;
        self
    }

    /// Set the horizontal inset
    pub fn horizontal_spacing(mut self, px: i32) -> Self {
        self.horizontal_spacing = px;
        self
    }

    /// Set the slide easing
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Check the values a view cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        for (field, value) in [
            ("fade_length", self.fade_length),
            ("spacing", self.spacing),
            ("horizontal_spacing", self.horizontal_spacing),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadence() {
        let config = LoopConfig::default();
        assert_eq!(config.animation_duration_ms, 500);
        assert_eq!(config.delay_ms, 1000);
        assert_eq!(config.fade_length, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LoopConfig::new()
            .animation_duration_ms(300)
            .delay_ms(2000)
            .spacing(4)
            .easing(Easing::Linear);

        assert_eq!(config.animation_duration_ms, 300);
        assert_eq!(config.delay_ms, 2000);
        assert_eq!(config.spacing, 4);
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = LoopConfig::new().animation_duration_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroAnimationDuration));
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let config = LoopConfig::new().spacing(-1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "spacing",
                value: -1
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LoopConfig = toml::from_str("delay_ms = 250\neasing = \"linear\"").unwrap();
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.animation_duration_ms, 500);
    }
}
