use std::time::Duration;

use crate::error::MirrorError;

/// Host-tunable knobs of a [`SceneMirror`](crate::SceneMirror).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorSettings {
    /// DOM pixels that make up one scene unit (one meter).
    pub dom_pixels_per_unit: f32,
    /// Gates clipping-plane setup for `overflow: hidden` containers.
    pub clipping_enabled: bool,
    /// Polling rate while a CSS animation or transition runs.
    pub requested_fps: u32,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            dom_pixels_per_unit: 25.0,
            clipping_enabled: true,
            requested_fps: 30,
        }
    }
}

impl MirrorSettings {
    pub fn with_dom_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.dom_pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_clipping(mut self, enabled: bool) -> Self {
        self.clipping_enabled = enabled;
        self
    }

    pub fn with_requested_fps(mut self, fps: u32) -> Self {
        self.requested_fps = fps;
        self
    }

    pub fn validate(&self) -> Result<(), MirrorError> {
        if !self.dom_pixels_per_unit.is_finite() || self.dom_pixels_per_unit <= 0.0 {
            return Err(MirrorError::InvalidSettings(format!(
                "dom_pixels_per_unit must be a positive number, got {}",
                self.dom_pixels_per_unit
            )));
        }
        if self.requested_fps == 0 {
            return Err(MirrorError::InvalidSettings(
                "requested_fps must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.requested_fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MirrorSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_scale_and_zero_fps() {
        assert!(
            MirrorSettings::default()
                .with_dom_pixels_per_unit(0.0)
                .validate()
                .is_err()
        );
        assert!(
            MirrorSettings::default()
                .with_dom_pixels_per_unit(f32::NAN)
                .validate()
                .is_err()
        );
        assert!(MirrorSettings::default().with_requested_fps(0).validate().is_err());
    }

    #[test]
    fn frame_interval_follows_fps() {
        let settings = MirrorSettings::default().with_requested_fps(50);
        assert_eq!(settings.frame_interval(), Duration::from_millis(20));
    }
}
