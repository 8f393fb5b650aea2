use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "ViewerConfig::default_background_color")]
    pub background_color: String,
    #[serde(default = "ViewerConfig::default_animation_speed")]
    pub animation_speed: f32,
    #[serde(default = "ViewerConfig::default_drag_speed_multiplier")]
    pub drag_speed_multiplier: f32,
    #[serde(default = "ViewerConfig::default_max_custom_kept")]
    pub max_custom_kept: usize,
    #[serde(default = "ViewerConfig::default_zoom_min")]
    pub camera_zoom_min: f32,
    #[serde(default = "ViewerConfig::default_zoom_max")]
    pub camera_zoom_max: f32,
}

impl ViewerConfig {
    fn default_background_color() -> String {
        "#1f2937".to_string()
    }

    const fn default_animation_speed() -> f32 {
        1.0
    }

    const fn default_drag_speed_multiplier() -> f32 {
        1.5
    }

    const fn default_max_custom_kept() -> usize {
        3
    }

    const fn default_zoom_min() -> f32 {
        0.25
    }

    const fn default_zoom_max() -> f32 {
        5.0
    }

    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.camera_zoom_min, self.camera_zoom_max)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[config] load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            background_color: Self::default_background_color(),
            animation_speed: Self::default_animation_speed(),
            drag_speed_multiplier: Self::default_drag_speed_multiplier(),
            max_custom_kept: Self::default_max_custom_kept(),
            camera_zoom_min: Self::default_zoom_min(),
            camera_zoom_max: Self::default_zoom_max(),
        }
    }
}
