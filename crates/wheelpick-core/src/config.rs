use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::geometry::Geometry;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Tick rate in milliseconds while nothing is moving
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Which input paths the picker accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Drag gestures and wheel input. A new drag interrupts a running settle.
    #[default]
    DragAndWheel,
    /// Wheel input only; drags are refused.
    WheelOnly,
}

/// Item geometry and initial placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Extent of a single row, in scroll units
    #[serde(default = "default_item_extent")]
    pub item_extent: f64,
    /// Rows rendered above (and below) the centered row
    #[serde(default = "default_visible_half_count")]
    pub visible_half_count: i64,
    /// Index selected when the picker is mounted (clamped into range)
    #[serde(default)]
    pub initial_index: usize,
    #[serde(default)]
    pub input_mode: InputMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_extent: default_item_extent(),
            visible_half_count: default_visible_half_count(),
            initial_index: 0,
            input_mode: InputMode::default(),
        }
    }
}

impl PickerConfig {
    /// Validate extent and visible rows into a `Geometry`
    pub fn geometry(&self) -> crate::Result<Geometry> {
        Geometry::new(self.item_extent, self.visible_half_count)
    }
}

/// Easing curve used by settle animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    /// Quadratic ease-out
    #[default]
    Quad,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Settle animation, fling and wheel tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate settles; when false the offset jumps straight to the target
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Settle animation duration in milliseconds
    #[serde(default = "default_settle_duration")]
    pub settle_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Release speed (units/s) above which a drag counts as a fling
    #[serde(default = "default_fling_threshold")]
    pub fling_velocity_threshold: f64,
    /// Fraction of drag movement applied past the first/last item
    #[serde(default = "default_overscroll_damping")]
    pub overscroll_damping: f64,
    /// Multiplier applied to wheel deltas
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
    /// Quiet period after the last wheel delta before settling
    #[serde(default = "default_wheel_debounce")]
    pub wheel_debounce_ms: u64,
    /// Sample window used to estimate drag release velocity
    #[serde(default = "default_velocity_window")]
    pub velocity_window_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            settle_duration_ms: default_settle_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            fling_velocity_threshold: default_fling_threshold(),
            overscroll_damping: default_overscroll_damping(),
            wheel_sensitivity: default_wheel_sensitivity(),
            wheel_debounce_ms: default_wheel_debounce(),
            velocity_window_ms: default_velocity_window(),
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.fling_velocity_threshold.is_finite() || self.fling_velocity_threshold < 0.0 {
            return Err(crate::Error::Config(format!(
                "fling_velocity_threshold must be a non-negative number, got {}",
                self.fling_velocity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.overscroll_damping) {
            return Err(crate::Error::Config(format!(
                "overscroll_damping must be within [0, 1], got {}",
                self.overscroll_damping
            )));
        }
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(crate::Error::Config(format!(
                "wheel_sensitivity must be positive, got {}",
                self.wheel_sensitivity
            )));
        }
        Ok(())
    }
}

/// Per-row falloff away from the centered row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    #[serde(default = "default_max_opacity")]
    pub max_opacity: f64,
    #[serde(default = "default_min_opacity")]
    pub min_opacity: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Tilt reached at the edge of the visible window (degrees)
    #[serde(default = "default_max_tilt")]
    pub max_tilt_deg: f64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            max_opacity: default_max_opacity(),
            min_opacity: default_min_opacity(),
            max_scale: default_max_scale(),
            min_scale: default_min_scale(),
            max_tilt_deg: default_max_tilt(),
        }
    }
}

impl PresentationConfig {
    pub fn validate(&self) -> crate::Result<()> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.min_opacity) || !unit.contains(&self.max_opacity) {
            return Err(crate::Error::Config(format!(
                "opacity range must lie within [0, 1], got [{}, {}]",
                self.min_opacity, self.max_opacity
            )));
        }
        if self.min_opacity > self.max_opacity {
            return Err(crate::Error::Config(format!(
                "min_opacity {} exceeds max_opacity {}",
                self.min_opacity, self.max_opacity
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale && self.max_scale.is_finite()) {
            return Err(crate::Error::Config(format!(
                "scale range must satisfy 0 < min_scale <= max_scale, got [{}, {}]",
                self.min_scale, self.max_scale
            )));
        }
        if !self.max_tilt_deg.is_finite() {
            return Err(crate::Error::Config("max_tilt_deg must be finite".to_string()));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_item_extent() -> f64 {
    40.0
}

fn default_visible_half_count() -> i64 {
    2
}

fn default_settle_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

fn default_fling_threshold() -> f64 {
    1000.0
}

fn default_overscroll_damping() -> f64 {
    0.2
}

fn default_wheel_sensitivity() -> f64 {
    1.2
}

fn default_wheel_debounce() -> u64 {
    100
}

fn default_velocity_window() -> u64 {
    100
}

fn default_max_opacity() -> f64 {
    1.0
}

fn default_min_opacity() -> f64 {
    0.5
}

fn default_max_scale() -> f64 {
    1.1
}

fn default_min_scale() -> f64 {
    0.7
}

fn default_max_tilt() -> f64 {
    25.0
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Check every section; any failure is a configuration error
    pub fn validate(&self) -> crate::Result<()> {
        self.picker.geometry()?;
        self.scroll.validate()?;
        self.presentation.validate()?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/wheelpick/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("wheelpick")
            .join("config.toml")
    }
}
