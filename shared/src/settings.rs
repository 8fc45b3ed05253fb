use serde::{Deserialize, Serialize};

/// Every tunable of the page enhancements.
///
/// The defaults reproduce the stock page; a page may override any subset of fields with a JSON object,
/// missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Canvas area, in square pixels, that accounts for a single particle.
    pub particle_density: f64,
    /// Smallest particle radius.
    pub particle_radius_min: f64,
    /// Exclusive upper bound of the particle radius.
    pub particle_radius_max: f64,
    /// Exclusive upper bound of the absolute velocity along each axis, in pixels per frame.
    pub particle_speed: f64,
    /// Fill style of every particle.
    pub particle_fill: String,
    /// Fraction of an element that must intersect the viewport before it is revealed.
    pub reveal_threshold: f64,
    /// Perspective distance of the tilt transform, in pixels.
    pub tilt_perspective: f64,
    /// Degrees of X-axis rotation per unit of vertical pointer offset.
    pub tilt_scale_x: f64,
    /// Degrees of Y-axis rotation per unit of horizontal pointer offset.
    pub tilt_scale_y: f64,
    /// CSS custom property carrying the page background.
    pub background_variable: String,
    /// Background of the dark theme.
    pub dark_background: String,
    /// Background of the light theme.
    pub light_background: String,
    /// Storage key of the registrations blob.
    pub registrations_key: String,
    /// Storage key of the theme flag.
    pub theme_key: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            particle_density: 90_000.0,
            particle_radius_min: 0.6,
            particle_radius_max: 2.2,
            particle_speed: 0.25,
            particle_fill: "rgba(255,255,255,0.06)".to_string(),
            reveal_threshold: 0.12,
            tilt_perspective: 600.0,
            tilt_scale_x: 6.0,
            tilt_scale_y: 8.0,
            background_variable: "--bg".to_string(),
            dark_background: "#071226".to_string(),
            light_background: "#f7fbff".to_string(),
            registrations_key: "registrations".to_string(),
            theme_key: "dark".to_string(),
        }
    }
}

impl PageSettings {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<PageSettings, serde_json::Error> {
        serde_json::from_str(json)
    }
}
