use serde::Deserialize;
use crate::shared_types::default_one;

/// Local transform in DragonBones conventions: y grows downwards and angles
/// are clockwise degrees, with rotation expressed as the pair of skew angles.
#[derive(Copy, Clone, Deserialize, Debug, PartialEq)]
pub struct RawTransform {
    #[serde(default)]
    pub x: f64,

    #[serde(default)]
    pub y: f64,

    #[serde(default)]
    #[serde(rename = "skX")]
    pub skew_x: f64,

    #[serde(default)]
    #[serde(rename = "skY")]
    pub skew_y: f64,

    #[serde(default = "default_one")]
    #[serde(rename = "scX")]
    pub scale_x: f64,

    #[serde(default = "default_one")]
    #[serde(rename = "scY")]
    pub scale_y: f64,
}
impl Default for RawTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0
        }
    }
}
