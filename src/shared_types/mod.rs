use serde::{Deserialize, Deserializer};

#[derive(Copy, Clone, Deserialize, Default, Debug, PartialEq)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

#[derive(Copy, Clone, Deserialize, Default, Debug, PartialEq)]
pub struct Point {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Copy, Clone, Deserialize, Debug, PartialEq, Eq)]
pub enum BlendMode {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(rename = "darken")]
    Darken,
    #[serde(rename = "difference")]
    Difference,
    #[serde(rename = "erase")]
    Erase,
    #[serde(rename = "hardlight")]
    HardLight,
    #[serde(rename = "invert")]
    Invert,
    #[serde(rename = "layer")]
    Layer,
    #[serde(rename = "lighten")]
    Lighten,
    #[serde(rename = "multiply")]
    Multiply,
    #[serde(rename = "overlay")]
    Overlay,
    #[serde(rename = "screen")]
    Screen,
    #[serde(rename = "subtract")]
    Subtract
}
impl Default for BlendMode {
    fn default() -> Self {
        Self::Normal
    }
}

/// DragonBones color transform. Multipliers are percentages (0..=100),
/// offsets are raw channel shifts and are not carried over to Spine.
#[derive(Copy, Clone, Deserialize, Debug, PartialEq)]
pub struct ColorTransform {
    #[serde(rename = "aM")]
    #[serde(default = "default_100")]
    pub alpha_multiplier: f64,
    #[serde(rename = "rM")]
    #[serde(default = "default_100")]
    pub red_multiplier: f64,
    #[serde(rename = "gM")]
    #[serde(default = "default_100")]
    pub green_multiplier: f64,
    #[serde(rename = "bM")]
    #[serde(default = "default_100")]
    pub blue_multiplier: f64,
    #[serde(rename = "aO")]
    #[serde(default)]
    pub alpha_offset: f64,
    #[serde(rename = "rO")]
    #[serde(default)]
    pub red_offset: f64,
    #[serde(rename = "gO")]
    #[serde(default)]
    pub green_offset: f64,
    #[serde(rename = "bO")]
    #[serde(default)]
    pub blue_offset: f64,
}
impl Default for ColorTransform {
    fn default() -> Self {
        Self {
            alpha_multiplier: 100.0,
            red_multiplier: 100.0,
            green_multiplier: 100.0,
            blue_multiplier: 100.0,
            alpha_offset: 0.0,
            red_offset: 0.0,
            green_offset: 0.0,
            blue_offset: 0.0
        }
    }
}

pub(crate) fn default_true() -> bool { true }
pub(crate) fn default_one() -> f64 { 1.0 }
pub(crate) fn default_one_frame() -> u32 { 1 }
pub(crate) fn default_no_easing() -> f64 { f64::NAN }
pub(crate) fn default_100() -> f64 { 100.0 }
pub(crate) fn default_name() -> String { "default".into() }
pub(crate) fn default_frame_rate() -> u32 { 24 }

/// `tweenEasing` is either a number or `null`; both absent and `null` mean
/// "no tween" and become NaN.
pub(crate) fn easing_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error> where D: Deserializer<'de> {
    let value: Option<f64> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or(f64::NAN))
}
