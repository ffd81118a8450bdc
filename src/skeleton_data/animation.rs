use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::shared_types::{default_one, default_one_frame, default_name, default_no_easing, default_true, easing_or_nan, ColorTransform};
use super::actions::{ActionType, RawActionData};

/// Animations exported with binary payloads carry an `offset` table instead of
/// timelines; only their name is kept.
#[derive(Clone, Debug)]
pub enum RawAnimation {
    Json(RawAnimationData),
    Binary { name: String },
}

impl<'de> Deserialize<'de> for RawAnimation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let value: Value = Deserialize::deserialize(deserializer)?;
        let is_binary = match &value {
            Value::Object(fields) => Ok(fields.contains_key("offset")),
            _ => Err(serde::de::Error::custom("Unexpected JSON field type! Object expected"))
        }?;

        if is_binary {
            let name = match value.get("name") {
                None => default_name(),
                Some(Value::String(s)) => s.clone(),
                _ => return Err(serde::de::Error::custom("Unexpected JSON field type! String expected"))
            };
            return Ok(RawAnimation::Binary { name });
        }

        serde_json::from_value(value)
            .map(RawAnimation::Json)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawAnimationData {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(rename = "frame")]
    #[serde(default)]
    pub general_timeline: Vec<RawGeneralFrame>,
    #[serde(rename = "zOrder")]
    #[serde(default)]
    pub z_order_timeline: Option<RawZOrderTimeline>,
    #[serde(rename = "bone")]
    #[serde(default)]
    pub bone_timelines: Vec<RawBoneTimeline>,
    #[serde(rename = "slot")]
    #[serde(default)]
    pub slot_timelines: Vec<RawSlotTimeline>,
    #[serde(rename = "ffd")]
    #[serde(default)]
    pub ffd_timelines: Vec<RawFfdTimeline>,
    #[serde(rename = "ik")]
    #[serde(default)]
    pub ik_timelines: Vec<RawIkTimeline>,
}

/// Shared by every frame that interpolates into its successor.
pub trait TweenFrame {
    fn curve(&self) -> &[f64];
    /// NaN when the frame holds its value until the next one.
    fn tween_easing(&self) -> f64;
}

macro_rules! impl_tween_frame {
    ($($frame:ty),*) => {
        $(
            impl TweenFrame for $frame {
                fn curve(&self) -> &[f64] { &self.curve }
                fn tween_easing(&self) -> f64 { self.tween_easing }
            }
        )*
    };
}

impl_tween_frame!(
    RawTranslationFrame,
    RawRotationFrame,
    RawScaleFrame,
    RawColorFrame,
    RawFfdFrame,
    RawIkFrame
);

#[derive(Clone, Deserialize, Debug)]
pub struct RawTranslationFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawRotationFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    #[serde(default)]
    pub rotate: f64,
    #[serde(default)]
    pub skew: f64,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawScaleFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    #[serde(default = "default_one")]
    pub x: f64,
    #[serde(default = "default_one")]
    pub y: f64,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawGeneralFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub events: Vec<RawActionData>,
    #[serde(default)]
    pub actions: Vec<RawActionData>,
}

impl RawGeneralFrame {
    /// Every action fired by this frame, legacy single-name keys first.
    pub fn resolved_actions(&self) -> Vec<RawActionData> {
        let mut resolved = Vec::with_capacity(self.events.len() + self.actions.len() + 3);
        if let Some(name) = &self.event {
            resolved.push(RawActionData::named(ActionType::Frame, name));
        }
        if let Some(name) = &self.sound {
            resolved.push(RawActionData::named(ActionType::Sound, name));
        }
        if let Some(name) = &self.action {
            resolved.push(RawActionData::named(ActionType::Play, name));
        }
        for event in self.events.iter() {
            resolved.push(RawActionData { action_type: ActionType::Frame, ..event.clone() });
        }
        resolved.extend(self.actions.iter().cloned());
        resolved
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct RawZOrderTimeline {
    #[serde(rename = "frame")]
    #[serde(default)]
    pub frames: Vec<RawZOrderFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawZOrderFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    /// Flattened `(slot index, offset)` pairs.
    #[serde(rename = "zOrder")]
    #[serde(default)]
    pub z_order: Vec<i32>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawSlotTimeline {
    pub name: String,
    #[serde(rename = "displayFrame")]
    #[serde(default)]
    pub display_frames: Vec<RawDisplayFrame>,
    #[serde(rename = "colorFrame")]
    #[serde(default)]
    pub colors: Vec<RawColorFrame>
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawDisplayFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub value: i32
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawColorFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    #[serde(rename = "value")]
    #[serde(default)]
    pub color: ColorTransform
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawBoneTimeline {
    #[serde(rename = "name")]
    #[serde(default)]
    pub bone_name: String,
    #[serde(rename = "translateFrame")]
    #[serde(default)]
    pub translate_frames: Vec<RawTranslationFrame>,
    #[serde(rename = "rotateFrame")]
    #[serde(default)]
    pub rotation_frames: Vec<RawRotationFrame>,
    #[serde(rename = "scaleFrame")]
    #[serde(default)]
    pub scale_frames: Vec<RawScaleFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawFfdTimeline {
    /// Name of the deformed mesh display.
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_name")]
    pub skin: String,
    #[serde(default)]
    pub slot: String,
    #[serde(rename = "frame")]
    #[serde(default)]
    pub frames: Vec<RawFfdFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawFfdFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    /// Number of leading vertex components the deltas skip.
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub vertices: Vec<f64>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawIkTimeline {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "frame")]
    #[serde(default)]
    pub frames: Vec<RawIkFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawIkFrame {
    #[serde(default = "default_one_frame")]
    pub duration: u32,
    #[serde(default)]
    pub curve: Vec<f64>,
    #[serde(rename = "tweenEasing")]
    #[serde(default = "default_no_easing", deserialize_with = "easing_or_nan")]
    pub tween_easing: f64,
    #[serde(rename = "bendPositive")]
    #[serde(default = "default_true")]
    pub bend_positive: bool,
    #[serde(default = "default_one")]
    pub weight: f64,
}
