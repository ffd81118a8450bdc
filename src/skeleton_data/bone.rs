use serde::Deserialize;
use crate::shared_types::default_true;

#[derive(Clone, Deserialize, Debug)]
pub struct RawBone {
    pub name: String,

    /// Empty for root bones.
    #[serde(default)]
    pub parent: String,

    #[serde(rename = "inheritTranslation")]
    #[serde(default = "default_true")]
    pub inherit_translation: bool,

    #[serde(rename = "inheritRotation")]
    #[serde(default = "default_true")]
    pub inherit_rotation: bool,

    #[serde(rename = "inheritScale")]
    #[serde(default = "default_true")]
    pub inherit_scale: bool,

    #[serde(rename = "inheritReflection")]
    #[serde(default = "default_true")]
    pub inherit_reflection: bool,

    #[serde(default)]
    pub length: f64,

    #[serde(default)]
    pub transform: super::transform::RawTransform
}

impl RawBone {
    pub fn parent_name(&self) -> Option<&str> {
        if self.parent.is_empty() { None } else { Some(&self.parent) }
    }
}
