pub mod attachment;
pub mod animation;

use indexmap::IndexMap;
use serde::Serialize;

pub use attachment::*;
pub use animation::*;

fn is_true(value: &bool) -> bool { *value }

/// One Spine skeleton document.
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Spine {
    pub skeleton: SkeletonHeader,
    pub bones: Vec<Bone>,
    pub slots: Vec<Slot>,
    pub ik: Vec<IkConstraint>,
    pub skins: Vec<Skin>,
    pub events: IndexMap<String, Event>,
    pub animations: IndexMap<String, Animation>,
}

impl Spine {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn skin(&self, name: &str) -> Option<&Skin> {
        self.skins.iter().find(|it| it.name.eq(name))
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct SkeletonHeader {
    pub hash: String,
    pub spine: String,
    pub width: f64,
    pub height: f64,
    pub fps: u32,
    pub name: String,
}

#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransformMode {
    Normal,
    NoScale,
    NoRotationOrReflection,
    OnlyTranslation,
}
impl Default for TransformMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl TransformMode {
    pub fn from_inherit(inherit_rotation: bool, inherit_scale: bool) -> Self {
        match (inherit_rotation, inherit_scale) {
            (true, true) => TransformMode::Normal,
            (true, false) => TransformMode::NoScale,
            (false, true) => TransformMode::NoRotationOrReflection,
            (false, false) => TransformMode::OnlyTranslation,
        }
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub length: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub shear_x: f64,
    pub shear_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    #[serde(skip_serializing_if = "is_true")]
    pub inherit_rotation: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub inherit_scale: bool,
    pub transform: TransformMode,
}

#[derive(Copy, Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    Normal,
    Additive,
    Multiply,
    Screen,
}
impl Default for BlendMode {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Slot {
    pub name: String,
    pub bone: String,
    /// `RRGGBBAA`, upper case.
    pub color: String,
    pub blend: BlendMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IkConstraint {
    pub name: String,
    pub bones: Vec<String>,
    pub target: String,
    pub mix: f64,
    /// Spine reads a missing key as `true`.
    #[serde(skip_serializing_if = "is_true")]
    pub bend_positive: bool,
}

/// Document-level event defaults; frames override them.
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

/// slot name -> attachment name -> attachment
pub type SkinAttachments = IndexMap<String, IndexMap<String, Attachment>>;

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct Skin {
    pub name: String,
    pub attachments: SkinAttachments,
}

impl Skin {
    pub fn attachment(&self, slot_name: &str, attachment_name: &str) -> Option<&Attachment> {
        self.attachments.get(slot_name)?.get(attachment_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_flags_select_exactly_one_transform_mode() {
        assert_eq!(TransformMode::from_inherit(true, true), TransformMode::Normal);
        assert_eq!(TransformMode::from_inherit(true, false), TransformMode::NoScale);
        assert_eq!(TransformMode::from_inherit(false, true), TransformMode::NoRotationOrReflection);
        assert_eq!(TransformMode::from_inherit(false, false), TransformMode::OnlyTranslation);
    }

    #[test]
    fn enums_serialize_with_spine_names() {
        assert_eq!(serde_json::to_string(&TransformMode::NoRotationOrReflection).unwrap(), "\"noRotationOrReflection\"");
        assert_eq!(serde_json::to_string(&BlendMode::Additive).unwrap(), "\"additive\"");
    }

    #[test]
    fn ik_constraint_writes_bend_direction_unless_positive() {
        let constraint = IkConstraint {
            name: "leg".into(),
            bones: vec!["thigh".into(), "calf".into()],
            target: "foot".into(),
            mix: 1.0,
            bend_positive: false,
        };
        let json = serde_json::to_value(&constraint).unwrap();
        assert_eq!(json["bendPositive"], false);

        let json = serde_json::to_value(&IkConstraint { bend_positive: true, ..constraint }).unwrap();
        assert!(json.get("bendPositive").is_none());
    }

    #[test]
    fn bone_omits_default_keys() {
        let bone = Bone {
            name: "root".into(),
            scale_x: 1.0,
            scale_y: 1.0,
            inherit_rotation: true,
            inherit_scale: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&bone).unwrap();
        assert!(json.get("parent").is_none());
        assert!(json.get("inheritRotation").is_none());
        assert_eq!(json["shearY"], 0.0);
        assert_eq!(json["transform"], "normal");
    }
}
