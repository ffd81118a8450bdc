use serde::Deserialize;
use super::skin::{RawDisplay, RawSkinData};

fn default_armature_type() -> String { "Armature".into() }

#[derive(Clone, Deserialize, Debug)]
pub struct RawArmatureData {
    // MovieClip and Stage armatures are read but carry nothing Spine can use
    #[serde(rename = "type")]
    #[serde(default = "default_armature_type")]
    pub armature_type: String,

    /// Zero or negative means "use the document frame rate".
    #[serde(rename = "frameRate")]
    #[serde(default)]
    pub frame_rate: i32,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "aabb")]
    #[serde(default)]
    pub aa_bb: crate::shared_types::Rect,

    #[serde(rename = "bone")]
    #[serde(default)]
    pub bones: Vec<super::bone::RawBone>,

    #[serde(default)]
    pub ik: Vec<super::ik::IkInfo>,

    #[serde(rename = "slot")]
    #[serde(default)]
    pub slots: Vec<super::slot::RawSlot>,

    #[serde(rename = "skin")]
    #[serde(default)]
    pub skins: Vec<RawSkinData>,

    #[serde(rename = "animation")]
    #[serde(default)]
    pub animations: Vec<super::animation::RawAnimation>,
}

impl RawArmatureData {
    pub fn bone(&self, name: &str) -> Option<&super::bone::RawBone> {
        self.bones.iter().find(|it| it.name.eq(name))
    }

    /// The first skin resolves every slot display referenced by index.
    pub fn default_skin(&self) -> Option<&RawSkinData> {
        self.skins.first()
    }

    pub fn skin(&self, name: &str) -> Option<&RawSkinData> {
        self.skins.iter().find(|it| it.name.eq(name))
    }

    pub fn display(&self, skin_name: &str, slot_name: &str, display_name: &str) -> Option<&RawDisplay> {
        self.skin(skin_name)?
            .slot(slot_name)?
            .displays
            .iter()
            .find(|it| it.name().eq(display_name))
    }

    /// Armature rate when positive, otherwise the document rate.
    pub fn effective_frame_rate(&self, document_frame_rate: u32) -> u32 {
        if self.frame_rate > 0 {
            self.frame_rate as u32
        } else {
            document_frame_rate
        }
    }
}
