pub mod armature;
pub mod bone;
pub mod transform;
pub mod slot;
pub mod actions;
pub mod animation;
pub mod skin;
pub mod ik;

use serde::Deserialize;
use crate::atlas_data::{SubTexture, TextureAtlas};
use crate::shared_types::default_frame_rate;

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkeletonData {
    #[serde(rename = "frameRate")]
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(rename = "compatibleVersion")]
    #[serde(default)]
    pub compatible_version: String,

    #[serde(rename = "armature")]
    #[serde(default)]
    pub armatures: Vec<crate::skeleton_data::armature::RawArmatureData>,

    #[serde(rename = "textureAtlas")]
    #[serde(default)]
    pub texture_atlases: Vec<TextureAtlas>,
}

impl RawSkeletonData {
    pub fn parse(raw_bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw_bytes)
    }

    /// Attaches an atlas page loaded from a separate `_tex.json` file.
    pub fn add_texture_atlas(&mut self, atlas: TextureAtlas) {
        self.texture_atlases.push(atlas);
    }

    /// First sub-texture called `name` across every atlas page.
    pub fn find_sub_texture(&self, name: &str) -> Option<&SubTexture> {
        self.texture_atlases.iter().find_map(|atlas| atlas.sub_texture(name))
    }
}
