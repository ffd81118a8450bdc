//! DragonBones to Spine transcoding.

pub mod animation;
pub mod armature;
pub mod atlas;
pub mod clock;
pub mod curve;
pub mod geometry;
pub mod number;
pub mod skin;

use log::debug;
use crate::error::ConvertError;
use crate::skeleton_data::RawSkeletonData;
use crate::spine_data::Spine;

pub const DEFAULT_SPINE_VERSION: &str = "3.8.75";

#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Written to `skeleton.spine` of every output document.
    pub version: String,
    /// Appends `_spine` to the atlas page image names.
    pub texture_atlas_suffix: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_SPINE_VERSION.to_string(),
            texture_atlas_suffix: false,
        }
    }
}

/// One Spine document per armature, in armature order, plus the `.atlas`
/// text shared by all of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversion {
    pub spines: Vec<Spine>,
    pub texture_atlas: String,
}

pub fn convert(document: &RawSkeletonData, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    debug!(
        "converting '{}' ({} armatures, {} atlas pages) to Spine {}",
        document.name,
        document.armatures.len(),
        document.texture_atlases.len(),
        options.version
    );
    let spines = document.armatures.iter()
        .map(|armature| armature::convert_armature(document, armature, &options.version))
        .collect::<Result<Vec<_>, _>>()?;
    let texture_atlas = atlas::texture_atlas_text(document, options.texture_atlas_suffix);
    Ok(Conversion { spines, texture_atlas })
}
