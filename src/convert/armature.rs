use indexmap::IndexMap;
use log::{debug, warn};
use crate::error::ConvertError;
use crate::shared_types;
use crate::skeleton_data::RawSkeletonData;
use crate::skeleton_data::animation::RawAnimation;
use crate::skeleton_data::armature::RawArmatureData;
use crate::skeleton_data::bone::RawBone;
use crate::skeleton_data::ik::IkInfo;
use crate::skeleton_data::skin::RawSkinData;
use crate::skeleton_data::slot::RawSlot;
use crate::spine_data::{BlendMode, Bone, Event, IkConstraint, SkeletonHeader, Slot, Spine, TransformMode};
use super::number::color_to_hex;

/// Everything a single armature conversion reads from.
pub struct ArmatureContext<'a> {
    pub document: &'a RawSkeletonData,
    pub armature: &'a RawArmatureData,
    pub frame_rate: u32,
}

impl<'a> ArmatureContext<'a> {
    pub fn new(document: &'a RawSkeletonData, armature: &'a RawArmatureData) -> Self {
        Self {
            document,
            armature,
            frame_rate: armature.effective_frame_rate(document.frame_rate),
        }
    }

    pub fn default_skin(&self) -> Option<&'a RawSkinData> {
        self.armature.default_skin()
    }

    /// Name of the display a slot shows at `display_index`, looked up in the
    /// default skin.
    pub fn display_name(&self, slot_name: &str, display_index: i32) -> Option<String> {
        self.default_skin()?
            .slot(slot_name)?
            .display_at(display_index)
            .map(|display| display.name().to_string())
    }
}

pub fn convert_armature(
    document: &RawSkeletonData,
    armature: &RawArmatureData,
    version: &str,
) -> Result<Spine, ConvertError> {
    let context = ArmatureContext::new(document, armature);
    debug!("converting armature '{}' at {} fps", armature.name, context.frame_rate);

    let mut spine = Spine {
        skeleton: SkeletonHeader {
            hash: " ".to_string(),
            spine: version.to_string(),
            width: armature.aa_bb.width,
            height: armature.aa_bb.height,
            fps: context.frame_rate,
            name: armature.name.clone(),
        },
        ..Default::default()
    };

    spine.bones = armature.bones.iter().map(convert_bone).collect();
    spine.slots = armature.slots.iter().map(|slot| convert_slot(&context, slot)).collect();
    spine.ik = armature.ik.iter()
        .map(|ik| convert_ik(armature, ik))
        .collect::<Result<_, _>>()?;
    spine.skins = armature.skins.iter()
        .map(|skin| super::skin::convert_skin(&context, skin))
        .collect::<Result<_, _>>()?;

    let mut events: IndexMap<String, Event> = IndexMap::new();
    for animation in armature.animations.iter() {
        match animation {
            RawAnimation::Binary { name } => {
                debug!("skipping binary animation '{}' of armature '{}'", name, armature.name);
            }
            RawAnimation::Json(data) => {
                let converted = super::animation::convert_animation(&context, data, &mut events)?;
                spine.animations.insert(data.name.clone(), converted);
            }
        }
    }
    spine.events = events;

    Ok(spine)
}

pub fn convert_bone(bone: &RawBone) -> Bone {
    let transform = &bone.transform;
    Bone {
        name: bone.name.clone(),
        parent: bone.parent_name().map(str::to_string),
        length: bone.length,
        x: transform.x,
        y: -transform.y,
        rotation: -transform.skew_y,
        shear_x: 0.0,
        shear_y: -(transform.skew_x - transform.skew_y),
        scale_x: transform.scale_x,
        scale_y: transform.scale_y,
        inherit_rotation: bone.inherit_rotation,
        inherit_scale: bone.inherit_scale,
        transform: TransformMode::from_inherit(bone.inherit_rotation, bone.inherit_scale),
    }
}

fn convert_blend_mode(slot: &RawSlot) -> BlendMode {
    match slot.blend_mode {
        shared_types::BlendMode::Normal => BlendMode::Normal,
        shared_types::BlendMode::Add => BlendMode::Additive,
        shared_types::BlendMode::Multiply => BlendMode::Multiply,
        shared_types::BlendMode::Screen => BlendMode::Screen,
        other => {
            warn!("slot '{}' uses blend mode {:?} which Spine has no equivalent for, using normal", slot.name, other);
            BlendMode::Normal
        }
    }
}

pub fn convert_slot(context: &ArmatureContext, slot: &RawSlot) -> Slot {
    Slot {
        name: slot.name.clone(),
        bone: slot.parent.clone(),
        color: color_to_hex(&slot.color_transform),
        blend: convert_blend_mode(slot),
        attachment: context.display_name(&slot.name, slot.display_id),
    }
}

pub fn convert_ik(armature: &RawArmatureData, ik: &IkInfo) -> Result<IkConstraint, ConvertError> {
    let mut bones = Vec::with_capacity(2);
    if ik.chain_length > 0 {
        let bone = armature.bone(&ik.bone).ok_or_else(|| ConvertError::UnknownIkBone {
            armature: armature.name.clone(),
            constraint: ik.name.clone(),
            bone: ik.bone.clone(),
        })?;
        // Two bone chains start at the parent of the constrained bone
        match bone.parent_name() {
            Some(parent) => bones.push(parent.to_string()),
            None => warn!("IK constraint '{}' chains root bone '{}', keeping a single bone chain", ik.name, ik.bone),
        }
    }
    bones.push(ik.bone.clone());

    Ok(IkConstraint {
        name: ik.name.clone(),
        bones,
        target: ik.target.clone(),
        mix: ik.weight,
        bend_positive: !ik.bend_positive,
    })
}
