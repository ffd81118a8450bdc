use thiserror::Error;

/// Structural problems in a DragonBones document that stop a conversion.
/// Unresolved optional references never end up here; they convert to an
/// absent value instead.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("unknown bone '{bone}' referenced by IK constraint '{constraint}' in armature '{armature}'")]
    UnknownIkBone {
        armature: String,
        constraint: String,
        bone: String,
    },

    #[error("draw order of animation '{animation}' in armature '{armature}' references slot index {index}, but the armature has {slot_count} slots")]
    DrawOrderSlotOutOfRange {
        armature: String,
        animation: String,
        index: i32,
        slot_count: usize,
    },

    #[error("mesh '{display}' (armature '{armature}', skin '{skin}', slot '{slot}') is weighted to bone {bone_index} but has no bind pose for it")]
    MissingBonePose {
        armature: String,
        skin: String,
        slot: String,
        display: String,
        bone_index: usize,
    },

    #[error("mesh '{display}' (armature '{armature}', skin '{skin}', slot '{slot}') has a non-invertible bind pose for bone {bone_index}")]
    SingularBonePose {
        armature: String,
        skin: String,
        slot: String,
        display: String,
        bone_index: usize,
    },

    #[error("mesh '{display}' (armature '{armature}', skin '{skin}', slot '{slot}') has fewer weight entries than vertices")]
    MalformedWeights {
        armature: String,
        skin: String,
        slot: String,
        display: String,
    },
}
