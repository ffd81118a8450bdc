use std::convert::TryFrom;
use indexmap::IndexMap;
use log::warn;
use crate::error::ConvertError;
use crate::skeleton_data::actions::{ActionType, RawActionData};
use crate::skeleton_data::animation::{
    RawAnimationData, RawBoneTimeline, RawFfdTimeline, RawIkTimeline, RawSlotTimeline, RawZOrderTimeline,
};
use crate::skeleton_data::skin::RawDisplay;
use crate::spine_data::{
    Animation, AttachmentFrame, BoneTimelines, ColorFrame, DeformFrame, DrawOrderFrame, DrawOrderOffset, Event,
    EventFrame, IkFrame, RotateFrame, ScaleFrame, ShearFrame, SlotTimelines, TranslateFrame,
};
use super::armature::ArmatureContext;
use super::clock::FrameClock;
use super::curve::map_curve;
use super::number::color_to_hex;

const SOUND_EVENT: &str = "soundEvent";
const PLAY_EVENT: &str = "playEvent";

/// Converts one animation. `events` collects the event definitions of the
/// whole skeleton; the first occurrence of a name defines its defaults.
pub fn convert_animation(
    context: &ArmatureContext,
    animation: &RawAnimationData,
    events: &mut IndexMap<String, Event>,
) -> Result<Animation, ConvertError> {
    let mut converted = Animation::default();

    converted.events = convert_events(context, animation, events);
    if let Some(z_order) = &animation.z_order_timeline {
        converted.draw_order = convert_draw_order(context, &animation.name, z_order)?;
    }
    for timeline in animation.bone_timelines.iter() {
        converted.bones.insert(timeline.bone_name.clone(), convert_bone_timeline(context, timeline));
    }
    for timeline in animation.slot_timelines.iter() {
        converted.slots.insert(timeline.name.clone(), convert_slot_timeline(context, timeline));
    }
    for timeline in animation.ffd_timelines.iter() {
        if let Some(frames) = convert_deform_timeline(context, timeline) {
            converted.deform
                .entry(timeline.skin.clone())
                .or_default()
                .entry(timeline.slot.clone())
                .or_default()
                .insert(timeline.name.clone(), frames);
        }
    }
    for timeline in animation.ik_timelines.iter() {
        converted.ik.insert(timeline.name.clone(), convert_ik_timeline(context, timeline));
    }

    Ok(converted)
}

/// Event name and string payload of an action.
fn event_identity(action: &RawActionData) -> (&str, &str) {
    match action.action_type {
        ActionType::Frame => (action.name.as_str(), action.bone_name.as_str()),
        ActionType::Sound => (SOUND_EVENT, action.name.as_str()),
        ActionType::Play => (PLAY_EVENT, action.name.as_str()),
    }
}

fn convert_events(
    context: &ArmatureContext,
    animation: &RawAnimationData,
    events: &mut IndexMap<String, Event>,
) -> Vec<EventFrame> {
    let mut clock = FrameClock::new(context.frame_rate);
    let mut frames = Vec::new();
    for frame in animation.general_timeline.iter() {
        let time = clock.tick(frame.duration);
        for action in frame.resolved_actions() {
            let (name, payload) = event_identity(&action);
            let string = action.user_strings.first()
                .map(String::as_str)
                .or_else(|| Some(payload).filter(|it| !it.is_empty()))
                .map(str::to_string);
            let int = action.user_ints.first().copied();
            let float = action.user_floats.first().copied();

            let mut event_frame = EventFrame {
                time,
                name: name.to_string(),
                ..Default::default()
            };
            if events.contains_key(name) {
                event_frame.int = int;
                event_frame.float = float;
                event_frame.string = string;
            } else {
                events.insert(name.to_string(), Event { int, float, string });
            }
            frames.push(event_frame);
        }
    }
    frames
}

fn convert_draw_order(
    context: &ArmatureContext,
    animation_name: &str,
    timeline: &RawZOrderTimeline,
) -> Result<Vec<DrawOrderFrame>, ConvertError> {
    let slots = &context.armature.slots;
    let mut clock = FrameClock::new(context.frame_rate);
    let mut frames = Vec::with_capacity(timeline.frames.len());
    for frame in timeline.frames.iter() {
        let time = clock.tick(frame.duration);
        let offsets = frame.z_order
            .chunks_exact(2)
            .map(|pair| -> Result<DrawOrderOffset, ConvertError> {
                let slot = usize::try_from(pair[0]).ok()
                    .and_then(|index| slots.get(index))
                    .ok_or_else(|| ConvertError::DrawOrderSlotOutOfRange {
                        armature: context.armature.name.clone(),
                        animation: animation_name.to_string(),
                        index: pair[0],
                        slot_count: slots.len(),
                    })?;
                Ok(DrawOrderOffset { slot: slot.name.clone(), offset: pair[1] })
            })
            .collect::<Result<Vec<_>, _>>()?;
        frames.push(DrawOrderFrame { time, offsets });
    }
    Ok(frames)
}

/// Picks the representation of `angle` closest to `previous`, so that
/// interpolation never spins the long way around.
pub fn unwrap_angle(previous: f64, angle: f64) -> f64 {
    let difference = (angle - previous % 360.0 + 540.0) % 360.0 - 180.0;
    previous + difference
}

fn convert_bone_timeline(context: &ArmatureContext, timeline: &RawBoneTimeline) -> BoneTimelines {
    let mut converted = BoneTimelines::default();

    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.translate_frames.len().saturating_sub(1);
    for (index, frame) in timeline.translate_frames.iter().enumerate() {
        converted.translate.push(TranslateFrame {
            time: clock.tick(frame.duration),
            x: frame.x,
            y: -frame.y,
            curve: map_curve(frame, index == last),
        });
    }

    // Rotate and shear share the source frames, timestamps and curves
    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.rotation_frames.len().saturating_sub(1);
    let mut previous: Option<f64> = None;
    for (index, frame) in timeline.rotation_frames.iter().enumerate() {
        let time = clock.tick(frame.duration);
        let curve = map_curve(frame, index == last);
        let angle = match previous {
            Some(previous) => unwrap_angle(previous, -frame.rotate),
            None => -frame.rotate,
        };
        converted.rotate.push(RotateFrame { time, angle, curve });
        converted.shear.push(ShearFrame { time, x: 0.0, y: -frame.skew, curve });
        previous = Some(angle);
    }

    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.scale_frames.len().saturating_sub(1);
    for (index, frame) in timeline.scale_frames.iter().enumerate() {
        converted.scale.push(ScaleFrame {
            time: clock.tick(frame.duration),
            x: frame.x,
            y: frame.y,
            curve: map_curve(frame, index == last),
        });
    }

    converted
}

fn convert_slot_timeline(context: &ArmatureContext, timeline: &RawSlotTimeline) -> SlotTimelines {
    let mut converted = SlotTimelines::default();

    let mut clock = FrameClock::new(context.frame_rate);
    for frame in timeline.display_frames.iter() {
        converted.attachment.push(AttachmentFrame {
            time: clock.tick(frame.duration),
            name: context.display_name(&timeline.name, frame.value).unwrap_or_default(),
        });
    }

    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.colors.len().saturating_sub(1);
    for (index, frame) in timeline.colors.iter().enumerate() {
        converted.color.push(ColorFrame {
            time: clock.tick(frame.duration),
            color: color_to_hex(&frame.color),
            curve: map_curve(frame, index == last),
        });
    }

    converted
}

/// Expands sparse DragonBones deltas to the full vertex array, flips y and
/// trims zero runs from both ends. Returns the Spine offset and the kept span.
pub fn sparse_deform(offset: usize, deltas: &[f64], vertex_count: usize) -> (usize, Vec<f64>) {
    let mut vertices = vec![0.0; offset];
    vertices.extend_from_slice(deltas);
    if vertices.len() < vertex_count {
        vertices.resize(vertex_count, 0.0);
    }
    for point in vertices.chunks_mut(2) {
        if let Some(y) = point.get_mut(1) {
            *y = -*y;
        }
    }

    let len = vertices.len();
    let mut begin = 0;
    while begin < len && vertices[begin] == 0.0 {
        begin += 1;
        // The last component is never trimmed from the front
        if begin + 1 == len {
            break;
        }
    }
    let mut end = len;
    while end > begin && vertices[end - 1] == 0.0 {
        end -= 1;
    }

    (begin, vertices[begin..end].to_vec())
}

fn convert_deform_timeline(context: &ArmatureContext, timeline: &RawFfdTimeline) -> Option<Vec<DeformFrame>> {
    let mesh = match context.armature.display(&timeline.skin, &timeline.slot, &timeline.name) {
        Some(RawDisplay::Mesh(mesh)) => mesh,
        _ => {
            warn!(
                "deform timeline for '{}' (skin '{}', slot '{}') does not resolve to a mesh, skipped",
                timeline.name, timeline.skin, timeline.slot
            );
            return None;
        }
    };

    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.frames.len().saturating_sub(1);
    let frames: Vec<DeformFrame> = timeline.frames.iter().enumerate().map(|(index, frame)| {
        let time = clock.tick(frame.duration);
        let (offset, vertices) = sparse_deform(frame.offset, &frame.vertices, mesh.vertices.len());
        DeformFrame {
            time,
            offset,
            vertices,
            curve: map_curve(frame, index == last),
        }
    }).collect();
    Some(frames)
}

fn convert_ik_timeline(context: &ArmatureContext, timeline: &RawIkTimeline) -> Vec<IkFrame> {
    let mut clock = FrameClock::new(context.frame_rate);
    let last = timeline.frames.len().saturating_sub(1);
    timeline.frames.iter().enumerate().map(|(index, frame)| IkFrame {
        time: clock.tick(frame.duration),
        mix: frame.weight,
        bend_positive: !frame.bend_positive,
        curve: map_curve(frame, index == last),
    }).collect()
}
