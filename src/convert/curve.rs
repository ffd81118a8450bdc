use crate::skeleton_data::animation::TweenFrame;
use crate::spine_data::Curve;

/// Spine curve for a DragonBones frame. The last frame of a timeline has
/// nothing to interpolate into and gets no curve.
pub fn map_curve<F: TweenFrame>(source: &F, is_last_frame: bool) -> Option<Curve> {
    if is_last_frame {
        return None;
    }

    let points = source.curve();
    if points.len() >= 4 {
        // Sampled curves keep only the outer handles
        let len = points.len();
        Some(Curve::Bezier([points[0], points[1], points[len - 2], points[len - 1]]))
    } else if source.tween_easing().is_nan() {
        Some(Curve::Stepped)
    } else {
        // Easing strengths other than "absent" are not distinguished
        Some(Curve::Linear)
    }
}
