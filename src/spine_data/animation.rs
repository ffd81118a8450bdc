use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Interpolation into the next frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curve {
    Linear,
    Stepped,
    /// `cx1, cy1, cx2, cy2`
    Bezier([f64; 4]),
}

impl Serialize for Curve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        match self {
            Curve::Linear => serializer.serialize_str("linear"),
            Curve::Stepped => serializer.serialize_str("stepped"),
            Curve::Bezier(points) => points.serialize(serializer),
        }
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct TranslateFrame {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct RotateFrame {
    pub time: f64,
    pub angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct ShearFrame {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct ScaleFrame {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct BoneTimelines {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translate: Vec<TranslateFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rotate: Vec<RotateFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shear: Vec<ShearFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scale: Vec<ScaleFrame>,
}

/// An empty `name` hides the slot.
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct AttachmentFrame {
    pub time: f64,
    pub name: String,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct ColorFrame {
    pub time: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct SlotTimelines {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachment: Vec<AttachmentFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color: Vec<ColorFrame>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IkFrame {
    pub time: f64,
    pub mix: f64,
    pub bend_positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

/// Sparse vertex offsets: `vertices` starts at component `offset`.
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct DeformFrame {
    pub time: f64,
    pub offset: usize,
    pub vertices: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct EventFrame {
    pub time: f64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct DrawOrderOffset {
    pub slot: String,
    pub offset: i32,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct DrawOrderFrame {
    pub time: f64,
    pub offsets: Vec<DrawOrderOffset>,
}

/// skin name -> slot name -> attachment name -> frames
pub type DeformTimelines = IndexMap<String, IndexMap<String, IndexMap<String, Vec<DeformFrame>>>>;

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub bones: IndexMap<String, BoneTimelines>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub slots: IndexMap<String, SlotTimelines>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub ik: IndexMap<String, Vec<IkFrame>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub deform: DeformTimelines,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub draw_order: Vec<DrawOrderFrame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_serializes_as_tag_or_points() {
        assert_eq!(serde_json::to_string(&Curve::Stepped).unwrap(), "\"stepped\"");
        assert_eq!(serde_json::to_string(&Curve::Linear).unwrap(), "\"linear\"");
        assert_eq!(serde_json::to_string(&Curve::Bezier([0.25, 0.0, 0.75, 1.0])).unwrap(), "[0.25,0.0,0.75,1.0]");
    }

    #[test]
    fn last_frame_has_no_curve_key() {
        let frame = TranslateFrame { time: 1.0, x: 2.0, y: 3.0, curve: None };
        let json = serde_json::to_value(&frame).unwrap();
        assert!(json.get("curve").is_none());
    }

    #[test]
    fn empty_timeline_groups_are_omitted() {
        let animation = Animation {
            events: vec![EventFrame { time: 0.5, name: "step".into(), ..Default::default() }],
            ..Default::default()
        };
        let json = serde_json::to_value(&animation).unwrap();
        assert!(json.get("bones").is_none());
        assert!(json.get("drawOrder").is_none());
        assert_eq!(json["events"][0]["name"], "step");
    }
}
