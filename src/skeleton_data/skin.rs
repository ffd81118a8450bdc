use serde::{Deserialize, Deserializer};
use crate::shared_types::{default_name, default_true, Point};
use serde_json::Value;
use crate::skeleton_data::transform::RawTransform;

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkinData {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(rename = "slot")]
    #[serde(default)]
    pub slots: Vec<RawSkinSlot>,
}

impl RawSkinData {
    pub fn slot(&self, name: &str) -> Option<&RawSkinSlot> {
        self.slots.iter().find(|it| it.name.eq(name))
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawSkinSlot {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(rename = "display")]
    #[serde(default)]
    pub displays: Vec<RawDisplay>,
}

impl RawSkinSlot {
    /// Display at a slot's `displayIndex`; negative indices select nothing.
    pub fn display_at(&self, index: i32) -> Option<&RawDisplay> {
        if index < 0 {
            None
        } else {
            self.displays.get(index as usize)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RawBoundingBox {
    Vertices(Vec<f64>),
    Rectangle{ width: f64, height: f64 },
    Ellipse{ width: f64, height: f64 }
}

#[derive(Clone, Debug)]
pub enum RawDisplay {
    BoundingBoxDisplay {
        name: String,
        path: String,

        color: u32,

        sub_data: RawBoundingBox
    },
    Image {
        name: String,
        path: String,

        pivot: Point,

        transform: RawTransform,
    },
    Mesh(RawMesh),
    /// A mesh that borrows the geometry of another mesh display.
    SharedMesh {
        name: String,
        path: String,

        share: String,

        inherit_deform: bool,
    },
    Armature {
        name: String,
        path: String,
    },
    Unsupported {
        name: String,
        kind: String,
    },
}

impl RawDisplay {
    pub fn name(&self) -> &str {
        match self {
            RawDisplay::BoundingBoxDisplay { name, .. } => name,
            RawDisplay::Image { name, .. } => name,
            RawDisplay::Mesh(mesh) => &mesh.name,
            RawDisplay::SharedMesh { name, .. } => name,
            RawDisplay::Armature { name, .. } => name,
            RawDisplay::Unsupported { name, .. } => name,
        }
    }

    /// Atlas region key: the explicit path when present, otherwise the name.
    pub fn texture_name(&self) -> &str {
        let path = match self {
            RawDisplay::BoundingBoxDisplay { path, .. } => path,
            RawDisplay::Image { path, .. } => path,
            RawDisplay::Mesh(mesh) => &mesh.path,
            RawDisplay::SharedMesh { path, .. } => path,
            RawDisplay::Armature { path, .. } => path,
            RawDisplay::Unsupported { .. } => "",
        };
        if path.is_empty() { self.name() } else { path }
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct RawMesh {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub width: f64,

    #[serde(default)]
    pub height: f64,

    /// Parent-space positions, `x, y` per vertex.
    #[serde(default)]
    pub vertices: Vec<f64>,

    #[serde(default)]
    pub uvs: Vec<f64>,

    #[serde(default)]
    pub triangles: Vec<u32>,

    /// Per vertex: `bone count, (bone index, weight) * bone count`.
    #[serde(default)]
    pub weights: Vec<f64>,

    #[serde(rename = "slotPose")]
    #[serde(default)]
    pub slot_pose: Vec<f64>,

    /// Per bone: `bone index, a, b, c, d, tx, ty`.
    #[serde(rename = "bonePose")]
    #[serde(default)]
    pub bone_pose: Vec<f64>,

    #[serde(default)]
    pub edges: Vec<u32>,

    #[serde(rename = "userEdges")]
    #[serde(default)]
    pub user_edges: Vec<u32>,
}

const BONE_POSE_STRIDE: usize = 7;

impl RawMesh {
    pub fn is_weighted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Bind-pose matrix components `[a, b, c, d, tx, ty]` for a bone index.
    pub fn bone_pose(&self, bone_index: usize) -> Option<[f64; 6]> {
        self.bone_pose
            .chunks_exact(BONE_POSE_STRIDE)
            .find(|entry| entry[0] as usize == bone_index)
            .map(|entry| [entry[1], entry[2], entry[3], entry[4], entry[5], entry[6]])
    }
}

#[derive(Deserialize)]
struct ImageDeserialized {
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(default = "default_pivot")]
    pivot: Point,
    #[serde(default)]
    transform: RawTransform,
}

#[derive(Deserialize)]
struct SharedMeshDeserialized {
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    share: String,
    #[serde(rename = "inheritDeform")]
    #[serde(default = "default_true")]
    inherit_deform: bool,
}

#[derive(Deserialize)]
struct BoundingBoxDeserialized {
    #[serde(default)]
    name: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    color: u32,
    #[serde(rename = "subType")]
    #[serde(default = "default_rectangle")]
    sub_type: String,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    vertices: Vec<f64>,
}

fn default_pivot() -> Point { Point { x: 0.5, y: 0.5 } }
fn default_rectangle() -> String { "rectangle".into() }

fn field_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

impl<'de> Deserialize<'de> for RawDisplay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let value: Value = Deserialize::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("Unexpected JSON field type! Object expected"));
        }

        // Image could not contain a tag so in this case we are "defaulting" to Image
        let tag = match value.get("type") {
            None => "image".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(serde::de::Error::custom("Unexpected JSON field type! String expected"))
        };

        match tag.as_str() {
            "image" => {
                let image: ImageDeserialized = serde_json::from_value(value)
                    .map_err(serde::de::Error::custom)?;
                Ok(RawDisplay::Image {
                    name: image.name,
                    path: image.path,
                    pivot: image.pivot,
                    transform: image.transform
                })
            },
            "mesh" if value.get("share").is_some() => {
                let shared: SharedMeshDeserialized = serde_json::from_value(value)
                    .map_err(serde::de::Error::custom)?;
                Ok(RawDisplay::SharedMesh {
                    name: shared.name,
                    path: shared.path,
                    share: shared.share,
                    inherit_deform: shared.inherit_deform
                })
            },
            "mesh" => {
                let mesh: RawMesh = serde_json::from_value(value)
                    .map_err(serde::de::Error::custom)?;
                Ok(RawDisplay::Mesh(mesh))
            },
            "boundingBox" => {
                let bounding_box: BoundingBoxDeserialized = serde_json::from_value(value)
                    .map_err(serde::de::Error::custom)?;
                let sub_data = match bounding_box.sub_type.as_str() {
                    "rectangle" => RawBoundingBox::Rectangle {
                        width: bounding_box.width,
                        height: bounding_box.height
                    },
                    "ellipse" => RawBoundingBox::Ellipse {
                        width: bounding_box.width,
                        height: bounding_box.height
                    },
                    "polygon" => RawBoundingBox::Vertices(bounding_box.vertices),
                    other => return Err(serde::de::Error::custom(format!("Unexpected bounding box sub type \"{}\"", other)))
                };
                Ok(RawDisplay::BoundingBoxDisplay {
                    name: bounding_box.name,
                    path: bounding_box.path,
                    color: bounding_box.color,
                    sub_data
                })
            },
            "armature" => Ok(RawDisplay::Armature {
                name: field_str(&value, "name").to_string(),
                path: field_str(&value, "path").to_string()
            }),
            _ => Ok(RawDisplay::Unsupported {
                name: field_str(&value, "name").to_string(),
                kind: tag
            })
        }
    }
}
