use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Attachment {
    Region(RegionAttachment),
    Mesh(MeshAttachment),
    LinkedMesh(LinkedMeshAttachment),
    BoundingBox(BoundingBoxAttachment),
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Attachment::Region(it) => &it.name,
            Attachment::Mesh(it) => &it.name,
            Attachment::LinkedMesh(it) => &it.name,
            Attachment::BoundingBox(it) => &it.name,
        }
    }
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionAttachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct MeshAttachment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub uvs: Vec<f64>,
    pub triangles: Vec<u32>,
    /// Either `x, y` per vertex, or per vertex
    /// `bone count, (bone index, x, y, weight) * bone count` in bone space.
    pub vertices: Vec<f64>,
    /// Number of hull vertices.
    pub hull: usize,
    /// Vertex index pairs, each index doubled.
    pub edges: Vec<u32>,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct LinkedMeshAttachment {
    pub name: String,
    pub parent: String,
    pub skin: String,
    pub deform: bool,
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBoxAttachment {
    pub name: String,
    pub vertex_count: usize,
    pub vertices: Vec<f64>,
}
