use indexmap::IndexMap;
use log::{debug, warn};
use crate::error::ConvertError;
use crate::skeleton_data::skin::{RawBoundingBox, RawDisplay, RawMesh, RawSkinData, RawSkinSlot};
use crate::skeleton_data::transform::RawTransform;
use crate::spine_data::{
    Attachment, BoundingBoxAttachment, LinkedMeshAttachment, MeshAttachment, RegionAttachment, Skin,
};
use super::armature::ArmatureContext;
use super::geometry::{hull_edges, BindPose};
use super::number::round_to_fixed;

/// Where a display lives, for error reports.
struct DisplayLocation<'a> {
    armature: &'a str,
    skin: &'a str,
    slot: &'a str,
    display: &'a str,
}

pub fn convert_skin(context: &ArmatureContext, skin: &RawSkinData) -> Result<Skin, ConvertError> {
    let mut attachments = IndexMap::with_capacity(skin.slots.len());
    for slot in skin.slots.iter() {
        attachments.insert(slot.name.clone(), convert_skin_slot(context, skin, slot)?);
    }
    Ok(Skin {
        name: skin.name.clone(),
        attachments,
    })
}

fn convert_skin_slot(
    context: &ArmatureContext,
    skin: &RawSkinData,
    slot: &RawSkinSlot,
) -> Result<IndexMap<String, Attachment>, ConvertError> {
    let mut attachments = IndexMap::with_capacity(slot.displays.len());
    for display in slot.displays.iter() {
        let location = DisplayLocation {
            armature: &context.armature.name,
            skin: &skin.name,
            slot: &slot.name,
            display: display.name(),
        };
        if let Some(attachment) = convert_display(context, &location, display)? {
            attachments.insert(attachment.name().to_string(), attachment);
        }
    }
    Ok(attachments)
}

fn convert_display(
    context: &ArmatureContext,
    location: &DisplayLocation,
    display: &RawDisplay,
) -> Result<Option<Attachment>, ConvertError> {
    let attachment = match display {
        RawDisplay::Image { name, path, transform, .. } => {
            Attachment::Region(region_attachment(context, display, name, path, transform))
        }
        RawDisplay::Mesh(mesh) => {
            Attachment::Mesh(mesh_attachment(context, location, display, mesh)?)
        }
        RawDisplay::SharedMesh { name, share, inherit_deform, .. } => {
            Attachment::LinkedMesh(LinkedMeshAttachment {
                name: name.clone(),
                parent: share.clone(),
                skin: location.skin.to_string(),
                deform: *inherit_deform,
            })
        }
        RawDisplay::BoundingBoxDisplay { name, sub_data: RawBoundingBox::Vertices(vertices), .. } => {
            Attachment::BoundingBox(bounding_box_attachment(name, vertices))
        }
        other => {
            debug!("slot '{}' display '{}' has no Spine attachment form, skipped", location.slot, other.name());
            return Ok(None);
        }
    };
    Ok(Some(attachment))
}

fn non_empty(path: &str) -> Option<String> {
    if path.is_empty() { None } else { Some(path.to_string()) }
}

fn texture_size(context: &ArmatureContext, display: &RawDisplay) -> (Option<f64>, Option<f64>) {
    match context.document.find_sub_texture(display.texture_name()) {
        Some(texture) => (Some(texture.width), Some(texture.height)),
        None => {
            warn!("no texture region named '{}' in any atlas page", display.texture_name());
            (None, None)
        }
    }
}

fn region_attachment(
    context: &ArmatureContext,
    display: &RawDisplay,
    name: &str,
    path: &str,
    transform: &RawTransform,
) -> RegionAttachment {
    let (width, height) = texture_size(context, display);
    RegionAttachment {
        name: name.to_string(),
        path: non_empty(path),
        x: transform.x,
        y: -transform.y,
        rotation: -transform.skew_y,
        scale_x: transform.scale_x,
        scale_y: transform.scale_y,
        width,
        height,
    }
}

fn mesh_attachment(
    context: &ArmatureContext,
    location: &DisplayLocation,
    display: &RawDisplay,
    mesh: &RawMesh,
) -> Result<MeshAttachment, ConvertError> {
    let (width, height) = texture_size(context, display);

    let mut edges: Vec<u32> = hull_edges(&mesh.triangles).into_iter().map(|index| index * 2).collect();
    let hull = edges.len() / 2;
    edges.extend(mesh.user_edges.iter().map(|index| index * 2));

    let vertices = if mesh.is_weighted() {
        weighted_vertices(location, mesh)?
    } else {
        mesh.vertices
            .chunks_exact(2)
            .flat_map(|point| vec![round_to_fixed(point[0], 2), -round_to_fixed(point[1], 2)])
            .collect()
    };

    Ok(MeshAttachment {
        name: mesh.name.clone(),
        path: non_empty(&mesh.path),
        width,
        height,
        uvs: mesh.uvs.clone(),
        triangles: mesh.triangles.clone(),
        vertices,
        hull,
        edges,
    })
}

/// Re-expresses every world-space vertex in the space of each bone that
/// influences it: `bone count, (bone index, x, y, weight) * bone count`.
fn weighted_vertices(location: &DisplayLocation, mesh: &RawMesh) -> Result<Vec<f64>, ConvertError> {
    let malformed = || ConvertError::MalformedWeights {
        armature: location.armature.to_string(),
        skin: location.skin.to_string(),
        slot: location.slot.to_string(),
        display: location.display.to_string(),
    };

    let mut weights = mesh.weights.iter().copied();
    let mut vertices = Vec::with_capacity(mesh.weights.len() * 2);
    for point in mesh.vertices.chunks_exact(2) {
        let bone_count = weights.next().ok_or_else(malformed)?;
        vertices.push(bone_count);
        for _ in 0..bone_count as usize {
            let bone_index = weights.next().ok_or_else(malformed)? as usize;
            let weight = weights.next().ok_or_else(malformed)?;

            let pose = mesh.bone_pose(bone_index).ok_or_else(|| ConvertError::MissingBonePose {
                armature: location.armature.to_string(),
                skin: location.skin.to_string(),
                slot: location.slot.to_string(),
                display: location.display.to_string(),
                bone_index,
            })?;
            let inverse = BindPose::from_components(pose).inverse().ok_or_else(|| ConvertError::SingularBonePose {
                armature: location.armature.to_string(),
                skin: location.skin.to_string(),
                slot: location.slot.to_string(),
                display: location.display.to_string(),
                bone_index,
            })?;
            let (x, y) = inverse.transform_point(point[0], point[1]);

            vertices.push(bone_index as f64);
            vertices.push(round_to_fixed(x, 2));
            vertices.push(-round_to_fixed(y, 2));
            vertices.push(weight);
        }
    }
    Ok(vertices)
}

fn bounding_box_attachment(name: &str, vertices: &[f64]) -> BoundingBoxAttachment {
    BoundingBoxAttachment {
        name: name.to_string(),
        vertex_count: vertices.len() / 2,
        vertices: vertices
            .chunks_exact(2)
            .flat_map(|point| vec![point[0], -point[1]])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton_data::RawSkeletonData;
    use crate::skeleton_data::armature::RawArmatureData;

    fn fixture() -> (RawSkeletonData, RawArmatureData) {
        let document: RawSkeletonData = serde_json::from_str(r#"{
            "frameRate": 24,
            "name": "doc",
            "textureAtlas": [{
                "width": 64, "height": 64,
                "SubTexture": [
                    {"name": "parts/head", "x": 0, "y": 0, "width": 20, "height": 30},
                    {"name": "cape", "x": 20, "y": 0, "width": 40, "height": 50}
                ]
            }]
        }"#).unwrap();
        let armature: RawArmatureData = serde_json::from_str(r#"{
            "name": "hero",
            "bone": [{"name": "root"}, {"name": "arm", "parent": "root"}],
            "skin": [{"name": "default", "slot": [
                {"name": "head", "display": [
                    {"name": "head", "path": "parts/head", "transform": {"x": 3, "y": 4, "skX": 10, "skY": 10, "scX": 2}},
                    {"name": "nose"},
                    {"type": "armature", "name": "nested"},
                    {"type": "boundingBox", "subType": "rectangle", "name": "box", "width": 4, "height": 4}
                ]},
                {"name": "cape", "display": [
                    {"type": "mesh", "name": "cape",
                     "vertices": [0.123, 0.456, 10, 0, 10, 10, 0, 10],
                     "uvs": [0, 0, 1, 0, 1, 1, 0, 1],
                     "triangles": [0, 1, 3, 1, 2, 3],
                     "userEdges": [0, 2]},
                    {"type": "mesh", "name": "cape_copy", "share": "cape"}
                ]},
                {"name": "hit", "display": [
                    {"type": "boundingBox", "subType": "polygon", "name": "hit", "vertices": [1, 2, 3, 4, 5, 6]}
                ]},
                {"name": "arm", "display": [
                    {"type": "mesh", "name": "sleeve",
                     "vertices": [12, 5],
                     "uvs": [0, 0],
                     "triangles": [],
                     "weights": [2, 0, 0.25, 1, 0.75],
                     "bonePose": [0, 1, 0, 0, 1, 0, 0, 1, 0, 1, -1, 0, 10, 0]}
                ]}
            ]}]
        }"#).unwrap();
        (document, armature)
    }

    fn converted() -> Skin {
        let (document, armature) = fixture();
        let context = ArmatureContext::new(&document, &armature);
        convert_skin(&context, &armature.skins[0]).unwrap()
    }

    #[test]
    fn image_becomes_region_with_atlas_size() {
        let skin = converted();
        match skin.attachment("head", "head") {
            Some(Attachment::Region(region)) => {
                assert_eq!(region.path.as_deref(), Some("parts/head"));
                assert_eq!((region.x, region.y), (3.0, -4.0));
                assert_eq!(region.rotation, -10.0);
                assert_eq!((region.scale_x, region.scale_y), (2.0, 1.0));
                assert_eq!((region.width, region.height), (Some(20.0), Some(30.0)));
            }
            other => panic!("expected region, got {:?}", other)
        }
    }

    #[test]
    fn region_without_atlas_entry_has_no_size() {
        let skin = converted();
        match skin.attachment("head", "nose") {
            Some(Attachment::Region(region)) => {
                assert_eq!(region.path, None);
                assert_eq!(region.width, None);
                assert_eq!(region.height, None);
            }
            other => panic!("expected region, got {:?}", other)
        }
    }

    #[test]
    fn displays_without_spine_form_are_skipped() {
        let skin = converted();
        let head = &skin.attachments["head"];
        assert_eq!(head.keys().collect::<Vec<_>>(), vec!["head", "nose"]);
    }

    #[test]
    fn unweighted_mesh_flips_and_rounds_vertices() {
        let skin = converted();
        match skin.attachment("cape", "cape") {
            Some(Attachment::Mesh(mesh)) => {
                assert_eq!(mesh.vertices, vec![0.12, -0.46, 10.0, -0.0, 10.0, -10.0, 0.0, -10.0]);
                assert_eq!(mesh.edges, vec![0, 2, 2, 4, 4, 6, 6, 0, 0, 4]);
                assert_eq!(mesh.hull, 4);
                assert_eq!(mesh.triangles, vec![0, 1, 3, 1, 2, 3]);
                assert_eq!((mesh.width, mesh.height), (Some(40.0), Some(50.0)));
            }
            other => panic!("expected mesh, got {:?}", other)
        }
    }

    #[test]
    fn shared_mesh_becomes_linked_mesh() {
        let skin = converted();
        assert_eq!(
            skin.attachment("cape", "cape_copy"),
            Some(&Attachment::LinkedMesh(LinkedMeshAttachment {
                name: "cape_copy".into(),
                parent: "cape".into(),
                skin: "default".into(),
                deform: true,
            }))
        );
    }

    #[test]
    fn polygon_bounding_box_flips_y() {
        let skin = converted();
        assert_eq!(
            skin.attachment("hit", "hit"),
            Some(&Attachment::BoundingBox(BoundingBoxAttachment {
                name: "hit".into(),
                vertex_count: 3,
                vertices: vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0],
            }))
        );
    }

    #[test]
    fn weighted_mesh_vertices_move_into_bone_space() {
        let skin = converted();
        match skin.attachment("arm", "sleeve") {
            Some(Attachment::Mesh(mesh)) => {
                // Bone 0 is the identity, bone 1 sits at (10, 0) rotated by 90 degrees
                assert_eq!(mesh.vertices, vec![2.0, 0.0, 12.0, -5.0, 0.25, 1.0, 5.0, 2.0, 0.75]);
                assert_eq!(mesh.hull, 0);
            }
            other => panic!("expected mesh, got {:?}", other)
        }
    }

    #[test]
    fn weighted_mesh_without_bind_pose_is_an_error() {
        let (document, mut armature) = fixture();
        if let RawDisplay::Mesh(mesh) = &mut armature.skins[0].slots[3].displays[0] {
            mesh.bone_pose.truncate(7);
        }
        let context = ArmatureContext::new(&document, &armature);
        let error = convert_skin(&context, &armature.skins[0]).unwrap_err();
        assert_eq!(error, ConvertError::MissingBonePose {
            armature: "hero".into(),
            skin: "default".into(),
            slot: "arm".into(),
            display: "sleeve".into(),
            bone_index: 1,
        });
    }

    #[test]
    fn truncated_weights_are_an_error() {
        let (document, mut armature) = fixture();
        if let RawDisplay::Mesh(mesh) = &mut armature.skins[0].slots[3].displays[0] {
            mesh.weights.truncate(3);
        }
        let context = ArmatureContext::new(&document, &armature);
        let error = convert_skin(&context, &armature.skins[0]).unwrap_err();
        assert!(matches!(error, ConvertError::MalformedWeights { .. }));
    }
}
