pub mod skeleton_data;
pub mod atlas_data;
pub mod shared_types;
pub mod spine_data;
pub mod convert;
pub mod error;

pub use convert::{convert, Conversion, ConvertOptions};
pub use error::ConvertError;

#[cfg(test)]
mod tests {
    use crate::skeleton_data::RawSkeletonData;
    use crate::atlas_data::TextureAtlas;
    use crate::spine_data::{Attachment, BlendMode, TransformMode};
    use crate::{convert, ConvertOptions};
    use approx::assert_relative_eq;

    fn hero() -> RawSkeletonData {
        let mut document = RawSkeletonData::parse(include_bytes!("test_assets/hero_ske.json")).unwrap();
        document.add_texture_atlas(TextureAtlas::parse(include_bytes!("test_assets/hero_tex.json")).unwrap());
        document
    }

    #[test]
    fn test_minimal_document_converts_to_one_skeleton() {
        let document = RawSkeletonData::parse(include_bytes!("test_assets/minimal_ske.json")).unwrap();
        let conversion = convert(&document, &ConvertOptions::default()).unwrap();
        assert_eq!(conversion.spines.len(), 1);
        assert_eq!(conversion.texture_atlas, "");

        let spine = &conversion.spines[0];
        assert_eq!(spine.skeleton.spine, "3.8.75");
        assert_eq!(spine.skeleton.fps, 24);
        assert_eq!(spine.bones.len(), 1);
        assert_eq!(spine.bones[0].name, "root");
        assert_eq!(spine.bones[0].parent, None);
        assert_eq!(spine.bones[0].transform, TransformMode::Normal);
        assert_eq!(spine.slots.len(), 1);
        assert_eq!(spine.slots[0].color, "FFFFFFFF");
        assert_eq!(spine.slots[0].blend, BlendMode::Normal);
        assert_eq!(spine.slots[0].attachment.as_deref(), Some("body"));
        assert!(spine.animations.is_empty());
        assert!(spine.events.is_empty());
    }

    #[test]
    fn test_hero_document_skips_binary_animations() {
        let conversion = convert(&hero(), &ConvertOptions::default()).unwrap();
        let spine = &conversion.spines[0];
        assert_eq!(spine.skeleton.fps, 30);
        assert_eq!(spine.animations.keys().collect::<Vec<_>>(), vec!["idle"]);
    }

    #[test]
    fn test_hero_document_resolves_atlas_sizes() {
        let conversion = convert(&hero(), &ConvertOptions::default()).unwrap();
        let skin = conversion.spines[0].skin("default").unwrap();
        match skin.attachment("body", "body") {
            Some(Attachment::Region(region)) => {
                assert_eq!(region.width, Some(12.0));
                assert_eq!(region.height, Some(30.0));
                assert_eq!(region.y, -2.0);
            }
            other => panic!("expected a region attachment, got {:?}", other),
        }
        match skin.attachment("cape", "cape") {
            Some(Attachment::Mesh(mesh)) => {
                assert_eq!(mesh.hull, 4);
                assert_eq!(mesh.vertices, vec![0.0, 0.0, 20.0, 0.0, 20.0, -20.0, 0.0, -20.0]);
            }
            other => panic!("expected a mesh attachment, got {:?}", other),
        }
    }

    #[test]
    fn test_hero_document_serializes_to_spine_json() {
        let conversion = convert(&hero(), &ConvertOptions::default()).unwrap();
        let spine = &conversion.spines[0];
        let json: serde_json::Value = serde_json::from_str(&spine.to_json().unwrap()).unwrap();

        assert_eq!(json["skeleton"]["hash"], " ");
        assert_eq!(json["bones"][1]["parent"], "root");
        assert_eq!(json["bones"][1]["y"], -20.0);
        assert_eq!(json["slots"][1]["blend"], "multiply");
        assert_eq!(json["slots"][1]["color"], "FFFFFF00");
        assert_eq!(json["skins"][0]["attachments"]["cape"]["cape"]["type"], "mesh");
        assert!(json["events"]["step"].get("float").is_none());
        assert_eq!(json["events"]["step"]["string"], "body");

        let idle = &json["animations"]["idle"];
        assert_eq!(idle["bones"]["body"]["rotate"][0]["angle"], -45.0);
        assert_eq!(idle["bones"]["body"]["rotate"][0]["curve"], "linear");
        assert_eq!(idle["bones"]["body"]["rotate"][1]["angle"], 45.0);
        assert!(idle["bones"]["body"]["rotate"][1].get("curve").is_none());
        assert_eq!(idle["slots"]["cape"]["attachment"][0]["name"], "cape");
        assert_eq!(idle["slots"]["cape"]["attachment"][1]["name"], "");
        assert_eq!(idle["deform"]["default"]["cape"]["cape"][0]["offset"], 4);
        assert_eq!(idle["deform"]["default"]["cape"]["cape"][0]["vertices"], serde_json::json!([2.0, -3.0]));
        assert_eq!(idle["events"][1]["name"], "step");
        assert_relative_eq!(idle["events"][1]["time"].as_f64().unwrap(), 0.5);
        assert_relative_eq!(idle["events"][1]["float"].as_f64().unwrap(), 0.5);
    }

    #[test]
    fn test_hero_atlas_text() {
        let options = ConvertOptions { texture_atlas_suffix: true, ..Default::default() };
        let conversion = convert(&hero(), &options).unwrap();
        let lines: Vec<&str> = conversion.texture_atlas.lines().collect();
        assert_eq!(lines[1], "hero_spine.png");
        assert_eq!(lines[2], "size: 64,64");
        assert_eq!(lines[13], "cape");
        assert_eq!(lines[17], "  orig: 22, 22");
        assert_eq!(lines[18], "  offset: 1, 1");
        assert_eq!(lines[19], "  index: -1");
    }
}
