use crate::atlas_data::{SubTexture, TextureAtlas};
use crate::skeleton_data::RawSkeletonData;
use super::number::number_text;

const PAGE_SUFFIX: &str = "_spine";

/// Spine `.atlas` text for every texture atlas page of the document.
///
/// Pages are named after the document. When there is more than one page each
/// image name gets a `_<index>` suffix and regions record their page index;
/// a lone page uses index `-1`.
pub fn texture_atlas_text(document: &RawSkeletonData, add_suffix: bool) -> String {
    let paged = document.texture_atlases.len() > 1;
    let mut text = String::new();
    for (page, atlas) in document.texture_atlases.iter().enumerate() {
        let index = if paged { page as i64 } else { -1 };
        write_page_header(&mut text, document, atlas, add_suffix, paged.then(|| index));
        for texture in atlas.sub_textures.iter() {
            write_region(&mut text, texture, index);
        }
    }
    text
}

fn write_page_header(
    text: &mut String,
    document: &RawSkeletonData,
    atlas: &TextureAtlas,
    add_suffix: bool,
    page_index: Option<i64>,
) {
    text.push('\n');
    text.push_str(&document.name);
    if add_suffix {
        text.push_str(PAGE_SUFFIX);
    }
    if let Some(index) = page_index {
        text.push_str(&format!("_{}", index));
    }
    text.push_str(".png\n");
    text.push_str(&format!("size: {},{}\n", number_text(atlas.width), number_text(atlas.height)));
    text.push_str("format: RGBA8888\n");
    text.push_str("filter: Linear,Linear\n");
    text.push_str("repeat: none\n");
}

fn write_region(text: &mut String, texture: &SubTexture, index: i64) {
    let (original_width, original_height) = texture.original_size();
    let (offset_x, offset_y) = texture.offset();
    text.push_str(&format!("{}\n", texture.name));
    // DragonBones and Spine disagree on the rotation direction; the flag is written as is
    text.push_str(&format!("  rotate: {}\n", texture.rotated));
    text.push_str(&format!("  xy: {}, {}\n", number_text(texture.x), number_text(texture.y)));
    text.push_str(&format!("  size: {}, {}\n", number_text(texture.width), number_text(texture.height)));
    text.push_str(&format!("  orig: {}, {}\n", number_text(original_width), number_text(original_height)));
    text.push_str(&format!("  offset: {}, {}\n", number_text(offset_x), number_text(offset_y)));
    text.push_str(&format!("  index: {}\n", index));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(pages: &str) -> RawSkeletonData {
        serde_json::from_str(&format!(r#"{{"name": "hero", "textureAtlas": {}}}"#, pages)).unwrap()
    }

    #[test]
    fn single_page_uses_index_minus_one() {
        let document = document(r#"[{"width": 256, "height": 128, "SubTexture": [
            {"name": "head", "x": 2, "y": 4, "width": 30, "height": 40},
            {"name": "arm", "x": 40, "y": 4, "width": 10, "height": 20,
             "frameX": -3, "frameY": -2, "frameWidth": 16, "frameHeight": 25, "rotated": true}
        ]}]"#);
        let expected = "\nhero.png\n\
size: 256,128\n\
format: RGBA8888\n\
filter: Linear,Linear\n\
repeat: none\n\
head\n  rotate: false\n  xy: 2, 4\n  size: 30, 40\n  orig: 30, 40\n  offset: 0, 0\n  index: -1\n\
arm\n  rotate: true\n  xy: 40, 4\n  size: 10, 20\n  orig: 16, 25\n  offset: 3, 13\n  index: -1\n";
        assert_eq!(texture_atlas_text(&document, false), expected);
    }

    #[test]
    fn multiple_pages_are_numbered_and_suffixed() {
        let document = document(r#"[
            {"width": 64, "height": 64, "SubTexture": [{"name": "a", "width": 8, "height": 8}]},
            {"width": 32, "height": 32.5, "SubTexture": [{"name": "b", "x": 1.5, "width": 4, "height": 4}]}
        ]"#);
        let text = texture_atlas_text(&document, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "hero_spine_0.png");
        assert_eq!(lines[12], "  index: 0");
        assert_eq!(lines[13], "");
        assert_eq!(lines[14], "hero_spine_1.png");
        assert_eq!(lines[15], "size: 32,32.5");
        assert_eq!(lines[21], "  xy: 1.5, 0");
        assert_eq!(lines[25], "  index: 1");
        assert_eq!(lines.len(), 26);
    }

    #[test]
    fn document_without_pages_has_no_atlas_text() {
        assert_eq!(texture_atlas_text(&document("[]"), true), "");
    }
}
