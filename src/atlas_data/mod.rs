use serde::Deserialize;

/// One DragonBones texture atlas page (`*_tex.json`).
#[derive(Clone, Deserialize, Debug, Default)]
pub struct TextureAtlas {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "imagePath")]
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(rename = "SubTexture")]
    #[serde(default)]
    pub sub_textures: Vec<SubTexture>,
}

impl TextureAtlas {
    pub fn parse(raw_bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw_bytes)
    }

    pub fn sub_texture(&self, name: &str) -> Option<&SubTexture> {
        self.sub_textures.iter().find(|it| it.name.eq(name))
    }
}

/// A packed region. The `frame_*` fields describe the untrimmed image and are
/// zero when the exporter did not trim it.
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
pub struct SubTexture {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(rename = "frameX")]
    #[serde(default)]
    pub frame_x: f64,
    #[serde(rename = "frameY")]
    #[serde(default)]
    pub frame_y: f64,
    #[serde(rename = "frameWidth")]
    #[serde(default)]
    pub frame_width: f64,
    #[serde(rename = "frameHeight")]
    #[serde(default)]
    pub frame_height: f64,
    #[serde(default)]
    pub rotated: bool,
}

impl SubTexture {
    /// Untrimmed size, falling back to the packed size per axis.
    pub fn original_size(&self) -> (f64, f64) {
        (
            if self.frame_width != 0.0 { self.frame_width } else { self.width },
            if self.frame_height != 0.0 { self.frame_height } else { self.height },
        )
    }

    /// Spine offset of the packed region inside the untrimmed image, measured
    /// from the bottom-left corner.
    pub fn offset(&self) -> (f64, f64) {
        let y = if self.frame_height > 0.0 {
            let packed_height = if self.rotated { self.width } else { self.height };
            self.frame_height + self.frame_y - packed_height
        } else {
            0.0
        };
        (-self.frame_x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_keeps_sub_texture_order() {
        let atlas = TextureAtlas::parse(br#"{
            "name": "hero", "imagePath": "hero_tex.png", "width": 256, "height": 128,
            "SubTexture": [
                {"name": "b", "x": 0, "y": 0, "width": 10, "height": 20},
                {"name": "a", "x": 10, "y": 0, "width": 30, "height": 40, "rotated": true}
            ]
        }"#).unwrap();
        assert_eq!(atlas.width, 256.0);
        assert_eq!(atlas.sub_textures[0].name, "b");
        assert_eq!(atlas.sub_textures[1].name, "a");
        assert!(atlas.sub_texture("a").unwrap().rotated);
        assert!(atlas.sub_texture("c").is_none());
    }

    #[test]
    fn trimmed_region_reports_original_size_and_offset() {
        let sub = SubTexture {
            name: "arm".into(),
            width: 20.0,
            height: 30.0,
            frame_x: -4.0,
            frame_y: -6.0,
            frame_width: 28.0,
            frame_height: 40.0,
            ..Default::default()
        };
        assert_eq!(sub.original_size(), (28.0, 40.0));
        assert_eq!(sub.offset(), (4.0, 4.0));
    }

    #[test]
    fn untrimmed_region_falls_back_to_packed_size() {
        let sub = SubTexture { name: "leg".into(), width: 12.0, height: 18.0, ..Default::default() };
        assert_eq!(sub.original_size(), (12.0, 18.0));
        assert_eq!(sub.offset(), (-0.0, 0.0));
    }
}
