use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionType {
    Play,
    Frame,
    Sound,
}
impl Default for ActionType {
    fn default() -> Self {
        Self::Play
    }
}

impl<'de> Deserialize<'de> for ActionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        // Older exporters write the tag as a string, newer ones as a number
        let value: Value = Deserialize::deserialize(deserializer)?;
        match &value {
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(ActionType::Play),
                Some(10) => Ok(ActionType::Frame),
                Some(11) => Ok(ActionType::Sound),
                _ => Err(serde::de::Error::custom(format!("Unexpected action type {}", n)))
            },
            Value::String(s) => match s.as_str() {
                "play" => Ok(ActionType::Play),
                "frame" => Ok(ActionType::Frame),
                "sound" => Ok(ActionType::Sound),
                _ => Err(serde::de::Error::custom(format!("Unexpected action type \"{}\"", s)))
            },
            _ => Err(serde::de::Error::custom("Unexpected JSON field type! Number or string expected"))
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct RawActionData {
    #[serde(rename = "type")]
    #[serde(default)]
    pub action_type: ActionType,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "bone")]
    #[serde(default)]
    pub bone_name: String,
    #[serde(rename = "slot")]
    #[serde(default)]
    pub slot_name: String,
    #[serde(rename = "ints")]
    #[serde(default)]
    pub user_ints: Vec<i64>,
    #[serde(rename = "floats")]
    #[serde(default)]
    pub user_floats: Vec<f64>,
    #[serde(rename = "strings")]
    #[serde(default)]
    pub user_strings: Vec<String>
}

impl RawActionData {
    pub fn named(action_type: ActionType, name: &str) -> Self {
        Self {
            action_type,
            name: name.to_string(),
            ..Default::default()
        }
    }
}
