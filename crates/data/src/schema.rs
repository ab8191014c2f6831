use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use tagdraw_core::{Dataset, Item, StopWords};

/// One entry of `datasets.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub name: String,
    pub file: String,
}

/// `stop_words.json`: dataset name to hidden tags.
pub type StopWordsConfig = BTreeMap<String, StopWords>;

/// A card's `type` as written in the JSON files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TypeField {
    One(String),
    Many(Vec<String>),
}

impl TypeField {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            Self::One(raw) => tagdraw_core::split_type_tags(&raw),
            Self::Many(list) => tagdraw_core::normalize_tags(list),
        }
    }
}

/// A card before normalisation. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<TypeField>,
    #[serde(default)]
    pub modifiers: Option<Vec<String>>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub count: Option<u32>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        Item {
            name: raw.name.unwrap_or_default(),
            types: raw.kind.map(TypeField::into_tags).unwrap_or_default(),
            modifiers: tagdraw_core::normalize_tags(raw.modifiers.unwrap_or_default()),
            cost: raw.cost,
            count: raw.count,
        }
    }
}
