use crate::{Item, TagKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tags hidden from a dataset's filter buttons. Matching still sees them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopWords {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub items: Vec<Item>,
    pub stop_types: BTreeSet<String>,
    pub stop_modifiers: BTreeSet<String>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            stop_types: BTreeSet::new(),
            stop_modifiers: BTreeSet::new(),
        }
    }

    pub fn with_stop_words(mut self, stop: &StopWords) -> Self {
        self.stop_types = stop.types.iter().map(|t| t.trim().to_string()).collect();
        self.stop_modifiers = stop
            .modifiers
            .iter()
            .map(|m| m.trim().to_string())
            .collect();
        self
    }

    /// Sorted, deduplicated type tags that get a filter button.
    pub fn visible_types(&self) -> Vec<String> {
        self.visible_tags(TagKind::Type)
    }

    /// Sorted, deduplicated modifier tags that get a filter button.
    pub fn visible_modifiers(&self) -> Vec<String> {
        self.visible_tags(TagKind::Modifier)
    }

    pub fn visible_tags(&self, kind: TagKind) -> Vec<String> {
        let stop = match kind {
            TagKind::Type => &self.stop_types,
            TagKind::Modifier => &self.stop_modifiers,
        };
        let tags: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| match kind {
                TagKind::Type => item.types.iter(),
                TagKind::Modifier => item.modifiers.iter(),
            })
            .map(String::as_str)
            .filter(|tag| !stop.contains(*tag))
            .collect();
        tags.into_iter().map(str::to_string).collect()
    }
}
