use crate::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LogicMode {
    #[default]
    All,
    Any,
}

impl LogicMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Any,
            Self::Any => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "AND",
            Self::Any => "OR",
        }
    }

    fn matches(self, selected: &BTreeSet<String>, has: impl Fn(&str) -> bool) -> bool {
        match self {
            Self::All => selected.iter().all(|tag| has(tag)),
            Self::Any => selected.iter().any(|tag| has(tag)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TagKind {
    Type,
    Modifier,
}

impl TagKind {
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "type" | "types" => Some(Self::Type),
            "modifier" | "modifiers" | "mod" => Some(Self::Modifier),
            _ => None,
        }
    }
}

/// Checkbox state of one dataset panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub types: BTreeSet<String>,
    pub modifiers: BTreeSet<String>,
    pub logic: LogicMode,
}

impl Selection {
    /// Adds the tag if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle_tag(&mut self, kind: TagKind, tag: &str) -> bool {
        let set = self.tags_mut(kind);
        if set.remove(tag) {
            false
        } else {
            set.insert(tag.to_string());
            true
        }
    }

    pub fn toggle_logic_mode(&mut self) -> LogicMode {
        self.logic = self.logic.toggled();
        self.logic
    }

    pub fn is_selected(&self, kind: TagKind, tag: &str) -> bool {
        match kind {
            TagKind::Type => self.types.contains(tag),
            TagKind::Modifier => self.modifiers.contains(tag),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.modifiers.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.modifiers.clear();
    }

    pub fn filter<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        filter_items(items, &self.types, &self.modifiers, self.logic)
    }

    fn tags_mut(&mut self, kind: TagKind) -> &mut BTreeSet<String> {
        match kind {
            TagKind::Type => &mut self.types,
            TagKind::Modifier => &mut self.modifiers,
        }
    }
}

/// Items passing both the type and the modifier test, in dataset order.
pub fn filter_items<'a>(
    items: &'a [Item],
    types: &BTreeSet<String>,
    modifiers: &BTreeSet<String>,
    logic: LogicMode,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_types(item, types, logic) && matches_modifiers(item, modifiers, logic))
        .collect()
}

/// Items carrying exactly `tag`, regardless of any checkbox state.
pub fn filter_single_tag<'a>(items: &'a [Item], kind: TagKind, tag: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| match kind {
            TagKind::Type => item.has_type(tag),
            TagKind::Modifier => item.has_modifier(tag),
        })
        .collect()
}

fn matches_types(item: &Item, selected: &BTreeSet<String>, logic: LogicMode) -> bool {
    if selected.is_empty() {
        return true;
    }
    logic.matches(selected, |tag| item.has_type(tag))
}

fn matches_modifiers(item: &Item, selected: &BTreeSet<String>, logic: LogicMode) -> bool {
    if selected.is_empty() {
        return true;
    }
    // An item without modifiers never satisfies a modifier filter, not even under ANY.
    if item.modifiers.is_empty() {
        return false;
    }
    logic.matches(selected, |tag| item.has_modifier(tag))
}
