use crate::{LogicMode, TagKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Filters,
    SingleTag { kind: TagKind, tag: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardSelected {
        dataset: String,
        source: DrawSource,
        name: String,
        eligible: usize,
        draw_key: u64,
    },
    NoMatch {
        dataset: String,
        source: DrawSource,
        ghosted: bool,
    },
    GhostExpired { name: String },
    TagToggled {
        dataset: String,
        kind: TagKind,
        tag: String,
        selected: bool,
    },
    LogicToggled { dataset: String, logic: LogicMode },
    SelectionCleared { dataset: String },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
