//! Display instructions derived from a session. Nothing here mutates state.

use crate::{Item, LogicMode, Panel, SelectionSession, SessionState, TagKind};
use serde::Serialize;
use std::time::Instant;

/// Text printed on a rendered card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardFace {
    pub title: String,
    pub cost: Option<String>,
    pub count: Option<String>,
    pub type_line: String,
    pub modifier_line: Option<String>,
}

impl CardFace {
    pub fn from_item(item: &Item) -> Self {
        let cost = item
            .cost
            .filter(|cost| *cost != 0.0 && !cost.is_nan())
            .map(|cost| format!("{cost}$"));
        let modifier_line = (!item.modifiers.is_empty()).then(|| item.modifiers.join(", "));
        Self {
            title: item.name.clone(),
            cost,
            count: item.count.map(|count| count.to_string()),
            type_line: item.types.join(", "),
            modifier_line,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum GhostMode {
    /// Fading out behind the no-match message.
    Hiding,
    /// Resting behind a freshly drawn card.
    Static,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GhostView {
    pub face: CardFace,
    pub mode: GhostMode,
    pub remaining_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardView {
    pub card: Option<CardFace>,
    pub no_match: bool,
    pub ghost: Option<GhostView>,
    pub draw_key: u64,
}

pub fn present(session: &SelectionSession, now: Instant) -> CardView {
    let draw_key = session.draw_key();
    match session.state() {
        SessionState::Idle => CardView {
            card: None,
            no_match: false,
            ghost: None,
            draw_key,
        },
        SessionState::Showing(item) => CardView {
            card: Some(CardFace::from_item(item)),
            no_match: false,
            ghost: session.previous().map(|prev| GhostView {
                face: CardFace::from_item(prev),
                mode: GhostMode::Static,
                remaining_ms: None,
            }),
            draw_key,
        },
        SessionState::NoMatchShown => {
            // An expired deadline hides the ghost even before the timer callback has run.
            let ghost = session
                .previous()
                .zip(session.ghost_remaining(now))
                .map(|(prev, left)| GhostView {
                    face: CardFace::from_item(prev),
                    mode: GhostMode::Hiding,
                    remaining_ms: Some(left.as_millis() as u64),
                });
            CardView {
                card: None,
                no_match: true,
                ghost,
                draw_key,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagButton {
    pub tag: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PanelView {
    pub name: String,
    pub logic: LogicMode,
    pub logic_label: &'static str,
    pub types: Vec<TagButton>,
    pub modifiers: Vec<TagButton>,
}

impl PanelView {
    pub fn from_panel(panel: &Panel) -> Self {
        let buttons = |kind: TagKind| -> Vec<TagButton> {
            panel
                .dataset
                .visible_tags(kind)
                .into_iter()
                .map(|tag| TagButton {
                    selected: panel.selection.is_selected(kind, &tag),
                    tag,
                })
                .collect()
        };
        Self {
            name: panel.dataset.name.clone(),
            logic: panel.selection.logic,
            logic_label: panel.selection.logic.label(),
            types: buttons(TagKind::Type),
            modifiers: buttons(TagKind::Modifier),
        }
    }
}

pub fn present_panels(session: &SelectionSession) -> Vec<PanelView> {
    session.panels().iter().map(PanelView::from_panel).collect()
}
