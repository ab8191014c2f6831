use crate::{
    filter_single_tag, pick_weighted, Dataset, DrawSource, Event, EventBus, GhostTimer, Item,
    LogicMode, RngState, Selection, SessionError, TagKind, GHOST_DURATION,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ghost_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ghost_duration: GHOST_DURATION,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Showing(Item),
    NoMatchShown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DrawResult {
    Matched(Item),
    NoMatch,
}

impl DrawResult {
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Matched(item) => Some(item),
            Self::NoMatch => None,
        }
    }
}

/// One dataset together with its filter checkboxes.
#[derive(Debug, Clone)]
pub struct Panel {
    pub dataset: Dataset,
    pub selection: Selection,
}

/// Owns every piece of mutable state: per-dataset selections, the shown card, the
/// previous card and the ghost timer. All transitions are synchronous.
#[derive(Debug)]
pub struct SelectionSession {
    panels: Vec<Panel>,
    state: SessionState,
    previous: Option<Item>,
    ghost_timer: GhostTimer,
    draw_key: u64,
    rng: RngState,
    config: SessionConfig,
}

impl SelectionSession {
    pub fn new(datasets: Vec<Dataset>, rng: RngState) -> Self {
        Self::with_config(datasets, rng, SessionConfig::default())
    }

    pub fn with_config(datasets: Vec<Dataset>, rng: RngState, config: SessionConfig) -> Self {
        let panels = datasets
            .into_iter()
            .map(|dataset| Panel {
                dataset,
                selection: Selection::default(),
            })
            .collect();
        Self {
            panels,
            state: SessionState::Idle,
            previous: None,
            ghost_timer: GhostTimer::default(),
            draw_key: 0,
            rng,
            config,
        }
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, dataset: &str) -> Result<&Panel, SessionError> {
        self.panels
            .iter()
            .find(|panel| panel.dataset.name == dataset)
            .ok_or_else(|| SessionError::UnknownDataset(dataset.to_string()))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current(&self) -> Option<&Item> {
        match &self.state {
            SessionState::Showing(item) => Some(item),
            _ => None,
        }
    }

    pub fn previous(&self) -> Option<&Item> {
        self.previous.as_ref()
    }

    pub fn draw_key(&self) -> u64 {
        self.draw_key
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Time left on the fading ghost, if one is pending at `now`.
    pub fn ghost_remaining(&self, now: Instant) -> Option<Duration> {
        self.ghost_timer.remaining(now)
    }

    pub fn toggle_tag(
        &mut self,
        dataset: &str,
        kind: TagKind,
        tag: &str,
        events: &mut EventBus,
    ) -> Result<bool, SessionError> {
        let panel = self.panel_mut(dataset)?;
        let selected = panel.selection.toggle_tag(kind, tag);
        events.push(Event::TagToggled {
            dataset: dataset.to_string(),
            kind,
            tag: tag.to_string(),
            selected,
        });
        Ok(selected)
    }

    pub fn toggle_logic_mode(
        &mut self,
        dataset: &str,
        events: &mut EventBus,
    ) -> Result<LogicMode, SessionError> {
        let panel = self.panel_mut(dataset)?;
        let logic = panel.selection.toggle_logic_mode();
        events.push(Event::LogicToggled {
            dataset: dataset.to_string(),
            logic,
        });
        Ok(logic)
    }

    pub fn clear_selection(
        &mut self,
        dataset: &str,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        self.panel_mut(dataset)?.selection.clear();
        events.push(Event::SelectionCleared {
            dataset: dataset.to_string(),
        });
        Ok(())
    }

    /// Draws using the dataset's checkbox selection and logic mode.
    pub fn draw_from_dataset(
        &mut self,
        dataset: &str,
        now: Instant,
        events: &mut EventBus,
    ) -> Result<DrawResult, SessionError> {
        let idx = self.panel_index(dataset)?;
        let panel = &self.panels[idx];
        let eligible = panel.selection.filter(&panel.dataset.items);
        let count = eligible.len();
        let picked = pick_weighted(&eligible, &mut self.rng).cloned();
        Ok(self.settle(idx, DrawSource::Filters, picked, count, now, events))
    }

    /// Draws among items carrying `tag`, ignoring the checkbox selection.
    pub fn draw_from_single_tag(
        &mut self,
        dataset: &str,
        kind: TagKind,
        tag: &str,
        now: Instant,
        events: &mut EventBus,
    ) -> Result<DrawResult, SessionError> {
        let idx = self.panel_index(dataset)?;
        let eligible = filter_single_tag(&self.panels[idx].dataset.items, kind, tag);
        let count = eligible.len();
        let picked = pick_weighted(&eligible, &mut self.rng).cloned();
        let source = DrawSource::SingleTag {
            kind,
            tag: tag.to_string(),
        };
        Ok(self.settle(idx, source, picked, count, now, events))
    }

    /// Timer callback. Clears the fading ghost once its deadline has passed.
    pub fn tick(&mut self, now: Instant, events: &mut EventBus) -> bool {
        if !self.ghost_timer.fire(now) {
            return false;
        }
        if let Some(item) = self.previous.take() {
            tracing::debug!(name = %item.name, "ghost expired");
            events.push(Event::GhostExpired { name: item.name });
        }
        true
    }

    fn settle(
        &mut self,
        idx: usize,
        source: DrawSource,
        picked: Option<Item>,
        eligible: usize,
        now: Instant,
        events: &mut EventBus,
    ) -> DrawResult {
        // A deadline that passed without a tick still expires before this draw.
        self.tick(now, events);
        self.ghost_timer.cancel();
        let dataset = self.panels[idx].dataset.name.clone();
        match picked {
            Some(item) => {
                if let SessionState::Showing(shown) = std::mem::take(&mut self.state) {
                    self.previous = Some(shown);
                }
                self.draw_key += 1;
                tracing::debug!(%dataset, name = %item.name, eligible, "card selected");
                events.push(Event::CardSelected {
                    dataset,
                    source,
                    name: item.name.clone(),
                    eligible,
                    draw_key: self.draw_key,
                });
                self.state = SessionState::Showing(item.clone());
                DrawResult::Matched(item)
            }
            None => {
                let ghosted = match std::mem::replace(&mut self.state, SessionState::NoMatchShown) {
                    SessionState::Showing(shown) => {
                        self.previous = Some(shown);
                        self.ghost_timer.schedule(now, self.config.ghost_duration);
                        self.draw_key += 1;
                        true
                    }
                    _ => {
                        self.previous = None;
                        false
                    }
                };
                tracing::debug!(%dataset, ghosted, "no matching card");
                events.push(Event::NoMatch {
                    dataset,
                    source,
                    ghosted,
                });
                DrawResult::NoMatch
            }
        }
    }

    fn panel_index(&self, dataset: &str) -> Result<usize, SessionError> {
        self.panels
            .iter()
            .position(|panel| panel.dataset.name == dataset)
            .ok_or_else(|| SessionError::UnknownDataset(dataset.to_string()))
    }

    fn panel_mut(&mut self, dataset: &str) -> Result<&mut Panel, SessionError> {
        let idx = self.panel_index(dataset)?;
        Ok(&mut self.panels[idx])
    }
}
