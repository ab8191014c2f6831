use serde::{Deserialize, Serialize};
use std::time::Instant;
use tagdraw_core::{
    present, present_panels, CardView, Dataset, EventBus, PanelView, RngState, SelectionSession,
    SessionConfig, TagKind,
};

pub struct AppState {
    datasets: Vec<Dataset>,
    seed: Option<u64>,
    config: SessionConfig,
    pub session: SelectionSession,
    pub events: EventBus,
}

impl AppState {
    pub fn new(datasets: Vec<Dataset>, seed: Option<u64>, config: SessionConfig) -> Self {
        let session = new_session(&datasets, seed, &config);
        tracing::info!(seed = session.seed(), datasets = datasets.len(), "session ready");
        Self {
            datasets,
            seed,
            config,
            session,
            events: EventBus::default(),
        }
    }

    fn reset(&mut self) {
        self.session = new_session(&self.datasets, self.seed, &self.config);
        self.events = EventBus::default();
        tracing::info!(seed = self.session.seed(), "session reset");
    }
}

fn new_session(datasets: &[Dataset], seed: Option<u64>, config: &SessionConfig) -> SelectionSession {
    let rng = match seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    SelectionSession::with_config(datasets.to_vec(), rng, config.clone())
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub panels: Vec<PanelView>,
    pub view: CardView,
    pub events: Vec<tagdraw_core::Event>,
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Fires the ghost timer if due, then snapshots the session.
pub fn build_response(state: &mut AppState, err: Option<String>, now: Instant) -> ApiResponse {
    state.session.tick(now, &mut state.events);
    let events: Vec<_> = state.events.drain().collect();
    ApiResponse {
        ok: err.is_none(),
        error: err,
        panels: present_panels(&state.session),
        view: present(&state.session, now),
        events,
    }
}

/// Applies one user action. Returns an error message, leaving the session untouched, when
/// the request is malformed or names an unknown dataset.
pub fn apply_action(state: &mut AppState, req: ActionRequest, now: Instant) -> Option<String> {
    let session = &mut state.session;
    let events = &mut state.events;
    match req.action.as_str() {
        "reset" => {
            state.reset();
            None
        }
        "tick" => {
            session.tick(now, events);
            None
        }
        "draw" => {
            let dataset = match required(&req.dataset, "dataset") {
                Ok(value) => value,
                Err(err) => return Some(err),
            };
            session
                .draw_from_dataset(dataset, now, events)
                .map_err(|err| err.to_string())
                .err()
        }
        "draw_tag" => {
            let (dataset, kind, tag) = match tag_target(&req) {
                Ok(target) => target,
                Err(err) => return Some(err),
            };
            session
                .draw_from_single_tag(dataset, kind, tag, now, events)
                .map_err(|err| err.to_string())
                .err()
        }
        "toggle_tag" => {
            let (dataset, kind, tag) = match tag_target(&req) {
                Ok(target) => target,
                Err(err) => return Some(err),
            };
            session
                .toggle_tag(dataset, kind, tag, events)
                .map_err(|err| err.to_string())
                .err()
        }
        "toggle_logic" => {
            let dataset = match required(&req.dataset, "dataset") {
                Ok(value) => value,
                Err(err) => return Some(err),
            };
            session
                .toggle_logic_mode(dataset, events)
                .map_err(|err| err.to_string())
                .err()
        }
        "clear" => {
            let dataset = match required(&req.dataset, "dataset") {
                Ok(value) => value,
                Err(err) => return Some(err),
            };
            session
                .clear_selection(dataset, events)
                .map_err(|err| err.to_string())
                .err()
        }
        _ => Some("unknown action".to_string()),
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, String> {
    value.as_deref().ok_or_else(|| format!("missing {field}"))
}

fn tag_target(req: &ActionRequest) -> Result<(&str, TagKind, &str), String> {
    let dataset = required(&req.dataset, "dataset")?;
    let kind = required(&req.kind, "kind")?;
    let kind = TagKind::from_keyword(kind).ok_or_else(|| format!("invalid kind: {kind}"))?;
    let tag = required(&req.tag, "tag")?;
    Ok((dataset, kind, tag))
}
