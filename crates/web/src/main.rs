mod api;
mod config;

use api::{apply_action, build_response, ActionRequest, ApiResponse, AppState};
use config::WebConfig;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tagdraw_core::SessionConfig;
use tagdraw_data::load_datasets;
use tiny_http::{Header, Method, Response, Server, StatusCode};
use tracing_subscriber::filter::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config = match WebConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(2);
        }
    };
    let datasets = match load_datasets(&config.assets_dir) {
        Ok(datasets) => datasets,
        Err(err) => {
            tracing::error!("failed to load datasets: {err:#}");
            std::process::exit(1);
        }
    };
    let server = match Server::http(&config.addr) {
        Ok(server) => server,
        Err(err) => {
            tracing::error!(addr = %config.addr, "failed to start server: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!("tagdraw web server on http://{}", config.addr);

    let session_config = SessionConfig {
        ghost_duration: config.ghost_duration,
    };
    let state = Arc::new(Mutex::new(AppState::new(datasets, config.seed, session_config)));
    for request in server.incoming_requests() {
        let state = state.clone();
        if let Err(err) = handle_request(request, state, &config.web_dir) {
            tracing::warn!("request error: {err}");
        }
    }
}

fn handle_request(
    mut request: tiny_http::Request,
    state: Arc<Mutex<AppState>>,
    web_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    tracing::debug!(?method, %url, "request");
    match (&method, url.as_str()) {
        (&Method::Get, "/") => {
            respond_with_file(request, &web_dir.join("index.html"), "text/html; charset=utf-8")?;
        }
        (&Method::Get, "/app.js") => {
            respond_with_file(request, &web_dir.join("app.js"), "application/javascript")?;
        }
        (&Method::Get, "/styles.css") => {
            respond_with_file(request, &web_dir.join("styles.css"), "text/css; charset=utf-8")?;
        }
        (&Method::Get, "/api/state") => {
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            let response = build_response(&mut guard, None, Instant::now());
            respond_json(request, response)?;
        }
        (&Method::Post, "/api/action") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let action: ActionRequest = match serde_json::from_str(&body) {
                Ok(action) => action,
                Err(err) => {
                    let response = Response::from_string(format!("bad request: {err}"))
                        .with_status_code(StatusCode(400));
                    request.respond(response)?;
                    return Ok(());
                }
            };
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let err = apply_action(&mut guard, action, now);
            if let Some(err) = err.as_deref() {
                tracing::info!("action rejected: {err}");
            }
            let response = build_response(&mut guard, err, now);
            respond_json(request, response)?;
        }
        _ => {
            let response = Response::empty(StatusCode(404));
            request.respond(response)?;
        }
    }
    Ok(())
}

fn respond_with_file(
    request: tiny_http::Request,
    path: &Path,
    content_type: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read(path)?;
    let header = Header::from_bytes(&b"Content-Type"[..], content_type)
        .map_err(|_| "invalid content type header")?;
    let response = Response::from_data(content).with_header(header);
    request.respond(response)?;
    Ok(())
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "invalid content type header")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}
