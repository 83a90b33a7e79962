use crate::app::AppState;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;

mod api;
mod app;
mod auth;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration (.env first, then the process environment)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_tracing(&config.log_level);

    // 2️⃣ Build the listings API client
    let app = match AppState::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = ?e, "failed to build listings API client");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = app.config.bind_addr;
    tracing::info!(
        %addr,
        api = %app.config.api_base_url,
        workers = app.config.max_workers,
        "starting server"
    );

    let server = Server::bind(addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(error = %err, "request failed");
            }
            templates::html_error_response(err)
        }
    });

    match result {
        Ok(()) => tracing::info!("server shut down cleanly"),
        Err(e) => tracing::error!(error = %e, "server ended with error"),
    }
}
