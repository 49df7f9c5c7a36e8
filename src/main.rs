#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::contact::{ContactMailer, ResendMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match config::SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail("invalid configuration", &e),
    };

    let mailer: Option<Arc<dyn ContactMailer>> = match &config.mail {
        Some(mail) => {
            tracing::info!(to = %mail.to, "contact delivery enabled");
            let mailer: Arc<dyn ContactMailer> = Arc::new(ResendMailer::new(mail));
            Some(mailer)
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set; contact requests will be rejected");
            None
        }
    };
    let state = state::AppState::new(mailer);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => fail("router setup failed", &e),
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => fail("failed to bind", &e),
    };

    tracing::info!(%port, "parket listening");
    if let Err(e) = axum::serve(listener, app).await {
        fail("server failed", &e);
    }
}

fn fail(context: &str, err: &dyn std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}
