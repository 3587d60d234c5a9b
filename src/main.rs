use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use sobek_play::config::{self, ProcessEnv, Requirements};
use sobek_play::http::{self, routes::AppState};
use sobek_play::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = config::source::load_dotenv(Path::new(".")).context("reading env file")?;
    telemetry::init(&ProcessEnv);
    for path in &env_files {
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    // Nothing below may run with a half-configured client.
    let requirements = Requirements::from_source(&ProcessEnv);
    config::validate(&ProcessEnv, &requirements)?;

    let state = AppState {
        source: Arc::new(ProcessEnv),
        requirements: Arc::new(requirements),
    };
    let app = http::router(state);

    let addr = config::server_addr(&ProcessEnv);
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
