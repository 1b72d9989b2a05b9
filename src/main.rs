use anyhow::Context;

use menu_catalog::{
    app,
    state::AppState,
    telemetry::{self, LogFormat},
    MIGRATOR,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(LogFormat::from_env());

    let app_state = AppState::init().await?;

    MIGRATOR
        .run(&app_state.db)
        .await
        .context("run migrations")?;

    let addr = app_state.config.bind_addr();
    let router = app::build_app(app_state);
    app::serve(router, &addr).await
}
