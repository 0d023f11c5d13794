use std::net::SocketAddr;

use anyhow::Context;
use log::info;
use user_directory::{config::Config, db::Db, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_thread_ids(true)
        .with_max_level(config.log_level)
        .init();

    info!("started");

    let db = Db::open(config.database.path.as_deref()).context("failed to open database")?;
    let app = router(db);

    let addr = config.server.bind_addr()?;
    info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .with_context(|| format!("failed to bind {}", addr))?
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("server error")?;

    Ok(())
}
