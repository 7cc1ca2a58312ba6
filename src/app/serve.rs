use anyhow::Context;
use tower_http::trace::TraceLayer;

use super::arg::ServeCommand;

pub fn serve(args: &ServeCommand) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime failed")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: &ServeCommand) -> anyhow::Result<()> {
    let app = crate::web::router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding to {} failed", args.bind))?;
    let address = listener.local_addr()?;

    tracing::info!(%address, "server started");
    eprintln!("Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(?error, "listening for shutdown signal failed");
        std::future::pending::<()>().await;
    }
}
