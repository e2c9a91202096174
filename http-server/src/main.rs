mod config;
mod router;

use axum::Extension;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("unable to build the pcloud client")]
    Client(#[from] pcloud_facade::BuildError),
    #[error("unable to run the http server")]
    Io(#[from] std::io::Error),
}

fn init_logs() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(concat!(
            env!("CARGO_CRATE_NAME"),
            "=debug,pcloud_facade=debug,tower_http=debug"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received termination signal, shutting down"),
        Err(err) => {
            tracing::error!("unable to listen for termination signal: {err:?}");
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logs();

    let config = config::Config::parse();
    let client = config.build_client()?;
    tracing::info!("forwarding requests to {}", client.base_url());

    tracing::info!("accepting uploads up to {} bytes", config.max_upload_size());

    let app = router::router(config.max_upload_size())
        .layer(Extension(client))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
