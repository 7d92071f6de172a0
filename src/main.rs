use anyhow::Context;
use dotenv::dotenv;
use sparktask_rest::persistence::FileTodoStore;
use sparktask_rest::routes;
use sparktask_rest::{app_env, logging};
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let otel_exporters = match (
        env::var(app_env::OTEL_SPAN_EXPORT_URL),
        env::var(app_env::OTEL_METRIC_EXPORT_URL),
    ) {
        (Ok(span_url), Ok(metric_url)) => Some(logging::init_exporters(&span_url, &metric_url)),
        _ => None,
    };
    logging::setup_logging_and_tracing(logging::init_env_filter(), otel_exporters);

    let data_file = env::var(app_env::DATA_FILE).unwrap_or_else(|_| String::from("userdata.json"));
    let store = FileTodoStore::new(&data_file);
    store
        .initialize()
        .await
        .context("preparing the data storage file")?;

    let app = logging::attach_tracing_http(
        routes::todo_routes(Arc::new(store)).merge(routes::build_documentation()),
    );

    let listen_addr =
        env::var(app_env::LISTEN_ADDR).unwrap_or_else(|_| String::from("0.0.0.0:3001"));
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("binding to {listen_addr}"))?;
    info!(%listen_addr, %data_file, "SparkTask server started");

    axum::serve(listener, app)
        .await
        .context("serving HTTP traffic")?;
    Ok(())
}
