use std::{net::SocketAddr, sync::Arc};

use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use dotenv::dotenv;
use sfie_api::{
    application::{
        http::server::http_server::{Metrics, router, state},
        logging::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;

    let (layer, handle) = PrometheusMetricLayer::pair();
    let router = router(state, Some(Metrics { layer, handle }))?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("listening on {addr}");

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
