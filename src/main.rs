#![warn(clippy::all)]

use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;

use trivia::{build_routes, config::Config, store::Store};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::parse();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},trivia={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = Store::new(&config.db_url()).await;

    sqlx::migrate!()
        .run(&store.clone().connection)
        .await
        .expect("Cannot run migration");

    let routes = build_routes(store);

    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
