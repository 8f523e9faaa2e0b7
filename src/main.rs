use std::env;
use std::net::SocketAddr;

use rides::server::serve;
use rides::store::RideStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_uri = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(8010);

    let store = RideStore::new(db_uri);

    serve(store, SocketAddr::from(([127, 0, 0, 1], port))).await;
}
