use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ma_boite::{config, content, db, handlers, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ma_boite=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_database_path();
  let pool = db::init_db(&db_path).expect("Failed to initialize database");

  let catalog_dir = config::load_catalog_dir();
  let catalog = content::load_catalog(&catalog_dir).expect("Failed to load content catalog");
  tracing::info!(
    "Loaded {} categories from {}",
    catalog.categories.len(),
    catalog_dir.display()
  );

  let state = AppState::new(pool, catalog, config::load_local_progress_path());

  let app = handlers::router(state)
    .nest_service("/static", ServeDir::new("static"))
    .layer(TraceLayer::new_for_http());

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
