mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    match services::auth::seed_default_admin(&pool).await {
        Ok(true) => tracing::info!(
            username = services::auth::DEFAULT_ADMIN_USERNAME,
            "seeded default admin user"
        ),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "default admin seed failed"),
    }

    let state = state::AppState::new(pool);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "horas penosas API listening");
    axum::serve(listener, app).await.expect("server failed");
}
