mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        startup::prepare_database(&db).await?;

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router().with_state(AppState::new(db));
        router = router.merge(server_routes);

        Ok(router)
    })
}
