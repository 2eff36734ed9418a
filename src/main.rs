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

        use crate::server::{
            config::Config,
            scheduler::{livery_review, maintenance},
            service::{auth::token::TokenService, review::LlmReviewer},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session_store = startup::connect_to_session_store(&db).await?;
        let session = startup::session_layer(session_store.clone(), &config);
        let http_client = startup::setup_reqwest_client()?;
        let storage = startup::setup_storage(&config)?;

        tracing::info!("Starting server");

        maintenance::start_scheduler(db.clone(), session_store).await?;

        match config.llm.clone() {
            Some(llm) => {
                livery_review::start_scheduler(
                    db.clone(),
                    LlmReviewer::new(http_client.clone(), llm),
                    &config.review_schedule,
                    chrono::Duration::seconds(config.review_min_age_secs as i64),
                )
                .await?
            }
            None => tracing::warn!(
                "LLM_API_URL is not set, automated livery review is disabled; \
                 pending liveries must be reviewed by an admin"
            ),
        }

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                TokenService::new(&config.jwt_secret),
                storage,
                config.app_url.clone(),
                config.admin_email.clone(),
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
