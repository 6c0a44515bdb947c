pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{category, reply, topic, user};

use crate::config::AppConfig;
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, GetSubscriptionUseCase, GetTopicActivityUseCase,
    GetTopicParticipantsUseCase, SoftDeleteTopicUseCase, SubscribeTopicUseCase,
    UnsubscribeTopicUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, GetSubscriptionService, GetTopicActivityService,
    GetTopicParticipantsService, SoftDeleteTopicService, SubscribeTopicService,
    UnsubscribeTopicService,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub subscribe_topic_use_case: Arc<dyn SubscribeTopicUseCase + Send + Sync>,
    pub unsubscribe_topic_use_case: Arc<dyn UnsubscribeTopicUseCase + Send + Sync>,
    pub get_subscription_use_case: Arc<dyn GetSubscriptionUseCase + Send + Sync>,
    pub get_topic_participants_use_case: Arc<dyn GetTopicParticipantsUseCase + Send + Sync>,
    pub get_topic_activity_use_case: Arc<dyn GetTopicActivityUseCase + Send + Sync>,
    pub soft_delete_topic_use_case: Arc<dyn SoftDeleteTopicUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let server_url = config.server_url();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        create_topic_use_case: Arc::new(CreateTopicService::new(topic_repo.clone())),
        subscribe_topic_use_case: Arc::new(SubscribeTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        unsubscribe_topic_use_case: Arc::new(UnsubscribeTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        get_subscription_use_case: Arc::new(GetSubscriptionService::new(topic_query.clone())),
        get_topic_participants_use_case: Arc::new(GetTopicParticipantsService::new(
            topic_query.clone(),
        )),
        get_topic_activity_use_case: Arc::new(GetTopicActivityService::new(topic_query.clone())),
        soft_delete_topic_use_case: Arc::new(SoftDeleteTopicService::new(topic_query, topic_repo)),
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(shared::api::custom_json_config())
            .app_data(shared::api::custom_path_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::topic::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(routes::create_topic_handler);
    cfg.service(routes::soft_delete_topic_handler);
    cfg.service(routes::get_topic_participants_handler);
    cfg.service(routes::get_topic_activity_handler);
    // Subscriptions
    cfg.service(routes::subscribe_topic_handler);
    cfg.service(routes::get_subscription_handler);
    cfg.service(routes::unsubscribe_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
