use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use forum_server::application::comment_service::CommentService;
use forum_server::application::post_service::PostService;
use forum_server::infrastructure::config::AppConfig;
use forum_server::infrastructure::database::Store;
use forum_server::infrastructure::logging::init_logging;
use forum_server::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};
use forum_server::presentation::routes;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let store = Store::connect(&config).await?;

    let posts = store.post_repository();
    let post_service = PostService::new(posts.clone());
    let comment_service = CommentService::new(posts);

    let config_data = config.clone();
    info!(host = %config.host, port = config.port, "forum server starting");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(routes::build_cors(&config_data))
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(comment_service.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("forum server stopped");
    store.close().await;
    Ok(())
}
