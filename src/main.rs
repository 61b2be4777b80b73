use actix_cors::Cors;
use actix_web::{http, middleware, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use store::ActivityStore;

mod api;
mod config;
mod store;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    config.log();

    let store = web::Data::new(ActivityStore::seeded());

    let addr = config.addr();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(["GET", "POST", "DELETE"])
            .allowed_headers([http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(store.clone())
            .service(web::scope("/activities").configure(api::activities::config))
            .default_service(web::to(api::not_found))
    })
    .bind(&addr)?
    .run();

    tracing::info!("binding on {}", addr);

    server.await?;

    Ok(())
}
