#[macro_use]
extern crate log;

use std::env;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod handlers;
mod routes;
mod templates;
mod tests;

use crate::routes::routes;
use db;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("starting polls server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
    })
    .bind(addr)?
    .run()
    .await
}
