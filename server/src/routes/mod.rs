use actix_web::{error, web, HttpResponse};

use errors::ErrorResponse;

pub mod polls;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    // a detail url with an unparseable id is as much a dead end as an
    // unknown url, so both answer 404
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        error::InternalError::from_response(
            err,
            HttpResponse::NotFound().json(ErrorResponse::from("Not Found")),
        )
        .into()
    }))
    .service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .route("/{question_id}/", web::get().to(polls::detail))
            .route("/{question_id}/results/", web::get().to(polls::results))
            .route("/{question_id}/vote/", web::post().to(polls::vote)),
    )
    .default_service(web::route().to(not_found));
}
