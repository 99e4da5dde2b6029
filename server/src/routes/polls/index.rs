use actix_web::{
    http::header::ContentType,
    web::{block, Data},
    HttpResponse, Result,
};
use tera::Context;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::templates;

pub async fn index(pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let mut conn = get_conn(&pool)?;

    let res = block(move || Question::get_published(&mut conn)).await?;
    let latest_question_list = res?;

    let mut context = Context::new();
    context.insert("latest_question_list", &latest_question_list);
    let html = templates::render("index.html", &context)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
