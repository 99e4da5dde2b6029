use actix_web::{
    http::header::ContentType,
    web::{Data, Path},
    HttpResponse, Result,
};
use tera::Context;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::get_question_page;
use crate::templates;

pub async fn results(question_id: Path<i32>, pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();

    let connection = get_conn(&pool)?;
    let (question, choices) = get_question_page(connection, question_id).await?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("choices", &choices);
    let html = templates::render("results.html", &context)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
