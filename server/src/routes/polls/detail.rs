use actix_web::{
    http::header::ContentType,
    web::{Data, Path},
    HttpResponse, Result,
};

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::{get_question_page, render_detail_form};

pub async fn detail(question_id: Path<i32>, pool: Data<PgPool>) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();

    let connection = get_conn(&pool)?;
    let (question, choices) = get_question_page(connection, question_id).await?;

    let html = render_detail_form(&question, &choices, None)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
