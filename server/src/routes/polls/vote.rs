use actix_web::{
    http::header::{self, ContentType},
    web::{block, Data, Form, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Choice, PgPool};
use errors::Error;

use crate::handlers::{get_question_page, render_detail_form};

const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

#[derive(Clone, Deserialize, Serialize)]
pub struct VoteForm {
    choice: Option<i32>,
}

pub async fn vote(
    question_id: Path<i32>,
    pool: Data<PgPool>,
    params: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();

    let connection = get_conn(&pool)?;
    let (question, choices) = get_question_page(connection, question_id).await?;

    let choice_id = match params.choice {
        Some(choice_id) => choice_id,
        None => {
            let html = render_detail_form(&question, &choices, Some(NO_CHOICE_MESSAGE))?;
            return Ok(HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(html));
        }
    };

    let mut conn = get_conn(&pool)?;
    let res = block(move || Choice::add_vote(&mut conn, question_id, choice_id)).await?;

    match res {
        Ok(_) => Ok(HttpResponse::Found()
            .append_header((
                header::LOCATION,
                format!("/polls/{}/results/", question_id),
            ))
            .finish()),
        Err(Error::NotFound(_)) => {
            // a choice id that doesn't belong to this question reads the same
            // as no choice at all
            let html = render_detail_form(&question, &choices, Some(NO_CHOICE_MESSAGE))?;
            Ok(HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(html))
        }
        Err(err) => Err(err),
    }
}
