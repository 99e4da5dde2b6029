use actix_web::web::block;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tera::Context;

use db::models::{Choice, Question};
use errors::Error;

use crate::templates;

pub async fn get_question_page(
    mut connection: PooledConnection<ConnectionManager<PgConnection>>,
    question_id: i32,
) -> Result<(Question, Vec<Choice>), Error> {
    let res = block(move || -> Result<(Question, Vec<Choice>), Error> {
        let question = Question::find_published(&mut connection, question_id)?;
        let choices = Choice::for_question(&mut connection, question.id)?;

        Ok((question, choices))
    })
    .await?;

    res
}

pub fn render_detail_form(
    question: &Question,
    choices: &[Choice],
    error_message: Option<&str>,
) -> Result<String, Error> {
    let mut context = Context::new();
    context.insert("question", question);
    context.insert("choices", choices);
    if let Some(error_message) = error_message {
        context.insert("error_message", error_message);
    }

    templates::render("detail.html", &context)
}
