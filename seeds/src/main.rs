use chrono::Utc;
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let mut conn = get_conn(&pool).unwrap();

    for (question_text, choices) in &[
        (
            "What's new?",
            vec!["Not much", "The sky", "Just hacking again"],
        ),
        (
            "What's your favourite text editor?",
            vec!["vim", "emacs", "Something else entirely"],
        ),
    ] {
        let question = Question::create(&mut conn, question_text.to_string(), Utc::now()).unwrap();
        for choice_text in choices {
            Choice::create(&mut conn, question.id, choice_text.to_string()).unwrap();
        }
    }
}
