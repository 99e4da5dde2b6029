use chrono::{DateTime, Duration, Utc};
use diesel::pg::PgConnection;
use diesel::{self, ExpressionMethods, Insertable, Queryable, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Debug, Deserialize, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &mut PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    // a question only counts as published once its pub_date has passed
    pub fn get_published(conn: &mut PgConnection) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{pub_date, questions};

        let published = questions
            .filter(pub_date.le(Utc::now()))
            .order(pub_date.desc())
            .load::<Question>(conn)?;

        Ok(published)
    }

    pub fn find_published(conn: &mut PgConnection, question_id: i32) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, pub_date, questions};

        let question = questions
            .filter(id.eq(question_id))
            .filter(pub_date.le(Utc::now()))
            .first::<Question>(conn)?;

        Ok(question)
    }

    pub fn was_published_recently(&self) -> bool {
        let now = Utc::now();
        self.pub_date >= now - Duration::days(1) && self.pub_date <= now
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::Question;

    fn question_published_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn was_published_recently_is_false_for_future_question() {
        let question = question_published_at(Utc::now() + Duration::days(30));
        assert_eq!(question.was_published_recently(), false);
    }

    #[test]
    fn was_published_recently_is_false_for_old_question() {
        let question =
            question_published_at(Utc::now() - Duration::days(1) - Duration::seconds(1));
        assert_eq!(question.was_published_recently(), false);
    }

    #[test]
    fn was_published_recently_is_true_for_recent_question() {
        let question = question_published_at(
            Utc::now() - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59),
        );
        assert_eq!(question.was_published_recently(), true);
    }
}
