use diesel::pg::PgConnection;
use diesel::{self, ExpressionMethods, Insertable, Queryable, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::choices;

#[derive(Debug, Deserialize, Queryable, Serialize)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &mut PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn for_question(
        conn: &mut PgConnection,
        for_question_id: i32,
    ) -> Result<Vec<Choice>, Error> {
        use crate::schema::choices::dsl::{choices, id, question_id};

        let results = choices
            .filter(question_id.eq(for_question_id))
            .order(id)
            .load::<Choice>(conn)?;

        Ok(results)
    }

    // the question_id filter keeps a vote from landing on another question's
    // choice; a miss comes back as NotFound
    pub fn add_vote(
        conn: &mut PgConnection,
        for_question_id: i32,
        choice_id: i32,
    ) -> Result<Choice, Error> {
        use crate::schema::choices::dsl::{choices, id, question_id, votes};

        let choice = diesel::update(
            choices
                .filter(id.eq(choice_id))
                .filter(question_id.eq(for_question_id)),
        )
        .set(votes.eq(votes + 1))
        .get_result(conn)?;

        Ok(choice)
    }
}
