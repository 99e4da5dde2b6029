#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_web::{
        body::MessageBody,
        dev::{Service, ServiceResponse},
        http::header,
        test,
        web::Data,
        App, Error,
    };
    use chrono::{Duration, Utc};
    use serde::Serialize;

    use db::{models::Question, new_pool, Connection};

    use crate::routes::routes;

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(new_pool()))
                .configure(routes),
        )
        .await
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get(route: &str) -> (u16, String) {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route).to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Helper for HTTP POST integration tests, returns the Location header
    /// alongside the body so redirects can be asserted on
    pub async fn test_post<T: Serialize>(route: &str, params: T) -> (u16, Option<String>, String) {
        let app = get_service().await;
        let req = test::TestRequest::post()
            .set_form(&params)
            .uri(route)
            .to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = test::read_body(res).await;

        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Creates a question published the given number of days offset to now,
    /// negative for the past, positive for questions not published yet
    pub fn create_question(conn: &mut Connection, question_text: &str, days: i64) -> Question {
        Question::create(
            conn,
            question_text.to_string(),
            Utc::now() + Duration::days(days),
        )
        .unwrap()
    }
}
