use actix_web::{web, HttpResponse, Responder};
use common::model::config::ClientConfig;

pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use actix_web::test as actix_test;
    use actix_web::{web, App};
    use common::model::config::ClientConfig;

    #[actix_web::test]
    async fn returns_client_config_as_camel_case_json() {
        let config = ClientConfig {
            terms_document_url: Some("/terms.pdf".to_string()),
            ..ClientConfig::default()
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
            .await;

        let req = actix_test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["siteDataUrl"], "/workflows/site-data");
        assert_eq!(body["submissionUrl"], "/workflows/induction-submission");
        assert_eq!(body["termsDocumentUrl"], "/terms.pdf");
        assert_eq!(body["defaultSite"], "JSBHQ");
    }
}
