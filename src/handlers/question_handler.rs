use std::{sync::Arc, time::Instant};

use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{resolve_question_count, GenerateFromTextRequest, PdfUploadForm},
        response::QuestionsResponse,
    },
};

#[post("/api/questions/from-pdf")]
pub async fn generate_from_pdf(
    state: web::Data<Arc<AppState>>,
    MultipartForm(form): MultipartForm<PdfUploadForm>,
) -> Result<HttpResponse, AppError> {
    if !state.mcq_service.nlp_available().await {
        return Err(AppError::NlpUnavailable);
    }

    let file_name = form.file.file_name.clone().unwrap_or_default();
    if file_name.is_empty() {
        return Err(AppError::ValidationError(
            "please select a PDF file to upload".to_string(),
        ));
    }
    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(AppError::ValidationError(
            "only PDF files are supported".to_string(),
        ));
    }
    let num_questions = resolve_question_count(form.num_questions.map(|n| n.0))?;

    log::info!("processing PDF file: {}", file_name);
    let document = state.document_service.extract_text(&form.file.data)?;

    let started = Instant::now();
    let questions = state
        .mcq_service
        .generate(&document.text, num_questions)
        .await?;
    let processing_time = started.elapsed().as_secs_f64();

    if questions.is_empty() {
        return Err(AppError::NoQuestionsGenerated(
            "the document may not contain enough suitable information".to_string(),
        ));
    }

    log::info!(
        "generated {} questions from {} in {:.2}s",
        questions.len(),
        file_name,
        processing_time
    );

    Ok(HttpResponse::Ok().json(QuestionsResponse::new(
        questions,
        processing_time,
        Some(document.pages_processed),
        document.text.len(),
    )))
}

#[post("/api/questions/from-text")]
pub async fn generate_from_text(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateFromTextRequest>,
) -> Result<HttpResponse, AppError> {
    if !state.mcq_service.nlp_available().await {
        return Err(AppError::NlpUnavailable);
    }

    let request = request.into_inner();
    request.validate()?;
    let num_questions = resolve_question_count(request.num_questions)?;

    let started = Instant::now();
    let questions = state
        .mcq_service
        .generate(&request.text, num_questions)
        .await?;
    let processing_time = started.elapsed().as_secs_f64();

    if questions.is_empty() {
        return Err(AppError::NoQuestionsGenerated(
            "the text may not contain enough suitable information".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(QuestionsResponse::new(
        questions,
        processing_time,
        None,
        request.text.len(),
    )))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let nlp_ok = state.mcq_service.nlp_available().await;

    let status = if nlp_ok { "ready" } else { "not_ready" };
    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "nlp_engine": if nlp_ok { "ok" } else { "error" }
        }
    });

    if nlp_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::nlp::MockNlpEngine;
    use crate::test_utils::fixtures::einstein_analysis;
    use actix_web::{http::StatusCode, test, App};

    fn state_with(engine: MockNlpEngine) -> web::Data<Arc<AppState>> {
        web::Data::new(Arc::new(AppState::with_engine(
            Arc::new(engine),
            Config::test_config(),
        )))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_readiness_reflects_engine_availability() {
        let mut engine = MockNlpEngine::new();
        engine.expect_is_available().returning(|| false);

        let app = test::init_service(
            App::new()
                .app_data(state_with(engine))
                .service(health_check_ready),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_from_text_rejected_when_engine_down() {
        let mut engine = MockNlpEngine::new();
        engine.expect_is_available().returning(|| false);
        engine.expect_analyze().never();

        let app = test::init_service(
            App::new()
                .app_data(state_with(engine))
                .service(generate_from_text),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/from-text")
            .set_json(serde_json::json!({ "text": "Albert Einstein was born in Ulm." }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_from_text_generates_questions() {
        let mut engine = MockNlpEngine::new();
        engine.expect_is_available().returning(|| true);
        engine.expect_analyze().returning(|_| Ok(einstein_analysis()));

        let app = test::init_service(
            App::new()
                .app_data(state_with(engine))
                .service(generate_from_text),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/from-text")
            .set_json(serde_json::json!({
                "text": "Albert Einstein was born in Ulm. He won the Nobel Prize in 1921.",
                "num_questions": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 2);
        assert!(body.get("pages_processed").is_none());
    }

    #[actix_web::test]
    async fn test_from_text_rejects_out_of_range_count() {
        let mut engine = MockNlpEngine::new();
        engine.expect_is_available().returning(|| true);
        engine.expect_analyze().never();

        let app = test::init_service(
            App::new()
                .app_data(state_with(engine))
                .service(generate_from_text),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/from-text")
            .set_json(serde_json::json!({ "text": "some text", "num_questions": 99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
