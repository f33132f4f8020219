pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::notifications::handlers as notifications;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Matching
        .route("/api/v1/matches", post(matching::handle_rank_matches))
        .route("/api/v1/matches/score", post(matching::handle_score_match))
        // Writing assistants
        .route(
            "/api/v1/assist/cover-letter",
            post(assist::handle_cover_letter),
        )
        .route(
            "/api/v1/assist/interview-questions",
            post(assist::handle_interview_questions),
        )
        .route(
            "/api/v1/assist/optimize-job",
            post(assist::handle_optimize_job),
        )
        .route(
            "/api/v1/assist/parse-resume",
            post(assist::handle_parse_resume),
        )
        // Notifications
        .route(
            "/api/v1/notifications",
            get(notifications::handle_list_notifications)
                .post(notifications::handle_add_notification)
                .delete(notifications::handle_clear_notifications),
        )
        .route(
            "/api/v1/notifications/read-all",
            post(notifications::handle_mark_all_read),
        )
        .route(
            "/api/v1/notifications/:id/read",
            patch(notifications::handle_mark_read),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(notifications::handle_remove_notification),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::fixtures::sample_applicant;
    use crate::llm_client::testing::{CannedGenerator, FailingGenerator};
    use crate::llm_client::DisabledGenerator;

    fn app() -> Router {
        build_router(AppState::for_tests(Arc::new(DisabledGenerator)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(app(), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["service"], "jobmatch-api");
        assert_eq!(body["generator"], "disabled");
    }

    #[tokio::test]
    async fn test_list_jobs_with_filters() {
        let response = send(app(), Method::GET, "/api/v1/jobs?remote=remote", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(body["total"].as_u64().unwrap(), jobs.len() as u64);
        assert!(jobs.iter().all(|j| j["remote"] == "remote"));
    }

    #[tokio::test]
    async fn test_get_job_and_unknown_job() {
        let response = send(app(), Method::GET, "/api/v1/jobs/job-1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], "job-1");

        let response = send(app(), Method::GET, "/api/v1/jobs/job-404", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_score_match_uses_heuristic() {
        let body = json!({
            "jobSkills": ["React", "Node.js", "Python"],
            "applicantSkills": ["react", "typescript"]
        });
        let response = send(app(), Method::POST, "/api/v1/matches/score", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["score"], 40);
        assert_eq!(body["matchedSkills"], json!(["React"]));
        assert_eq!(body["missingSkills"], json!(["Node.js", "Python"]));
        assert_eq!(body["scorerBackend"], "skill_overlap");
    }

    #[tokio::test]
    async fn test_rank_matches_falls_back_when_generation_is_disabled() {
        let body = json!({ "applicant": sample_applicant(), "limit": 2 });
        let response = send(app(), Method::POST, "/api/v1/matches", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["job"]["id"], "job-1");
        assert_eq!(matches[0]["scorerBackend"], "skill_overlap");
    }

    #[tokio::test]
    async fn test_rank_matches_empty_profile() {
        let body = json!({ "applicant": { "id": "user-2", "name": "Jane Roe" } });
        let response = send(app(), Method::POST, "/api/v1/matches", Some(body)).await;
        assert_eq!(json_body(response).await["matches"], json!([]));
    }

    #[tokio::test]
    async fn test_cover_letter_validation_and_upstream_failure() {
        let blank = json!({
            "jobTitle": " ",
            "companyName": "TechCorp",
            "applicantName": "John Doe"
        });
        let response = send(app(), Method::POST, "/api/v1/assist/cover-letter", Some(blank)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let valid = json!({
            "jobTitle": "Engineer",
            "companyName": "TechCorp",
            "applicantName": "John Doe"
        });
        let failing = build_router(AppState::for_tests(Arc::new(FailingGenerator)));
        let response = send(failing, Method::POST, "/api/v1/assist/cover-letter", Some(valid)).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_interview_questions_fallback_over_http() {
        let app = build_router(AppState::for_tests(Arc::new(CannedGenerator::new(
            "No questions today.",
        ))));
        let body = json!({ "jobTitle": "Data Scientist", "difficulty": "hard" });
        let response = send(app, Method::POST, "/api/v1/assist/interview-questions", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["source"], "fallback_no_json");
        assert_eq!(body["questions"].as_array().unwrap().len(), 4);
        assert_eq!(body["questions"][0]["difficulty"], "hard");
    }

    #[tokio::test]
    async fn test_parse_resume_requires_text() {
        let body = json!({ "resumeText": "" });
        let response = send(app(), Method::POST, "/api/v1/assist/parse-resume", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_notification_lifecycle() {
        let app = app();

        let response = send(app.clone(), Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(json_body(response).await["unreadCount"], 2);

        let response = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/notifications/notif-1/read",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/notifications/missing/read",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let new = json!({ "title": "Profile updated", "message": "Saved", "type": "info" });
        let response = send(app.clone(), Method::POST, "/api/v1/notifications", Some(new)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["read"], false);

        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/notifications/read-all",
            None,
        )
        .await;
        assert!(response.status().is_success());

        let response = send(app.clone(), Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(json_body(response).await["unreadCount"], 0);

        let uri = format!("/api/v1/notifications/{}", created["id"].as_str().unwrap());
        let response = send(app.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(app.clone(), Method::DELETE, "/api/v1/notifications", None).await;
        assert!(response.status().is_success());
        let response = send(app, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(json_body(response).await["notifications"], json!([]));
    }
}
