pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Core API (paths fixed by existing browser clients)
        .route("/api/saveProfile", post(profiles::handle_save_profile))
        .route("/api/analyzeCareer", post(matching::handle_analyze_career))
        // Career Explorer
        .route("/api/careers", get(catalog::handle_list_careers))
        .route("/api/careers/:id", get(catalog::handle_get_career))
        .route("/api/industries", get(catalog::handle_list_industries))
        // Skill tracking
        .route("/api/skills/progress", post(skills::handle_skill_progress))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::careers::default_catalog;
    use crate::catalog::explorer::CareerCatalog;
    use crate::config::Config;
    use crate::profiles::store::{InMemoryProfileStore, ProfileStore};

    fn test_state() -> AppState {
        AppState {
            config: Config::for_tests(),
            profiles: Arc::new(InMemoryProfileStore::new()),
            catalog: Arc::new(CareerCatalog::new(default_catalog())),
        }
    }

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(router, Method::POST, uri, Some(body)).await
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        send(router, Method::GET, uri, None).await
    }

    // ── /api/saveProfile ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_save_profile_confirms() {
        let (status, body) = post_json(
            build_router(test_state()),
            "/api/saveProfile",
            json!({ "name": "Ann", "email": "a@b.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Profile saved successfully!" }));
    }

    #[tokio::test]
    async fn test_save_profile_rejects_empty_or_missing_fields() {
        let cases = [
            json!({ "name": "", "email": "a@b.com" }),
            json!({ "name": "Ann", "email": "" }),
            json!({ "email": "a@b.com" }),
            json!({ "name": "Ann" }),
            json!({}),
            json!({ "name": null, "email": "a@b.com" }),
        ];
        for case in cases {
            let (status, body) =
                post_json(build_router(test_state()), "/api/saveProfile", case.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
            assert_eq!(body, json!({ "message": "Name and email are required!" }));
        }
    }

    #[tokio::test]
    async fn test_save_profile_accepts_any_email_text() {
        let (status, _) = post_json(
            build_router(test_state()),
            "/api/saveProfile",
            json!({ "name": "Ann", "email": "not-an-email" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_save_profile_twice_keeps_latest_name() {
        let state = test_state();
        let store = state.profiles.clone();

        for name in ["Ann", "Bea"] {
            let (status, body) = post_json(
                build_router(state.clone()),
                "/api/saveProfile",
                json!({ "name": name, "email": "a@b.com" }),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Profile saved successfully!");
        }

        let stored = store.get("a@b.com").await.unwrap().unwrap();
        assert_eq!(stored.name, "Bea");
    }

    // ── /api/analyzeCareer ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_analyze_career_returns_suggestions_in_rule_order() {
        let (status, body) = post_json(
            build_router(test_state()),
            "/api/analyzeCareer",
            json!({ "skills": "Empathy and Coding", "interests": "travel" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["suggestions"],
            json!([
                "Software Developer",
                "AI Engineer",
                "Cybersecurity Analyst",
                "Psychologist",
                "Nutritionist",
                "Medical Researcher"
            ])
        );
    }

    #[tokio::test]
    async fn test_analyze_career_no_match_is_ok_and_empty() {
        let (status, body) = post_json(
            build_router(test_state()),
            "/api/analyzeCareer",
            json!({ "skills": "gardening", "interests": "cooking" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "suggestions": [] }));
    }

    #[tokio::test]
    async fn test_analyze_career_rejects_empty_or_missing_fields() {
        let cases = [
            json!({ "skills": "coding", "interests": "" }),
            json!({ "skills": "", "interests": "tech" }),
            json!({ "skills": "coding" }),
            json!({}),
        ];
        for case in cases {
            let (status, body) =
                post_json(build_router(test_state()), "/api/analyzeCareer", case.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
            assert_eq!(body, json!({ "message": "Skills and interests are required!" }));
        }
    }

    // ── Career Explorer ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_careers_with_filters() {
        let (status, body) = get_json(
            build_router(test_state()),
            "/api/careers?search=developer&industry=Technology&sort_by=growth",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["careers"][0]["title"], "Mobile App Developer");
        assert_eq!(body["careers"][0]["match_percentage"], 75);
    }

    #[tokio::test]
    async fn test_get_career_and_not_found() {
        let (status, body) = get_json(build_router(test_state()), "/api/careers/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Data Scientist");

        let (status, body) = get_json(build_router(test_state()), "/api/careers/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Career 99 not found" }));
    }

    #[tokio::test]
    async fn test_list_industries() {
        let (status, body) = get_json(build_router(test_state()), "/api/industries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["industries"][0], "All");
        assert_eq!(body["industries"].as_array().unwrap().len(), 7);
    }

    // ── Skill tracking / health ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_skill_progress_report() {
        let (status, body) = post_json(
            build_router(test_state()),
            "/api/skills/progress",
            json!({ "skills": [
                { "skill": "React", "current_level": 6, "target_level": 8 },
                { "skill": "SQL", "current_level": 4, "target_level": 4 }
            ] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active_skills"], 2);
        assert_eq!(body["skills"][0]["progress"], 75.0);
        assert_eq!(body["skills"][1]["completed"], true);
        assert_eq!(body["overall_progress"], 87.5);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(build_router(test_state()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "compass-api");
    }
}
