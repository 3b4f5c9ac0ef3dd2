mod common;

use axum::http::{header, StatusCode};
use common::{get, location, post_form, test_app, test_config};
use jobfit::{app, AppState};
use tower::ServiceExt;

#[tokio::test]
async fn exercise_library_filters_by_muscle_and_level() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/fitness/exercises?q=glutes&difficulty=Beginner").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Squats"));
    assert!(body.contains("Plank"));
    assert!(!body.contains("Deadlift"));
}

#[tokio::test]
async fn exercise_library_shows_empty_state() {
    let (app, _) = test_app();
    let (_, body) = get(&app, "/fitness/exercises?q=zumba").await;
    assert!(body.contains("No exercises found"));
}

#[tokio::test]
async fn all_categories_equals_no_category() {
    let (app, _) = test_app();
    let (_, omitted) = get(&app, "/fitness/exercises").await;
    let (_, explicit) = get(&app, "/fitness/exercises?category=all&difficulty=all").await;
    for name in ["Push-ups", "Bench Press", "Squats", "Deadlift", "Pull-ups", "Plank"] {
        assert!(omitted.contains(name));
        assert!(explicit.contains(name));
    }
}

#[tokio::test]
async fn workouts_filter_by_type() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/fitness/workouts?type=Cardio").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("HIIT Cardio Blast"));
    assert!(!body.contains("Leg Day Power"));
    assert!(body.contains("Recent Workouts"));
    assert!(body.contains("3/4"));
    assert!(body.contains("45 min"));

    let (_, body) = get(&app, "/fitness/workouts?q=stretching").await;
    assert!(body.contains("No workouts found"));
}

#[tokio::test]
async fn profile_uses_the_signed_in_user() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/fitness/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("athlete@jobfit.dev"));
    assert!(body.contains("Member since December 2023"));
    assert!(body.contains("Earned on 2024-01-10"));
    assert!(body.contains("Progress: 7/30"));
    assert!(body.contains("Metric (kg)"));
}

#[tokio::test]
async fn sign_out_ends_the_session() {
    let (app, state) = test_app();
    let response = post_form(&app, "/fitness/logout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/fitness/profile");
    assert!(state.fitness.session.current_user().is_none());

    let (_, body) = get(&app, "/fitness/profile").await;
    assert!(body.contains("Fitness Enthusiast"));
    assert!(!body.contains("athlete@jobfit.dev"));
}

#[tokio::test]
async fn progress_tabs_switch_content() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/fitness/progress").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Mon, Jan 15"));
    assert!(body.contains("Rest day"));

    let (_, body) = get(&app, "/fitness/progress?tab=goals").await;
    assert!(body.contains("Run 5km under 24 minutes"));
    assert!(body.contains("4/5 workouts"));
    assert!(body.contains("width: 85%"));

    let (_, body) = get(&app, "/fitness/progress?tab=records").await;
    assert!(body.contains("24.5 min"));

    let (_, body) = get(&app, "/fitness/progress?tab=body").await;
    assert!(body.contains("75.2 kg"));

    let (_, body) = get(&app, "/fitness/progress?tab=settings").await;
    assert!(body.contains("Workout Activity (Last 7 Days)"));
}

#[tokio::test]
async fn serves_stylesheet_with_cache_header() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("app.css"), "body { margin: 0; }").unwrap();

    let mut config = test_config();
    config.static_dir = static_dir.path().to_path_buf();
    let state = AppState::from_config(&config).unwrap();
    let app = app(state, &config);

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/static/app.css")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=3600"
    );
    assert_eq!(common::body_text(response).await, "body { margin: 0; }");
}
