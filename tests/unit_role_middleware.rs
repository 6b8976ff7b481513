mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::routing::get;
use chrono::{Duration, Utc};
use common::{bearer, create_test_user, get_request, test_state};
use gradebook::gradebook_config::ConfigError;
use gradebook::gradebook_models::Role;
use gradebook::middleware::auth::authenticate;
use gradebook::middleware::context::CurrentUser;
use gradebook::middleware::role::{RoleGate, protect};
use gradebook::state::AppState;
use tower::ServiceExt;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// A router with one protected route whose handler counts its invocations.
fn counting_app(state: AppState, roles: &[Role]) -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = RoleGate::new(state.clone(), roles.iter().copied()).unwrap();

    let counter = calls.clone();
    let handler = move |user: CurrentUser| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            user.email.clone()
        }
    };

    let app = Router::new()
        .route("/protected", protect(get(handler), gate))
        .with_state(state);
    (app, calls)
}

#[test]
fn test_empty_allow_set_rejected_at_construction() {
    let (state, _) = test_state();
    let result = RoleGate::new(state, []);
    assert!(matches!(result, Err(ConfigError::EmptyAllowSet)));
}

#[test]
fn test_allow_set_deduplicated() {
    let (state, _) = test_state();
    let gate = RoleGate::new(state, [Role::Admin, Role::Lecturer, Role::Admin]).unwrap();
    assert_eq!(gate.allowed(), &[Role::Admin, Role::Lecturer]);
}

#[tokio::test]
async fn test_authenticate_missing_header() {
    let (state, _) = test_state();
    let err = authenticate(&HeaderMap::new(), &state).await.unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "missing authorization header");
}

#[tokio::test]
async fn test_authenticate_wrong_scheme() {
    let (state, _) = test_state();
    let err = authenticate(&headers_with("Token xyz"), &state)
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "invalid authorization header");
}

#[tokio::test]
async fn test_authenticate_garbage_token() {
    let (state, _) = test_state();
    let err = authenticate(&headers_with("Bearer not-a-jwt"), &state)
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "invalid token");
}

#[tokio::test]
async fn test_authenticate_expired_token() {
    let (state, store) = test_state();
    create_test_user(&store, "admin@example.com", Role::Admin).await;
    let token = state
        .tokens
        .issue_at(
            "admin@example.com",
            Utc::now() - Duration::days(2),
            Duration::days(1),
        )
        .unwrap();

    let err = authenticate(&headers_with(&bearer(&token)), &state)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "invalid token");
}

#[tokio::test]
async fn test_authenticate_deleted_user() {
    let (state, _) = test_state();
    let token = state.tokens.issue("ghost@example.com").unwrap();

    let err = authenticate(&headers_with(&bearer(&token)), &state)
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "user not found");
}

#[tokio::test]
async fn test_authenticate_lowercase_scheme() {
    let (state, store) = test_state();
    let created = create_test_user(&store, "lecturer@example.com", Role::Lecturer).await;
    let token = state.tokens.issue("lecturer@example.com").unwrap();

    let user = authenticate(&headers_with(&format!("bearer {token}")), &state)
        .await
        .unwrap();
    assert_eq!(user, created);
}

#[tokio::test]
async fn test_gate_check_forbidden_role() {
    let (state, store) = test_state();
    create_test_user(&store, "student@example.com", Role::Student).await;
    let token = state.tokens.issue("student@example.com").unwrap();

    let gate = RoleGate::new(state, [Role::Admin, Role::Lecturer]).unwrap();
    let err = gate.check(&headers_with(&bearer(&token))).await.unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_allowed_role_runs_handler_exactly_once() {
    let (state, store) = test_state();
    create_test_user(&store, "admin@example.com", Role::Admin).await;
    let token = state.tokens.issue("admin@example.com").unwrap();
    let (app, calls) = counting_app(state, &[Role::Admin]);

    let response = app
        .oneshot(get_request("/protected", Some(&bearer(&token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejections_never_run_handler() {
    let (state, store) = test_state();
    create_test_user(&store, "student@example.com", Role::Student).await;
    let student_token = state.tokens.issue("student@example.com").unwrap();
    let ghost_token = state.tokens.issue("ghost@example.com").unwrap();
    let (app, calls) = counting_app(state, &[Role::Admin]);

    let cases = [
        (None, StatusCode::UNAUTHORIZED),
        (Some("Token xyz".to_string()), StatusCode::UNAUTHORIZED),
        (Some("Bearer".to_string()), StatusCode::UNAUTHORIZED),
        (Some(bearer("garbage")), StatusCode::UNAUTHORIZED),
        (Some(bearer(&ghost_token)), StatusCode::UNAUTHORIZED),
        (Some(bearer(&student_token)), StatusCode::FORBIDDEN),
    ];

    for (authorization, expected) in cases {
        let response = app
            .clone()
            .oneshot(get_request("/protected", authorization.as_deref()))
            .await
            .unwrap();
        assert_eq!(response.status(), expected, "authorization: {authorization:?}");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_handler_sees_resolved_identity() {
    let (state, store) = test_state();
    create_test_user(&store, "lecturer@example.com", Role::Lecturer).await;
    let token = state.tokens.issue("lecturer@example.com").unwrap();
    let (app, _) = counting_app(state, &[Role::Lecturer, Role::Admin]);

    let response = app
        .oneshot(get_request("/protected", Some(&bearer(&token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(&body[..], b"lecturer@example.com");
}

#[tokio::test]
async fn test_concurrent_requests_keep_separate_identities() {
    let (state, store) = test_state();
    let emails = [
        "a@example.com",
        "b@example.com",
        "c@example.com",
        "d@example.com",
    ];
    for email in emails {
        create_test_user(&store, email, Role::Student).await;
    }
    let tokens: Vec<String> = emails
        .iter()
        .map(|email| state.tokens.issue(email).unwrap())
        .collect();
    let (app, calls) = counting_app(state, &[Role::Student]);

    let mut handles = Vec::new();
    for (email, token) in emails.iter().zip(tokens) {
        let app = app.clone();
        let email = email.to_string();
        handles.push(tokio::spawn(async move {
            let response = app
                .oneshot(get_request("/protected", Some(&bearer(&token))))
                .await
                .unwrap();
            let body = http_body_util::BodyExt::collect(response.into_body())
                .await
                .unwrap()
                .to_bytes();
            assert_eq!(&body[..], email.as_bytes());
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), emails.len());
}
