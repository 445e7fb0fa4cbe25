//! API Integration Tests
//!
//! Most tests run against in-memory storage and need nothing external.
//! Tests marked for PostgreSQL skip unless `DATABASE_URL` is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, ADMIN_EMAIL,
    ADMIN_PASSWORD,
};
use reqwest::StatusCode;

async fn admin_token(server: &TestServer) -> String {
    let response = server
        .post("/auth/login", &LoginRequest::new(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await
        .unwrap();
    let login: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    login.token
}

async fn register(server: &TestServer) -> (RegisterRequest, RegisterResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let registered = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, registered)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/members").await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, registered) = register(&server).await;

    assert_eq!(registered.email, request.email);
    assert_eq!(registered.first_name, "Test");
    assert!(!registered.token.is_empty());

    let response = server.get_auth("/auth/me", &registered.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, registered.id);
    assert_eq!(me.role, "ROLE_USER");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server.post("/auth/register", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "CONFLICT");

    // Only one account with that email exists
    let token = admin_token(&server).await;
    let response = server.get_auth("/auth/users", &token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.iter().filter(|u| u.email == request.email).count(), 1);
}

#[tokio::test]
async fn test_register_invalid_payload() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/auth/me", &login.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.email, request.email);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let wrong_password = LoginRequest::new(&request.email, "WrongPass123");
    let response = server.post("/auth/login", &wrong_password).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let unknown = LoginRequest::new("nonexistent@example.com", "TestPass123");
    let response = server.post("/auth/login", &unknown).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/auth/me", "garbage").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_users_listing_is_admin_only() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, registered) = register(&server).await;

    let response = server.get_auth("/auth/users", &registered.token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "MISSING_ROLE");

    let token = admin_token(&server).await;
    let response = server.get_auth("/auth/users", &token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.email == ADMIN_EMAIL && u.role == "ROLE_ADMIN"));
    assert!(users.iter().any(|u| u.id == registered.id));
}

#[tokio::test]
async fn test_admin_soft_deletes_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, registered) = register(&server).await;
    let token = admin_token(&server).await;
    let path = format!("/users/{}", registered.id);

    let response = server.delete_auth(&path, &registered.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, format!("User {} deleted successfully", registered.id));

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleted users can neither log in nor re-register
    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_admin_gets_user_by_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, registered) = register(&server).await;
    let token = admin_token(&server).await;
    let path = format!("/users/{}", registered.id);

    let response = server.get_auth(&path, &registered.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, request.email);
    assert_eq!(user.role, "ROLE_USER");

    let response = server.get_auth("/users/999999", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_email_is_case_insensitive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    let lower = request.email.clone();
    request.email = lower.to_uppercase();

    let response = server.post("/auth/register", &request).await.unwrap();
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.email, lower);

    request.email = lower.clone();
    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .post("/auth/login", &LoginRequest::new(&lower, &request.password))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Testimonial Tests
// ============================================================================

#[tokio::test]
async fn test_create_testimonial() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/testimonials", &TestimonialRequest::new("Jane"))
        .await
        .unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Testimonial Jane created successfully");
}

#[tokio::test]
async fn test_update_and_delete_testimonial() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .post("/testimonials", &TestimonialRequest::new("Jane"))
        .await
        .unwrap();

    let mut update = TestimonialRequest::new("Janet");
    update.content = Some("Changed my life".to_string());
    let response = server.put("/testimonials/1", &update).await.unwrap();
    let updated: TestimonialResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Janet");
    assert_eq!(updated.content.as_deref(), Some("Changed my life"));

    let response = server.delete("/testimonials/1").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Testimonial 1 deleted successfully");

    let response = server.delete("/testimonials/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.put("/testimonials/1", &update).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_testimonial_pages() {
    let server = TestServer::start().await.expect("Failed to start server");
    let names: Vec<String> = ('a'..='l').map(|c| format!("Author {c}")).collect();
    for name in &names {
        let response = server
            .post("/testimonials", &TestimonialRequest::new(name))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/testimonials").await.unwrap();
    let first: PageResponse<TestimonialResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.page, 0);
    assert_eq!(first.total_elements, 12);
    assert_eq!(first.content.len(), 10);
    assert!(first.previous_page.is_none());
    assert_eq!(first.next_page.as_deref(), Some("/testimonials?page=1"));

    let response = server.get("/testimonials?page=1").await.unwrap();
    let second: PageResponse<TestimonialResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.content.len(), 2);
    assert_eq!(second.previous_page.as_deref(), Some("/testimonials?page=0"));
    assert!(second.next_page.is_none());

    // Pages are disjoint and together give every row in id order
    let listed: Vec<String> = first
        .content
        .into_iter()
        .chain(second.content)
        .map(|t| t.name)
        .collect();
    assert_eq!(listed, names);

    let response = server.get("/testimonials?page=-1").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_member_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/members", &MemberRequest::new("Ana")).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Member Ana created successfully");

    let mut update = MemberRequest::new("Ana Maria");
    update.facebook_url = Some("https://facebook.com/ana".to_string());
    let response = server.put("/members/1", &update).await.unwrap();
    let updated: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.facebook_url.as_deref(), Some("https://facebook.com/ana"));

    let response = server.delete("/members/1").await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Member 1 deleted successfully");

    // Soft-deleted members no longer resolve
    let response = server.delete("/members/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server.put("/members/1", &update).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/members").await.unwrap();
    let page: PageResponse<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total_elements, 0);
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn test_delete_missing_member() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete("/members/999").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_MEMBER");
    assert!(!body.error.message.is_empty());

    let response = server.delete("/members/abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// News and Activity Tests
// ============================================================================

#[tokio::test]
async fn test_news_unknown_category() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = NewsRequest {
        name: "Fundraiser".to_string(),
        content: "We raised enough for the new roof".to_string(),
        image: "http://img.example.com/n.png".to_string(),
        category_id: 42,
    };

    let response = server.post("/news", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_CATEGORY");

    let response = server.get("/news/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_activity_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/activities", &ActivityRequest::new("Tutoring"))
        .await
        .unwrap();
    let created: ActivityResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, "Tutoring");

    let path = format!("/activities/{}", created.id);
    let response = server
        .put(&path, &ActivityRequest::new("Evening tutoring"))
        .await
        .unwrap();
    let updated: ActivityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Evening tutoring");

    let response = server
        .put("/activities/999", &ActivityRequest::new("Ghost"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_register_and_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let (_, registered) = register(&server).await;
    let response = server.get_auth("/auth/me", &registered.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, registered.id);
}

#[tokio::test]
async fn test_postgres_member_soft_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let name = format!("Member {}", unique_suffix());
    let response = server.post("/members", &MemberRequest::new(&name)).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete("/members/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
