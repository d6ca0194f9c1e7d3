mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use serial_test::serial;
use storefront::web::login::{login, LoginResultStatus};

#[actix_rt::test]
#[serial]
async fn test_valid_credentials_accepted() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    let user = create_test_user(db, "alice", "hunter2").await.unwrap();

    let result = login("alice", "hunter2").await.unwrap();
    assert!(matches!(result.result, LoginResultStatus::Success));

    // The session module hands the identity back to the middleware
    let sessions = storefront::session::get_sess();
    let uuid = storefront::session::new_session(sessions, user.id);
    let session =
        storefront::session::authenticate_by_uuid(sessions, uuid).expect("session should exist");
    assert_eq!(session.user_id, user.id);
}

#[actix_rt::test]
#[serial]
async fn test_unknown_username_rejected() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_user(db, "alice", "hunter2").await.unwrap();

    let result = login("nobody", "hunter2").await.unwrap();
    assert!(matches!(result.result, LoginResultStatus::BadName));
}

#[actix_rt::test]
#[serial]
async fn test_wrong_password_rejected() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_user(db, "alice", "hunter2").await.unwrap();

    let result = login("alice", "wrong").await.unwrap();
    assert!(matches!(result.result, LoginResultStatus::BadPassword));
}

#[actix_rt::test]
#[serial]
async fn test_username_whitespace_trimmed() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_user(db, "alice", "hunter2").await.unwrap();

    let result = login("  alice  ", "hunter2").await.unwrap();
    assert!(matches!(result.result, LoginResultStatus::Success));
}

#[actix_rt::test]
#[serial]
async fn test_failed_login_redirects_with_flash() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_user(db, "alice", "hunter2").await.unwrap();

    let app = init_test_app!();

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form(&[("username", "alice"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get("Location").unwrap();
    assert_eq!(location, "/auth/login");

    // The flash shows up on the login page, then drains
    let cookies = response_cookies!(resp);
    let req = get_with_cookies!("/auth/login", cookies);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("Invalid username or password."));
}

#[actix_rt::test]
#[serial]
async fn test_admin_only_requires_login() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    let app = init_test_app!();

    let req = test::TestRequest::get().uri("/auth/admin_only").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
#[serial]
async fn test_admin_only_forbidden_for_regular_user() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_user(db, "bob", "hunter2").await.unwrap();

    let app = init_test_app!();
    let cookies = login_session!(&app, "bob", "hunter2");

    let req = get_with_cookies!("/auth/admin_only", cookies);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
#[serial]
async fn test_admin_only_allows_admin() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_admin(db, "root", "hunter2").await.unwrap();

    let app = init_test_app!();
    let cookies = login_session!(&app, "root", "hunter2");

    let req = get_with_cookies!("/auth/admin_only", cookies);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("Welcome, administrator!"));
}

#[actix_rt::test]
#[serial]
async fn test_logout_invalidates_session() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    create_test_admin(db, "root", "hunter2").await.unwrap();

    let app = init_test_app!();
    let cookies = login_session!(&app, "root", "hunter2");

    let req = get_with_cookies!("/auth/logout", cookies);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    // Even the original cookies are useless once the server-side session
    // has been dropped.
    let req = get_with_cookies!("/auth/admin_only", cookies);
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
#[serial]
async fn test_root_redirects_to_login() {
    let db = setup_test_database().await;
    cleanup_test_data(db).await.unwrap();

    let app = init_test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get("Location").unwrap(), "/auth/login");
}
