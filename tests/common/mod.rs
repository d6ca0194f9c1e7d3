pub mod database;
pub mod fixtures;

pub use database::*;
pub use fixtures::*;

/// Build the service under test with the same middleware stack as the real
/// binary (minus security headers and request logging).
#[macro_export]
macro_rules! init_test_app {
    () => {{
        actix_web::test::init_service(
            actix_web::App::new()
                // Middleware is in reverse execution order, same as main
                .wrap(storefront::middleware::ClientCtx::default())
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::from(&[0u8; 64]),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .configure(storefront::web::configure),
        )
        .await
    }};
}

/// Collect the Set-Cookie values of a response as owned cookies.
#[macro_export]
macro_rules! response_cookies {
    ($resp:expr) => {
        $resp
            .response()
            .cookies()
            .map(|c| c.into_owned())
            .collect::<Vec<actix_web::cookie::Cookie<'static>>>()
    };
}

/// Log in over HTTP and return the session cookies for follow-up requests.
#[macro_export]
macro_rules! login_session {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/auth/login")
            .set_form(&[("username", $username), ("password", $password)])
            .to_request();
        let resp = actix_web::test::call_service($app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SEE_OTHER,
            "login should redirect on success"
        );
        $crate::response_cookies!(resp)
    }};
}

/// Build a GET request carrying the given session cookies.
#[macro_export]
macro_rules! get_with_cookies {
    ($uri:expr, $cookies:expr) => {{
        let mut req = actix_web::test::TestRequest::get().uri($uri);
        for cookie in $cookies.iter() {
            req = req.cookie(cookie.clone());
        }
        req.to_request()
    }};
}
