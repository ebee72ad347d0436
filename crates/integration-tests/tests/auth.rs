//! Integration tests for registration and login.

use bodega_storefront::services::auth::{AuthError, AuthService};

use bodega_integration_tests::test_pool;

#[tokio::test]
async fn register_and_login_round_trip() {
    let pool = test_pool().await;
    let service = AuthService::new(&pool);

    let registered = service
        .register("shopper", "hunter2hunter2")
        .await
        .expect("register");
    assert_eq!(registered.username.as_str(), "shopper");
    assert!(!registered.is_admin);

    let logged_in = service
        .login("shopper", "hunter2hunter2")
        .await
        .expect("login");
    assert_eq!(logged_in.id, registered.id);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let pool = test_pool().await;
    let service = AuthService::new(&pool);

    service
        .register("shopper", "hunter2hunter2")
        .await
        .expect("register");

    assert!(matches!(
        service.login("shopper", "wrong").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn unknown_user_is_indistinguishable_from_wrong_password() {
    let pool = test_pool().await;
    let service = AuthService::new(&pool);

    assert!(matches!(
        service.login("nobody", "whatever").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let pool = test_pool().await;
    let service = AuthService::new(&pool);

    service
        .register("shopper", "hunter2hunter2")
        .await
        .expect("register");

    assert!(matches!(
        service.register("shopper", "other-password").await,
        Err(AuthError::UserAlreadyExists)
    ));
}

#[tokio::test]
async fn invalid_usernames_are_rejected_at_registration() {
    let pool = test_pool().await;
    let service = AuthService::new(&pool);

    assert!(matches!(
        service.register("", "hunter2hunter2").await,
        Err(AuthError::InvalidUsername(_))
    ));
    assert!(matches!(
        service.register("two words", "hunter2hunter2").await,
        Err(AuthError::InvalidUsername(_))
    ));
}
