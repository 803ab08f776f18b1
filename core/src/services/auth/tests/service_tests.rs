//! Tests for the authentication service against the in-memory store.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::token::{Claims, ACCESS_TOKEN_EXPIRY_SECONDS};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{InMemoryTokenStore, TokenStore};
use crate::services::auth::service::hash_token;
use crate::services::auth::AuthService;
use crate::services::token::{TokenCodec, TokenConfig};

fn service() -> (AuthService, Arc<InMemoryTokenStore>) {
    let store = Arc::new(InMemoryTokenStore::new());
    let service = AuthService::new(
        store.clone(),
        TokenConfig::new("access-secret", "refresh-secret"),
    );
    (service, store)
}

fn token_error(result: DomainError) -> TokenError {
    match result {
        DomainError::Token(err) => err,
        other => panic!("expected token error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_issues_verifiable_pair() {
    let (service, store) = service();
    let pair = service.login("alice").await.unwrap();

    let claims = service.verify_access(&pair.access_token).unwrap();
    assert_eq!(claims.name, "alice");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_access_token_window_is_fifteen_seconds() {
    let (service, _) = service();
    let pair = service.login("alice").await.unwrap();

    let claims = service.verify_access(&pair.access_token).unwrap();
    let exp = claims.exp.expect("access token must carry exp");
    assert_eq!(exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    let store = Arc::new(InMemoryTokenStore::new());
    let service = AuthService::new(
        store,
        TokenConfig::new("access-secret", "refresh-secret")
            .with_access_token_ttl(Duration::seconds(-30)),
    );

    let pair = service.login("alice").await.unwrap();
    let err = token_error(service.verify_access(&pair.access_token).unwrap_err());
    assert_eq!(err, TokenError::TokenExpired);
}

#[tokio::test]
async fn test_refresh_mints_independent_access_token() {
    let (service, _) = service();
    let pair = service.login("alice").await.unwrap();

    let access = service.refresh(&pair.refresh_token).await.unwrap();
    let claims = service.verify_access(&access).unwrap();
    assert_eq!(claims.name, "alice");
}

#[tokio::test]
async fn test_refresh_fails_after_logout() {
    let (service, store) = service();
    let pair = service.login("alice").await.unwrap();

    service.logout(&pair.refresh_token).await.unwrap();
    assert!(store.is_empty().await);

    let err = token_error(service.refresh(&pair.refresh_token).await.unwrap_err());
    assert_eq!(err, TokenError::UnknownRefreshToken);
}

#[tokio::test]
async fn test_refresh_rejects_unknown_token() {
    let (service, _) = service();
    service.login("alice").await.unwrap();

    let err = token_error(service.refresh("never-issued").await.unwrap_err());
    assert_eq!(err, TokenError::UnknownRefreshToken);
}

#[tokio::test]
async fn test_refresh_rejects_registered_but_forged_token() {
    // Membership alone is not sufficient: the signature must also verify.
    let (service, store) = service();
    let forged = TokenCodec::non_expiring("other-secret")
        .sign(&Claims::new_refresh("mallory"))
        .unwrap();
    store.insert(&hash_token(&forged)).await.unwrap();

    let err = token_error(service.refresh(&forged).await.unwrap_err());
    assert_eq!(err, TokenError::InvalidSignature);
}

#[tokio::test]
async fn test_logout_of_unknown_token_succeeds() {
    let (service, _) = service();
    service.logout("never-issued").await.unwrap();
}

#[tokio::test]
async fn test_logout_only_revokes_the_given_token() {
    let (service, _) = service();
    let alice = service.login("alice").await.unwrap();
    let bob = service.login("bob").await.unwrap();

    service.logout(&alice.refresh_token).await.unwrap();

    assert!(service.refresh(&alice.refresh_token).await.is_err());
    let access = service.refresh(&bob.refresh_token).await.unwrap();
    assert_eq!(service.verify_access(&access).unwrap().name, "bob");
}
