//! End-to-end chains the way an application layer strings outcomes together.

use std::sync::Mutex;

use flowkit_error::{AppError, DomainError, StatusCode};
use flowkit_outcome::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Profile {
    id: u64,
    nickname: Option<String>,
}

async fn fetch_profile(id: u64) -> Outcome<Profile, AppError> {
    tokio::task::yield_now().await;
    match id {
        0 => Outcome::failure(AppError::http(StatusCode::NOT_FOUND, "no such user")),
        1 => Outcome::success(Profile {
            id,
            nickname: None,
        }),
        _ => Outcome::success(Profile {
            id,
            nickname: Some(format!("user{id}")),
        }),
    }
}

async fn fetch_avatar(profile: Profile) -> Outcome<String, AppError> {
    Outcome::success(format!("https://cdn.example/{}.png", profile.id))
}

#[tokio::test]
async fn async_chain_reaches_the_end() {
    let avatar = fetch_profile(7).flat_map_async(fetch_avatar).await;
    assert_eq!(avatar, Outcome::success("https://cdn.example/7.png".to_owned()));
}

#[tokio::test]
async fn async_chain_surfaces_first_failure() {
    let avatar = fetch_profile(0).flat_map_async(fetch_avatar).await;
    let err = avatar.error().expect("lookup should fail");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.code(), Some(404));
}

#[tokio::test]
async fn missing_nickname_becomes_failure() {
    let nickname = fetch_profile(1)
        .map_async(|p| p.nickname)
        .await
        .where_not_null(|| AppError::validation("nickname not set"));
    assert_eq!(
        nickname,
        Outcome::failure(AppError::validation("nickname not set"))
    );

    let fallback = fetch_profile(0)
        .map_async(|p| p.id)
        .get_or_else_async(|| u64::MAX)
        .await;
    assert_eq!(fallback, u64::MAX);
}

#[test]
fn side_effect_hooks_log_both_sides() {
    let log = Mutex::new(Vec::new());

    let results: Vec<Outcome<u32, AppError>> = vec![
        Outcome::success(1),
        Outcome::failure(AppError::coded(9, "quota")),
    ];

    for outcome in results {
        let _ = outcome
            .on_success(|v| log.lock().expect("lock").push(format!("ok {v}")))
            .on_failure(|e| log.lock().expect("lock").push(format!("err {e}")));
    }

    assert_eq!(
        log.into_inner().expect("lock"),
        vec!["ok 1".to_owned(), "err [9] quota".to_owned()]
    );
}

#[test]
fn recovery_chain_falls_back_to_cache() {
    let cached = Outcome::<&str, AppError>::failure(AppError::http_status(StatusCode::SERVICE_UNAVAILABLE))
        .recover_with(|e| {
            if e.status() == Some(StatusCode::SERVICE_UNAVAILABLE) {
                Outcome::success("cached")
            } else {
                Outcome::failure(e)
            }
        })
        .fold(str::to_owned, |e| e.to_string());
    assert_eq!(cached, "cached");
}
