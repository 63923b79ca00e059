#![allow(dead_code)]

pub mod mocks;

use mocks::FakeBackend;
use std::sync::Once;
use tribes_lib::domain::value_objects::PrincipalId;
use tribes_lib::shared::config::{AppConfig, LoggingConfig};
use tribes_lib::{AppState, shared::logging};

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        logging::init(&LoggingConfig {
            filter: "tribes_lib=debug".to_string(),
            json: false,
        });
    });
}

pub fn principal(seed: u8) -> PrincipalId {
    PrincipalId::from_bytes(&[seed; 10]).expect("10 bytes fit in a principal")
}

/// A fresh context with an anonymous actor connected.
pub async fn anonymous_session() -> (AppState, FakeBackend) {
    init_logging();
    let state = AppState::new(AppConfig::default()).expect("default config is valid");
    let backend = FakeBackend::new();
    state.connect_actor(backend.actor(None)).await;
    (state, backend)
}

/// A fresh context signed in as `principal(seed)`.
pub async fn signed_in_session(seed: u8) -> (AppState, FakeBackend) {
    init_logging();
    let state = AppState::new(AppConfig::default()).expect("default config is valid");
    let backend = FakeBackend::new();
    let me = principal(seed);
    state.sign_in(me.clone(), backend.actor(Some(me))).await;
    (state, backend)
}
