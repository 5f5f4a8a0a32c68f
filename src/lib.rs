use std::{error::Error, future::Future, pin::Pin};

use app_state::AppState;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use axum::{routing::post, Router};
use axum_server::bind;
use routes::{change_password, login, verify_token};
use tower_http::cors::{Any, CorsLayer};
use utils::Config;
use welds::connections::any::AnyClient;

pub mod app_state;
pub mod client;
pub mod domain;
pub mod errors;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .route("/api/auth/login", post(login::login))
        .route(
            "/api/auth/changePassword",
            post(change_password::change_password),
        )
        .route("/api/auth/verify-token", post(verify_token::verify_token))
        .layer(cors)
        .with_state(app_state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    match config
        .cors_allowed_origin()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

pub async fn get_db_client(db_url: &str) -> welds::errors::Result<AnyClient> {
    Ok(welds::connections::connect(db_url).await?)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!(address = %self.address, "listening");
        self.http_future.await
    }
}
