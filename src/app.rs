use crate::{
    modules,
    types::{Context, CorsOrigin},
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

const BODY_LIMIT: usize = 1024 * 1024;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

fn cors_layer(origin: &CorsOrigin) -> cors::CorsLayer {
    let layer = cors::CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin {
        CorsOrigin::Any => layer.allow_origin(cors::Any),
        CorsOrigin::Exact(origin) => layer.allow_origin(origin.clone()),
    }
}

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx.clone()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(trace::TraceLayer::new_for_http())
        .layer(cors_layer(&ctx.app.cors_origin))
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        Self {
            router: router(ctx.clone()),
            ctx,
        }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener =
            TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port)).await?;

        tracing::info!(
            "App is running on {}:{} ({:?})",
            self.ctx.app.host,
            self.ctx.app.port,
            self.ctx.app.environment
        );

        axum::serve(listener, self.router).await
    }
}
