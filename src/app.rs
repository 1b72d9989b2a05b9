use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::ServiceInfo;
use crate::openapi::{ApiDoc, DOCS_PATH, SPEC_PATH};
use crate::state::AppState;
use crate::telemetry::trace_layer;
use crate::{dishes, menus, submenus};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest(
            "/api/v1",
            Router::new()
                .merge(menus::router())
                .merge(submenus::router())
                .merge(dishes::router())
                .route("/health", get(|| async { "ok" })),
        )
        .merge(SwaggerUi::new(DOCS_PATH).url(SPEC_PATH, ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(trace_layer())
}

#[utoipa::path(
    get, path = "/", tag = "service",
    responses((status = 200, description = "Service name and version", body = ServiceInfo))
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config.project_name.clone(),
        version: state.config.version.clone(),
    })
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_service_and_version() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert_eq!(json["service"], "menu-catalog");
        assert_eq!(json["version"], "test");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_lists_catalog_routes() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        let paths = &json["paths"];
        assert!(paths["/api/v1/menus"]["get"].is_object());
        assert!(paths["/api/v1/menus"]["post"].is_object());
        assert!(paths["/api/v1/menus/{menu_id}/submenus/{submenu_id}"]["patch"].is_object());
        assert!(
            paths["/api/v1/menus/{menu_id}/submenus/{submenu_id}/dishes/{dish_id}"]["delete"]
                .is_object()
        );
        assert!(json["components"]["schemas"]["DishAnswer"].is_object());
    }

    #[tokio::test]
    async fn non_numeric_menu_id_is_unprocessable() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/v1/menus/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(res).await;
        assert!(json["detail"].is_string());
    }

    #[tokio::test]
    async fn non_numeric_dish_id_is_unprocessable() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::get("/api/v1/menus/1/submenus/2/dishes/first")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_the_database() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::post("/api/v1/menus")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title": "   ", "description": "x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(res).await;
        assert_eq!(json["detail"], "title must not be empty");
    }

    #[tokio::test]
    async fn invalid_price_is_rejected_before_the_database() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::post("/api/v1/menus/1/submenus/1/dishes")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title": "Tea", "price": "-3"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_json_body_renders_detail() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::post("/api/v1/menus")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(res).await;
        assert!(json["detail"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
