//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::identity::UserService;
use crate::config::AppConfig;
use crate::domain::UserRepositoryInterface;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{self, http_metrics_middleware, MetricsState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::users::{self, UserHandlerState};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Usuarios
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::check_mail,
        users::check_password,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            users::UserSummaryDto,
            users::UserDto,
            users::UserRequest,
            users::ReviewDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Usuarios", description = "User records: CRUD and email / credential checks"),
    ),
    info(
        title = "Usuarios API",
        version = "1.0.0",
        description = "REST API for managing user records",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// CORS layer that only admits the configured origins.
///
/// Origins that are not valid header values are dropped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<UserService<dyn UserRepositoryInterface>>,
    db: Option<DatabaseConnection>,
    app_cfg: &AppConfig,
    prometheus_handle: Option<PrometheusHandle>,
) -> Router {
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/checkMail/{correo}", get(users::check_mail))
        .route(
            "/checkPassword/{contrasenia}/{correo}",
            get(users::check_password),
        )
        .with_state(UserHandlerState { user_service });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Usuarios
        .nest("/api/usuarios", user_routes);

    if let Some(handle) = prometheus_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors_layer(&app_cfg.cors.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use serde_json::{json, Value};

    use super::*;
    use crate::application::identity::service::tests::{ana, SpyRepository};
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn app() -> (Arc<SpyRepository>, Router) {
        let repo = Arc::new(SpyRepository::new());
        repo.seed(ana());
        let service: Arc<UserService<dyn UserRepositoryInterface>> =
            Arc::new(UserService::new(repo.clone() as Arc<dyn UserRepositoryInterface>));
        let router = create_api_router(service, None, &AppConfig::default(), None);
        (repo, router)
    }

    async fn send(router: Router, req: Request<Body>) -> Response<Body> {
        use tower::Service;
        let mut svc = router.into_service();
        svc.call(req).await.unwrap()
    }

    async fn body_json(resp: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_summaries() {
        let (_repo, router) = app();
        let resp = send(router, get("/api/usuarios")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!([{"id": 1, "nombre": "Ana", "apellido": "Li", "correo": "a@x.com", "edad": 30}])
        );
    }

    #[tokio::test]
    async fn get_known_and_unknown_user() {
        let (_repo, router) = app();

        let resp = send(router.clone(), get("/api/usuarios/1")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["nombre"], "Ana");
        assert!(body.get("contrasenia").is_none());

        let resp = send(router, get("/api/usuarios/2")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Not found User with id = 2");
    }

    #[tokio::test]
    async fn update_changing_last_name_saves_once() {
        let (repo, router) = app();
        let req = json_request(
            "PUT",
            "/api/usuarios/1",
            json!({"nombre": "Ana", "apellido": "Lee", "correo": "a@x.com", "edad": 30}),
        );

        let resp = send(router, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"id": 1, "nombre": "Ana", "apellido": "Lee", "correo": "a@x.com", "edad": 30})
        );
        let saves = repo.saves.lock().unwrap().clone();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].apellido, "Lee");
        assert_eq!(saves[0].contrasenia, "stored-hash");
    }

    #[tokio::test]
    async fn update_with_identical_payload_skips_save() {
        let (repo, router) = app();
        let req = json_request(
            "PUT",
            "/api/usuarios/1",
            json!({"id": 1, "nombre": "Ana", "apellido": "Li", "correo": "a@x.com", "edad": 30, "contrasenia": "other"}),
        );

        let resp = send(router, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn update_unknown_user_is_404() {
        let (repo, router) = app();
        let req = json_request(
            "PUT",
            "/api/usuarios/7",
            json!({"nombre": "Ana", "apellido": "Lee", "correo": "a@x.com", "edad": 30}),
        );

        let resp = send(router, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn delete_known_and_unknown_user() {
        let (repo, router) = app();

        let req = Request::builder()
            .method("DELETE")
            .uri("/api/usuarios/9")
            .body(Body::empty())
            .unwrap();
        let resp = send(router.clone(), req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);

        let req = Request::builder()
            .method("DELETE")
            .uri("/api/usuarios/1")
            .body(Body::empty())
            .unwrap();
        let resp = send(router, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_then_check_mail_and_password() {
        let (_repo, router) = app();

        let req = json_request(
            "POST",
            "/api/usuarios",
            json!({"nombre": "Bea", "apellido": "Kim", "correo": "b@x.com", "edad": 22, "contrasenia": "clave123"}),
        );
        let resp = send(router.clone(), req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created = body_json(resp).await;
        assert_eq!(created["id"], 2);
        assert!(created.get("contrasenia").is_none());

        let resp = send(router.clone(), get("/api/usuarios/checkMail/b@x.com")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let record = body_json(resp).await;
        assert_eq!(record["id"], 2);
        assert!(record["contrasenia"].is_string());
        assert_ne!(record["contrasenia"], "clave123");

        let resp = send(
            router.clone(),
            get("/api/usuarios/checkPassword/clave123/b@x.com"),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["correo"], "b@x.com");

        let resp = send(router.clone(), get("/api/usuarios/checkPassword/nope/b@x.com")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = send(router, get("/api/usuarios/checkMail/nobody@x.com")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (_repo, router) = app();
        let resp = send(router, get("/api/usuarios/abc")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cors_admits_only_configured_origin() {
        let (_repo, router) = app();

        let req = Request::builder()
            .uri("/api/usuarios")
            .header(header::ORIGIN, "http://127.0.0.1")
            .body(Body::empty())
            .unwrap();
        let resp = send(router.clone(), req).await;
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("http://127.0.0.1")
        );

        let req = Request::builder()
            .uri("/api/usuarios")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let resp = send(router, req).await;
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn health_reports_memory_backend() {
        let (_repo, router) = app();
        let resp = send(router, get("/health")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"]["backend"], "memory");
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let (_repo, router) = app();
        let req = Request::builder()
            .uri("/api/usuarios")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();

        let resp = send(router, req).await;
        assert_eq!(
            resp.headers().get(REQUEST_ID_HEADER).unwrap(),
            "abc-123"
        );
    }

    #[test]
    fn openapi_documents_every_user_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/usuarios",
            "/api/usuarios/{id}",
            "/api/usuarios/checkMail/{correo}",
            "/api/usuarios/checkPassword/{contrasenia}/{correo}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
