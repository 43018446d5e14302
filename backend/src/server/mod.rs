//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
pub(crate) use metrics::build_metrics;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use cafe_backend::Trace;
#[cfg(debug_assertions)]
use cafe_backend::doc::ApiDoc;
use cafe_backend::inbound::http::configure_api;
use cafe_backend::inbound::http::health::{HealthState, live, ready};
use cafe_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Load the menu once so the first listing is not empty.
///
/// A failed load is logged and the server still starts; the operator can
/// reload from the panel.
async fn preload_menu(http_state: &HttpState) {
    match http_state.menu.reload().await {
        Ok(listing) => info!(
            category = %listing.category,
            items = listing.entries.len(),
            "menu loaded"
        ),
        Err(error) => warn!(error = %error, "initial menu load failed"),
    }
}

/// Construct an Actix HTTP server backed by the hosted store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        store,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let http_state = web::Data::new(build_http_state(&store));
    preload_menu(&http_state).await;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use cafe_backend::TraceId;

    fn fixture_deps() -> AppDependencies {
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(HttpState::default()),
        }
    }

    #[actix_web::test]
    async fn app_serves_api_and_probes_with_trace_header() {
        let deps = fixture_deps();
        deps.health_state.mark_ready();
        let app = test::init_service(build_app(deps)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/menu?category=MATCHA")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(cafe_backend::domain::TRACE_ID_HEADER));

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn error_bodies_carry_the_request_trace_id() {
        let app = test::init_service(build_app(fixture_deps())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/points/add")
                .set_json(serde_json::json!({"code": "042"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let header = res
            .headers()
            .get(cafe_backend::domain::TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace-id header");
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["traceId"], header.as_str());
        assert!(header.parse::<TraceId>().is_ok());
    }
}
