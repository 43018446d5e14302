//! HTTP inbound adapter exposing the menu and points panels as REST
//! endpoints.

pub mod error;
pub mod health;
pub mod menu;
pub mod points;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the panel endpoints and the extractor error handlers.
///
/// Mount under the versioned prefix:
///
/// ```
/// use actix_web::{App, web};
/// use cafe_backend::inbound::http::{configure_api, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(menu::reload_menu)
        .service(menu::list_menu)
        .service(menu::add_item)
        .service(menu::update_draft)
        .service(menu::save_item)
        .service(menu::delete_item)
        .service(points::add_point)
        .service(points::remove_point);
}
