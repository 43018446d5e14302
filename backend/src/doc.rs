//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the menu and points endpoints, the health probes and
//! the schema wrappers for domain types that do not derive `ToSchema`. The
//! document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::menu::{
    AddItemFormResponse, AddItemRequest, AddItemResponse, DraftPatchRequest, MenuEntryResponse,
    MenuItemResponse, MenuListingResponse,
};
use crate::inbound::http::points::{PointsRequest, PointsResponse};
use crate::inbound::http::schemas::{CategorySchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the console API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Café console API",
        description = "Menu editing and loyalty point adjustments over the hosted store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::menu::reload_menu,
        crate::inbound::http::menu::list_menu,
        crate::inbound::http::menu::update_draft,
        crate::inbound::http::menu::save_item,
        crate::inbound::http::menu::delete_item,
        crate::inbound::http::menu::add_item,
        crate::inbound::http::points::add_point,
        crate::inbound::http::points::remove_point,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CategorySchema,
        MenuItemResponse,
        MenuEntryResponse,
        MenuListingResponse,
        DraftPatchRequest,
        AddItemRequest,
        AddItemFormResponse,
        AddItemResponse,
        PointsRequest,
        PointsResponse,
    )),
    tags(
        (name = "menu", description = "Browse and edit menu items"),
        (name = "points", description = "Adjust loyalty points by short code"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
