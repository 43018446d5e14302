//! Menu panel HTTP handlers.
//!
//! ```text
//! POST   /api/v1/menu/reload
//! GET    /api/v1/menu?category=MATCHA
//! PATCH  /api/v1/menu/items/{id}/draft
//! POST   /api/v1/menu/items/{id}/save
//! DELETE /api/v1/menu/items/{id}?confirm=true
//! POST   /api/v1/menu/items
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddItemOutcome, Confirmation, MenuEntry, MenuListing};
use crate::domain::{AddItemForm, Category, Error, MenuItem, MenuItemId, MenuItemPatch, Price};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CategorySchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Menu item as shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: String,
    #[schema(value_type = CategorySchema)]
    pub category: Category,
    pub section: String,
    pub title: String,
    pub description: Option<String>,
    /// Price in grosze.
    #[schema(example = 1250)]
    pub price: u32,
    /// Price formatted for display.
    #[schema(example = "12,50")]
    pub price_text: String,
    pub order_index: i32,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            category: item.category,
            section: item.section.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price.minor_units(),
            price_text: item.price.to_string(),
            order_index: item.order_index,
        }
    }
}

/// Stored item with the draft that shadows it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntryResponse {
    pub saved: MenuItemResponse,
    pub draft: MenuItemResponse,
    /// The draft differs from the stored item.
    pub dirty: bool,
}

impl From<&MenuEntry> for MenuEntryResponse {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            saved: MenuItemResponse::from(&entry.saved),
            draft: MenuItemResponse::from(&entry.draft),
            dirty: entry.saved != entry.draft,
        }
    }
}

/// One category tab of the menu.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuListingResponse {
    #[schema(value_type = CategorySchema)]
    pub category: Category,
    pub items: Vec<MenuEntryResponse>,
}

impl From<MenuListing> for MenuListingResponse {
    fn from(listing: MenuListing) -> Self {
        Self {
            category: listing.category,
            items: listing.entries.iter().map(MenuEntryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MenuQuery {
    /// `MATCHA`, `NAPOJE` or `JEDZENIE`; omit to keep the selected tab.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteQuery {
    /// Must be `true` for the delete to happen.
    pub confirm: Option<bool>,
}

/// Fields to merge into a draft. Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatchRequest {
    pub category: Option<String>,
    pub section: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Price as typed; text that does not parse keeps the previous price.
    #[schema(example = "12,50")]
    pub price_text: Option<String>,
    pub order_index: Option<i32>,
}

/// Add-item form as submitted by the panel.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub category: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(example = "15,00")]
    pub price_text: String,
}

/// Blank add-item form for the next entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemFormResponse {
    #[schema(value_type = CategorySchema)]
    pub category: Category,
    pub section: String,
    pub title: String,
    pub description: String,
    pub price_text: String,
}

impl From<AddItemForm> for AddItemFormResponse {
    fn from(form: AddItemForm) -> Self {
        Self {
            category: form.category,
            section: form.section,
            title: form.title,
            description: form.description,
            price_text: form.price_text,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub listing: MenuListingResponse,
    pub next_form: AddItemFormResponse,
}

impl From<AddItemOutcome> for AddItemResponse {
    fn from(outcome: AddItemOutcome) -> Self {
        Self {
            listing: outcome.listing.into(),
            next_form: outcome.next_form.into(),
        }
    }
}

fn parse_category(raw: &str) -> Result<Category, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request("category must be one of MATCHA, NAPOJE, JEDZENIE").with_details(
            json!({
                "field": "category",
                "value": raw,
                "code": "invalid_category",
            }),
        )
    })
}

fn parse_draft_patch(payload: DraftPatchRequest) -> Result<MenuItemPatch, Error> {
    Ok(MenuItemPatch {
        category: payload.category.as_deref().map(parse_category).transpose()?,
        section: payload.section,
        title: payload.title,
        description: payload.description,
        price: payload.price_text.as_deref().and_then(Price::parse),
        order_index: payload.order_index,
    })
}

fn parse_add_form(payload: AddItemRequest) -> Result<AddItemForm, Error> {
    Ok(AddItemForm {
        category: parse_category(&payload.category)?,
        section: payload.section,
        title: payload.title,
        description: payload.description,
        price_text: payload.price_text,
    })
}

/// Reload every item from the store and discard unsaved drafts.
#[utoipa::path(
    post,
    path = "/api/v1/menu/reload",
    responses(
        (status = 200, description = "Selected tab after reload", body = MenuListingResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "reloadMenu"
)]
#[post("/menu/reload")]
pub async fn reload_menu(state: web::Data<HttpState>) -> ApiResult<web::Json<MenuListingResponse>> {
    let listing = state.menu.reload().await?;
    Ok(web::Json(listing.into()))
}

/// List one category tab with its drafts. No store call.
#[utoipa::path(
    get,
    path = "/api/v1/menu",
    params(MenuQuery),
    responses(
        (status = 200, description = "Items of the tab in display order", body = MenuListingResponse),
        (status = 400, description = "Unknown category", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "listMenu"
)]
#[get("/menu")]
pub async fn list_menu(
    state: web::Data<HttpState>,
    query: web::Query<MenuQuery>,
) -> ApiResult<web::Json<MenuListingResponse>> {
    let category = query
        .into_inner()
        .category
        .as_deref()
        .map(parse_category)
        .transpose()?;
    let listing = state.menu.list(category).await?;
    Ok(web::Json(listing.into()))
}

/// Merge fields into an item's draft without saving.
#[utoipa::path(
    patch,
    path = "/api/v1/menu/items/{id}/draft",
    params(("id" = String, Path, description = "Menu item identifier")),
    request_body = DraftPatchRequest,
    responses(
        (status = 200, description = "Updated draft", body = MenuItemResponse),
        (status = 204, description = "No draft for this id; nothing changed"),
        (status = 400, description = "Unknown category", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "updateMenuDraft"
)]
#[patch("/menu/items/{id}/draft")]
pub async fn update_draft(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DraftPatchRequest>,
) -> ApiResult<HttpResponse> {
    let patch = parse_draft_patch(payload.into_inner())?;
    let draft = state
        .menu
        .update_draft(MenuItemId::new(path.into_inner()), patch)
        .await?;
    Ok(match draft {
        Some(draft) => HttpResponse::Ok().json(MenuItemResponse::from(&draft)),
        None => HttpResponse::NoContent().finish(),
    })
}

/// Persist an item's draft and reload.
#[utoipa::path(
    post,
    path = "/api/v1/menu/items/{id}/save",
    params(("id" = String, Path, description = "Menu item identifier")),
    responses(
        (status = 200, description = "Selected tab after reload", body = MenuListingResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "saveMenuItem"
)]
#[post("/menu/items/{id}/save")]
pub async fn save_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MenuListingResponse>> {
    let listing = state
        .menu
        .save_item(MenuItemId::new(path.into_inner()))
        .await?;
    Ok(web::Json(listing.into()))
}

/// Delete an item once the operator has confirmed.
#[utoipa::path(
    delete,
    path = "/api/v1/menu/items/{id}",
    params(
        ("id" = String, Path, description = "Menu item identifier"),
        DeleteQuery
    ),
    responses(
        (status = 200, description = "Selected tab, reloaded when the delete ran", body = MenuListingResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "deleteMenuItem"
)]
#[delete("/menu/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
) -> ApiResult<web::Json<MenuListingResponse>> {
    let confirmation = Confirmation::from(query.confirm.unwrap_or(false));
    let listing = state
        .menu
        .delete_item(MenuItemId::new(path.into_inner()), confirmation)
        .await?;
    Ok(web::Json(listing.into()))
}

/// Validate and insert a new item at the end of its section.
#[utoipa::path(
    post,
    path = "/api/v1/menu/items",
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Item added", body = AddItemResponse),
        (status = 400, description = "Invalid form; details.field names the field", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["menu"],
    operation_id = "addMenuItem"
)]
#[post("/menu/items")]
pub async fn add_item(
    state: web::Data<HttpState>,
    payload: web::Json<AddItemRequest>,
) -> ApiResult<HttpResponse> {
    let form = parse_add_form(payload.into_inner())?;
    let outcome = state.menu.add_item(form).await?;
    Ok(HttpResponse::Created().json(AddItemResponse::from(outcome)))
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
