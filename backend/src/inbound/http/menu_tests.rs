//! Tests for the menu panel handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::App;
use actix_web::test as actix_test;
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{FixturePointsLedgerCommand, MockMenuEditorCommand};
use crate::domain::{ErrorCode, MenuItemId};
use crate::inbound::http::configure_api;

fn latte() -> MenuItem {
    MenuItem {
        id: MenuItemId::new("7"),
        category: Category::Napoje,
        section: "Cold".to_owned(),
        title: "Iced Latte".to_owned(),
        description: None,
        price: Price::from_minor_units(1500),
        order_index: 1,
    }
}

fn listing_of(category: Category, items: &[MenuItem]) -> MenuListing {
    MenuListing {
        category,
        entries: items
            .iter()
            .map(|item| MenuEntry {
                saved: item.clone(),
                draft: item.clone(),
            })
            .collect(),
    }
}

fn state_with(menu: MockMenuEditorCommand) -> HttpState {
    HttpState::new(Arc::new(menu), Arc::new(FixturePointsLedgerCommand))
}

async fn send(state: HttpState, req: actix_test::TestRequest) -> (StatusCode, Option<Value>) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").configure(configure_api)),
    )
    .await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = actix_test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).ok();
    (status, body)
}

#[rstest]
fn parse_category_names_the_field() {
    let err = parse_category("COFFEE").expect_err("unknown category");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("details");
    assert_eq!(details["field"], "category");
    assert_eq!(details["value"], "COFFEE");
}

#[rstest]
#[case(Some("12,50"), Some(1250))]
#[case(Some("abc"), None)]
#[case(Some(""), None)]
#[case(Some("\u{feff}7,5"), Some(750))]
#[case(None, None)]
fn draft_patch_keeps_price_when_text_does_not_parse(
    #[case] price_text: Option<&str>,
    #[case] expected: Option<u32>,
) {
    let patch = parse_draft_patch(DraftPatchRequest {
        price_text: price_text.map(str::to_owned),
        ..DraftPatchRequest::default()
    })
    .expect("valid patch");
    assert_eq!(patch.price.map(Price::minor_units), expected);
}

#[rstest]
fn menu_item_response_formats_price() {
    let response = MenuItemResponse::from(&latte());
    assert_eq!(response.price, 1500);
    assert_eq!(response.price_text, "15,00");
    assert_eq!(response.category, Category::Napoje);
}

#[actix_web::test]
async fn list_passes_requested_category() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_list()
        .with(eq(Some(Category::Napoje)))
        .times(1)
        .return_once(|category| Ok(listing_of(category.unwrap_or_default(), &[latte()])));

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::get().uri("/api/v1/menu?category=NAPOJE"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = body.expect("json body");
    assert_eq!(body["category"], "NAPOJE");
    assert_eq!(body["items"][0]["saved"]["title"], "Iced Latte");
    assert_eq!(body["items"][0]["draft"]["priceText"], "15,00");
    assert_eq!(body["items"][0]["dirty"], false);
}

#[actix_web::test]
async fn list_without_category_keeps_selected_tab() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_list()
        .with(eq(None::<Category>))
        .times(1)
        .return_once(|_| Ok(listing_of(Category::Jedzenie, &[])));

    let (status, body) = send(state_with(menu), actix_test::TestRequest::get().uri("/api/v1/menu")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("json body")["category"], "JEDZENIE");
}

#[actix_web::test]
async fn list_rejects_unknown_category() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_list().never();

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::get().uri("/api/v1/menu?category=coffee"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.expect("json body")["details"]["field"], "category");
}

#[actix_web::test]
async fn draft_update_returns_merged_draft() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_update_draft()
        .withf(|id, patch| {
            id.as_str() == "7"
                && patch.title.as_deref() == Some("Iced Matcha Latte")
                && patch.price.is_none()
        })
        .times(1)
        .return_once(|_, patch| {
            let mut draft = latte();
            draft.apply(patch);
            Ok(Some(draft))
        });

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::patch()
            .uri("/api/v1/menu/items/7/draft")
            .set_json(json!({"title": "Iced Matcha Latte", "priceText": "abc"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = body.expect("json body");
    assert_eq!(body["title"], "Iced Matcha Latte");
    assert_eq!(body["price"], 1500);
}

#[actix_web::test]
async fn draft_update_without_draft_is_no_content() {
    let (status, body) = send(
        HttpState::default(),
        actix_test::TestRequest::patch()
            .uri("/api/v1/menu/items/ghost/draft")
            .set_json(json!({"title": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
}

#[actix_web::test]
async fn save_forwards_item_id() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_save_item()
        .with(eq(MenuItemId::new("7")))
        .times(1)
        .return_once(|_| Ok(listing_of(Category::Napoje, &[latte()])));

    let (status, _) = send(
        state_with(menu),
        actix_test::TestRequest::post().uri("/api/v1/menu/items/7/save"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case("/api/v1/menu/items/7?confirm=true", Confirmation::Confirmed)]
#[case("/api/v1/menu/items/7?confirm=false", Confirmation::Declined)]
#[case("/api/v1/menu/items/7", Confirmation::Declined)]
#[actix_web::test]
async fn delete_requires_explicit_confirmation(
    #[case] uri: &str,
    #[case] expected: Confirmation,
) {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_delete_item()
        .with(eq(MenuItemId::new("7")), eq(expected))
        .times(1)
        .return_once(|_, _| Ok(listing_of(Category::Matcha, &[])));

    let (status, _) = send(state_with(menu), actix_test::TestRequest::delete().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn add_item_returns_created_with_blank_form() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_add_item()
        .withf(|form| {
            form.category == Category::Napoje
                && form.section == "Cold"
                && form.title == "Iced Latte"
                && form.price_text == "15,00"
        })
        .times(1)
        .return_once(|form| {
            Ok(AddItemOutcome {
                listing: listing_of(Category::Napoje, &[latte()]),
                next_form: AddItemForm::blank(form.category),
            })
        });

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::post().uri("/api/v1/menu/items").set_json(json!({
            "category": "NAPOJE",
            "section": "Cold",
            "title": "Iced Latte",
            "priceText": "15,00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = body.expect("json body");
    assert_eq!(body["listing"]["items"][0]["saved"]["orderIndex"], 1);
    assert_eq!(body["nextForm"]["category"], "NAPOJE");
    assert_eq!(body["nextForm"]["title"], "");
}

#[actix_web::test]
async fn add_item_validation_error_is_bad_request() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_add_item().return_once(|_| {
        Err(Error::invalid_request("title is required")
            .with_details(json!({"field": "title", "code": "invalid_menu_item"})))
    });

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::post()
            .uri("/api/v1/menu/items")
            .set_json(json!({"category": "MATCHA", "section": "Hot", "priceText": "9"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.expect("json body")["details"]["field"], "title");
}

#[actix_web::test]
async fn store_failure_is_service_unavailable_with_store_message() {
    let mut menu = MockMenuEditorCommand::new();
    menu.expect_reload()
        .return_once(|| Err(Error::service_unavailable("permission denied for table")));

    let (status, body) = send(
        state_with(menu),
        actix_test::TestRequest::post().uri("/api/v1/menu/reload"),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.expect("json body")["message"], "permission denied for table");
}

#[actix_web::test]
async fn malformed_json_is_invalid_request() {
    let (status, body) = send(
        HttpState::default(),
        actix_test::TestRequest::post()
            .uri("/api/v1/menu/items")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.expect("json body")["code"], "invalid_request");
}
