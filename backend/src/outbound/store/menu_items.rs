//! Store-backed implementation of [`MenuItemRepository`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use tracing::debug;

use super::client::{StoreClient, StoreFailure};
use super::dto::{MenuItemRowDto, MenuItemWriteDto};
use super::eq_filter;
use crate::domain::ports::{MenuItemRepository, MenuItemRepositoryError};
use crate::domain::{MenuItem, MenuItemId, NewMenuItem};

const TABLE: &str = "menu_items";
const MENU_ORDER: &str = "category.asc,section.asc,order_index.asc";

/// `menu_items` collection reached through a [`StoreClient`].
#[derive(Clone)]
pub struct StoreMenuItemRepository {
    store: StoreClient,
}

impl StoreMenuItemRepository {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    fn list_request(&self) -> Result<RequestBuilder, MenuItemRepositoryError> {
        let mut url = self.store.table_url(TABLE).map_err(map_failure)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", MENU_ORDER);
        Ok(self.store.request(Method::GET, url))
    }

    fn by_id_request(
        &self,
        method: Method,
        id: &MenuItemId,
    ) -> Result<RequestBuilder, MenuItemRepositoryError> {
        let mut url = self.store.table_url(TABLE).map_err(map_failure)?;
        url.query_pairs_mut()
            .append_pair("id", &eq_filter(id.as_str()));
        Ok(self.store.write(method, url))
    }

    fn update_request(&self, item: &MenuItem) -> Result<RequestBuilder, MenuItemRepositoryError> {
        Ok(self
            .by_id_request(Method::PATCH, &item.id)?
            .json(&MenuItemWriteDto::from(item)))
    }

    fn insert_request(&self, item: &NewMenuItem) -> Result<RequestBuilder, MenuItemRepositoryError> {
        let url = self.store.table_url(TABLE).map_err(map_failure)?;
        Ok(self
            .store
            .write(Method::POST, url)
            .json(&MenuItemWriteDto::from(item)))
    }
}

fn map_failure(failure: StoreFailure) -> MenuItemRepositoryError {
    match failure {
        StoreFailure::Transport(message) => MenuItemRepositoryError::connection(message),
        StoreFailure::Rejected { status, message } => {
            debug!(status = status.as_u16(), %message, "menu store rejected request");
            MenuItemRepositoryError::query(message)
        }
    }
}

fn parse_rows(body: &[u8]) -> Result<Vec<MenuItem>, MenuItemRepositoryError> {
    let rows: Vec<MenuItemRowDto> = serde_json::from_slice(body).map_err(|error| {
        MenuItemRepositoryError::decode(format!("invalid menu_items payload: {error}"))
    })?;
    rows.into_iter()
        .map(|row| row.into_domain().map_err(MenuItemRepositoryError::decode))
        .collect()
}

#[async_trait]
impl MenuItemRepository for StoreMenuItemRepository {
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuItemRepositoryError> {
        let body = self
            .store
            .execute(self.list_request()?)
            .await
            .map_err(map_failure)?
            .ok_or_else(|| MenuItemRepositoryError::query("menu list was not acceptable"))?;
        let items = parse_rows(&body)?;
        debug!(count = items.len(), "loaded menu items");
        Ok(items)
    }

    async fn update(&self, item: &MenuItem) -> Result<(), MenuItemRepositoryError> {
        self.store
            .execute(self.update_request(item)?)
            .await
            .map_err(map_failure)?;
        debug!(id = %item.id, "updated menu item");
        Ok(())
    }

    async fn delete(&self, id: &MenuItemId) -> Result<(), MenuItemRepositoryError> {
        self.store
            .execute(self.by_id_request(Method::DELETE, id)?)
            .await
            .map_err(map_failure)?;
        debug!(%id, "deleted menu item");
        Ok(())
    }

    async fn insert(&self, item: &NewMenuItem) -> Result<(), MenuItemRepositoryError> {
        self.store
            .execute(self.insert_request(item)?)
            .await
            .map_err(map_failure)?;
        debug!(category = %item.category, section = %item.section, "inserted menu item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use reqwest::Url;
    use zeroize::Zeroizing;

    use super::*;
    use crate::domain::{Category, Price};
    use crate::outbound::store::StoreConfig;

    fn repository() -> StoreMenuItemRepository {
        let store = StoreClient::new(StoreConfig {
            url: Url::parse("https://abc.supabase.co").expect("valid url"),
            key: Zeroizing::new("anon-key".to_owned()),
        })
        .expect("client builds");
        StoreMenuItemRepository::new(store)
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        serde_json::from_slice(bytes).expect("json body")
    }

    #[test]
    fn list_selects_everything_in_menu_order() {
        let request = repository()
            .list_request()
            .expect("request")
            .build()
            .expect("builds");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/menu_items?select=*&order=category.asc%2Csection.asc%2Corder_index.asc"
        );
    }

    #[test]
    fn update_filters_by_id_and_sends_full_record() {
        let item = MenuItem {
            id: MenuItemId::new("42"),
            category: Category::Matcha,
            section: "Hot".to_owned(),
            title: "Usucha".to_owned(),
            description: Some("thin".to_owned()),
            price: Price::from_minor_units(1250),
            order_index: 3,
        };
        let request = repository()
            .update_request(&item)
            .expect("request")
            .build()
            .expect("builds");

        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().query(), Some("id=eq.42"));
        assert_eq!(
            body_json(&request),
            serde_json::json!({
                "category": "MATCHA",
                "section": "Hot",
                "title": "Usucha",
                "description": "thin",
                "price": 1250,
                "order_index": 3
            })
        );
    }

    #[test]
    fn delete_filters_by_id() {
        let request = repository()
            .by_id_request(Method::DELETE, &MenuItemId::new("a b"))
            .expect("request")
            .build()
            .expect("builds");
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().query(), Some("id=eq.a+b"));
    }

    #[test]
    fn insert_posts_without_id() {
        let new_item = NewMenuItem {
            category: Category::Napoje,
            section: "Cold".to_owned(),
            title: "Iced Latte".to_owned(),
            description: None,
            price: Price::from_minor_units(1500),
            order_index: 1,
        };
        let request = repository()
            .insert_request(&new_item)
            .expect("request")
            .build()
            .expect("builds");
        assert_eq!(request.method(), Method::POST);
        assert!(body_json(&request).get("id").is_none());
    }

    #[test]
    fn rejected_write_keeps_store_message() {
        let error = map_failure(StoreFailure::Rejected {
            status: StatusCode::FORBIDDEN,
            message: "new row violates row-level security policy".to_owned(),
        });
        assert_eq!(error.to_string(), "new row violates row-level security policy");
    }

    #[test]
    fn parse_rows_rejects_non_array_payload() {
        let error = parse_rows(br#"{"id":1}"#).expect_err("object is not a list");
        assert!(matches!(error, MenuItemRepositoryError::Decode { .. }));
    }
}
