use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::client::{HttpTransport, MondayClient, RetryClassifier, Transport};
use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::error::{MondayError, MondayResult};
use crate::models::{BoardsData, ColumnValue, Item, ItemsData, RawColumnValue, RawItem};
use crate::query::{build_board_items_query, build_item_query, ColumnDef};

/// Fetches items with the requested columns and flattens them into `Item`s.
pub struct FetchService<T = HttpTransport, C = crate::client::ComplexityClassifier> {
    client: Arc<MondayClient<T, C>>,
}

impl<T: Transport, C: RetryClassifier> FetchService<T, C> {
    pub fn new(client: Arc<MondayClient<T, C>>) -> Self {
        Self { client }
    }

    pub async fn get_item(
        &self,
        item_id: impl Display,
        columns: &[ColumnDef],
    ) -> MondayResult<Option<Item>> {
        let query = build_item_query(&[item_id], columns);
        let data: ItemsData = self.client.api(&query, None).await?;

        Ok(data
            .items
            .and_then(|items| items.into_iter().next())
            .map(map_item))
    }

    pub async fn get_items<I: Display>(
        &self,
        item_ids: &[I],
        columns: &[ColumnDef],
    ) -> MondayResult<Vec<Item>> {
        let query = build_item_query(item_ids, columns);
        let data: ItemsData = self.client.api(&query, None).await?;

        Ok(data
            .items
            .unwrap_or_default()
            .into_iter()
            .map(map_item)
            .collect())
    }

    /// First page (50 items) of a board.
    pub async fn get_board_items(
        &self,
        board_id: impl Display,
        columns: &[ColumnDef],
    ) -> MondayResult<Vec<Item>> {
        self.get_board_page(board_id, columns, DEFAULT_PAGE_LIMIT).await
    }

    pub async fn get_board_page(
        &self,
        board_id: impl Display,
        columns: &[ColumnDef],
        limit: u32,
    ) -> MondayResult<Vec<Item>> {
        if limit == 0 {
            return Err(MondayError::InvalidInput(
                "Page limit must be a positive number".to_string(),
            ));
        }

        let query = build_board_items_query(board_id, columns, limit);
        let data: BoardsData<RawItem> = self.client.api(&query, None).await?;

        let items = data
            .boards
            .and_then(|boards| boards.into_iter().next())
            .and_then(|board| board.items_page)
            .map(|page| page.items)
            .unwrap_or_default();

        Ok(items.into_iter().map(map_item).collect())
    }
}

/// Parse a user supplied page size. Zero and non-numbers are rejected.
pub fn parse_page_limit(value: &str) -> MondayResult<u32> {
    match value.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(MondayError::InvalidInput(format!(
            "Page limit must be a positive number, got '{}'",
            value
        ))),
    }
}

/// Flatten a raw item: parse each column's JSON `value` and map linked
/// items recursively.
pub fn map_item(raw: RawItem) -> Item {
    Item {
        id: raw.id,
        name: raw.name,
        values: raw.column_values.into_iter().map(map_column_value).collect(),
    }
}

fn map_column_value(raw: RawColumnValue) -> ColumnValue {
    ColumnValue {
        id: raw.id,
        text: raw.text,
        value: parse_value(raw.value),
        column_type: raw.column_type,
        title: raw.column.and_then(|c| c.title),
        linked_items: raw
            .linked_items
            .map(|items| items.into_iter().map(map_item).collect()),
    }
}

// Values arrive JSON encoded; keep the raw string when it is not valid JSON.
fn parse_value(raw: Option<String>) -> Value {
    match raw {
        None => Value::Null,
        Some(s) if s.is_empty() => Value::Null,
        Some(s) => serde_json::from_str(&s).unwrap_or(Value::String(s)),
    }
}
