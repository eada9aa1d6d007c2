use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::executor::{ExecuteOptions, Executor, RetryClassifier};
use super::transport::{HttpTransport, Transport};
use crate::config::{get_api_token, get_api_version};
use crate::constants::{ALL_ITEMS_PAGE_LIMIT, DEFAULT_RETURN_FIELDS};
use crate::error::{MondayError, MondayResult};
use crate::logging::log_info;
use crate::models::{BoardsData, NextItemsPageData};
use crate::query::{build_first_page_query, build_next_page_query, FieldSelection, MutationBuilder};

pub struct MondayClient<T = HttpTransport, C = super::ComplexityClassifier> {
    executor: Executor<T, C>,
    options: ExecuteOptions,
}

impl MondayClient {
    pub fn new(token: &str) -> MondayResult<Self> {
        Self::with_api_version(token, None)
    }

    pub fn with_api_version(token: &str, api_version: Option<&str>) -> MondayResult<Self> {
        Ok(Self::with_transport(HttpTransport::new(token, api_version)?))
    }

    /// Client built from `MONDAY_API_TOKEN`/`MONDAY_API_VERSION` or the
    /// saved configuration.
    pub fn from_config() -> MondayResult<Self> {
        let token = get_api_token()?;
        let api_version = get_api_version();
        Self::with_api_version(&token, api_version.as_deref())
    }
}

impl<T: Transport> MondayClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            executor: Executor::new(transport),
            options: ExecuteOptions::default(),
        }
    }
}

impl<T: Transport, C: RetryClassifier> MondayClient<T, C> {
    pub fn with_executor(executor: Executor<T, C>) -> Self {
        Self {
            executor,
            options: ExecuteOptions::default(),
        }
    }

    /// Retry budget used by `api`.
    pub fn execute_options(mut self, options: ExecuteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn executor(&self) -> &Executor<T, C> {
        &self.executor
    }

    /// Execute a GraphQL query with automatic retries and error handling
    pub async fn api<D: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> MondayResult<D> {
        self.executor.execute(query, variables, &self.options).await
    }

    pub async fn api_with_options<D: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
        options: &ExecuteOptions,
    ) -> MondayResult<D> {
        self.executor.execute(query, variables, options).await
    }

    /// Fetch every item of a board, following `items_page` cursors until
    /// the server returns no cursor.
    ///
    /// `return_fields` is the raw selection for each item and defaults to
    /// `id name`. A missing board yields an empty list.
    pub async fn get_all_items(
        &self,
        board_id: impl Display,
        return_fields: Option<&str>,
    ) -> MondayResult<Vec<Value>> {
        let fields = return_fields.unwrap_or(DEFAULT_RETURN_FIELDS);
        let board_id = board_id.to_string();

        let first_query = build_first_page_query(fields, ALL_ITEMS_PAGE_LIMIT);
        let data: BoardsData<Value> = self
            .api(&first_query, Some(json!({ "boardId": [board_id] })))
            .await?;

        let page = data
            .boards
            .and_then(|boards| boards.into_iter().next())
            .and_then(|board| board.items_page);
        let Some(page) = page else {
            return Ok(Vec::new());
        };

        let mut items = page.items;
        let mut cursor = page.cursor;
        let next_query = build_next_page_query(fields, ALL_ITEMS_PAGE_LIMIT);

        while let Some(current) = cursor {
            let data: NextItemsPageData<Value> = self
                .api(&next_query, Some(json!({ "cursor": current })))
                .await?;
            let page = data
                .next_items_page
                .ok_or_else(|| MondayError::MissingData("next_items_page".to_string()))?;

            items.extend(page.items);
            cursor = page.cursor;
        }

        log_info(&format!("Fetched {} items from board {}", items.len(), board_id));
        Ok(items)
    }

    /// Write several column values of one item. `column_values` maps column
    /// IDs to values built with `ColumnValuesBuilder`. Returns the item ID.
    pub async fn change_column_values(
        &self,
        board_id: impl Display,
        item_id: impl Display,
        column_values: &Value,
    ) -> MondayResult<String> {
        let mutation = MutationBuilder::new("change_multiple_column_values")
            .variable("boardId", "ID!")
            .variable("itemId", "ID!")
            .variable("columnValues", "JSON!")
            .args(&[
                ("board_id", "$boardId"),
                ("item_id", "$itemId"),
                ("column_values", "$columnValues"),
            ])
            .selection(FieldSelection::new().field("id"))
            .build();

        let variables = json!({
            "boardId": board_id.to_string(),
            "itemId": item_id.to_string(),
            "columnValues": column_values.to_string(),
        });

        #[derive(Debug, Deserialize)]
        struct ChangeData {
            change_multiple_column_values: Option<ChangedItem>,
        }

        #[derive(Debug, Deserialize)]
        struct ChangedItem {
            id: String,
        }

        let data: ChangeData = self.api(&mutation, Some(variables)).await?;
        data.change_multiple_column_values
            .map(|item| item.id)
            .ok_or_else(|| MondayError::MissingData("change_multiple_column_values".to_string()))
    }
}
