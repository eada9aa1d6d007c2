use serde::Deserialize;

use super::RawItem;

#[derive(Debug, Deserialize)]
pub struct ItemsData {
    #[serde(default)]
    pub items: Option<Vec<RawItem>>,
}

#[derive(Debug, Deserialize)]
pub struct BoardsData<T> {
    pub boards: Option<Vec<Board<T>>>,
}

#[derive(Debug, Deserialize)]
pub struct Board<T> {
    pub items_page: Option<ItemsPage<T>>,
}

/// One page of a cursor paginated item listing. A `None` cursor marks the
/// last page.
#[derive(Debug, Deserialize)]
pub struct ItemsPage<T> {
    pub cursor: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct NextItemsPageData<T> {
    pub next_items_page: Option<ItemsPage<T>>,
}
