use std::fmt::Display;

use serde_json::Value;

use super::column::ColumnDef;
use super::operation::QueryBuilder;
use super::selection::FieldSelection;
use crate::constants::RELATION_VALUE_TYPE;

/// Query for the given items, with `id`, `name` and the requested columns.
///
/// An empty `item_ids` slice still yields a valid query that selects nothing.
pub fn build_item_query<I: Display>(item_ids: &[I], columns: &[ColumnDef]) -> String {
    QueryBuilder::new("items")
        .arg("ids", &id_list(item_ids))
        .selection(item_fields(columns))
        .build()
}

/// Query for the first page (`limit` items) of a board.
pub fn build_board_items_query(board_id: impl Display, columns: &[ColumnDef], limit: u32) -> String {
    let page = FieldSelection::new().nested("items", item_fields(columns));
    let limit = limit.to_string();

    QueryBuilder::new("boards")
        .arg("ids", &format!("[{}]", board_id))
        .selection(FieldSelection::new().nested_with_args(
            "items_page",
            &[("limit", limit.as_str())],
            page,
        ))
        .build()
}

/// First page of a cursor walk over a board. Takes `$boardId` as a variable.
pub fn build_first_page_query(return_fields: &str, limit: u32) -> String {
    let limit = limit.to_string();
    QueryBuilder::new("boards")
        .variable("boardId", "[ID!]")
        .arg("ids", "$boardId")
        .selection(FieldSelection::new().nested_with_args(
            "items_page",
            &[("limit", limit.as_str())],
            page_fields(return_fields),
        ))
        .build()
}

/// Follow-up page of a cursor walk. Takes `$cursor` as a variable.
pub fn build_next_page_query(return_fields: &str, limit: u32) -> String {
    let limit = limit.to_string();
    QueryBuilder::new("next_items_page")
        .variable("cursor", "String!")
        .args(&[("limit", limit.as_str()), ("cursor", "$cursor")])
        .selection(page_fields(return_fields))
        .build()
}

/// Column value selection for `columns`, expanding relation columns inline.
/// Returns an empty string when there are no columns.
pub fn build_column_selection(columns: &[ColumnDef]) -> String {
    let columns: Vec<&ColumnDef> = columns.iter().collect();
    column_selection(&columns).to_string()
}

fn item_fields(columns: &[ColumnDef]) -> FieldSelection {
    let columns: Vec<&ColumnDef> = columns.iter().collect();
    FieldSelection::new()
        .fields(&["id", "name"])
        .merge(column_selection(&columns))
}

fn page_fields(return_fields: &str) -> FieldSelection {
    FieldSelection::new()
        .field("cursor")
        .nested("items", FieldSelection::new().field(return_fields))
}

fn column_selection(columns: &[&ColumnDef]) -> FieldSelection {
    if columns.is_empty() {
        return FieldSelection::new();
    }

    let (linked, simple): (Vec<&ColumnDef>, Vec<&ColumnDef>) =
        columns.iter().copied().partition(|c| c.is_linked());

    // Relation columns are requested like any other column as well, their
    // own value has to come back for linked_items to be expanded.
    let top_level: Vec<&str> = simple.iter().chain(linked.iter()).map(|c| c.id()).collect();

    let mut values = FieldSelection::new()
        .fields(&["id", "text", "value", "type"])
        .nested("column", FieldSelection::new().field("title"));

    if !linked.is_empty() {
        // The fragment matches every relation column in this list, so the
        // sub-columns of all of them are requested together.
        let sub_columns: Vec<&ColumnDef> =
            linked.iter().copied().flat_map(ColumnDef::linked_columns).collect();

        let linked_items = FieldSelection::new()
            .fields(&["id", "name"])
            .merge(column_selection(&sub_columns));

        values = values.inline_fragment(
            RELATION_VALUE_TYPE,
            FieldSelection::new().nested("linked_items", linked_items),
        );
    }

    let ids = quoted_list(&top_level);
    FieldSelection::new().nested_with_args("column_values", &[("ids", ids.as_str())], values)
}

fn id_list<I: Display>(ids: &[I]) -> String {
    let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    format!("[{}]", ids.join(", "))
}

fn quoted_list(ids: &[&str]) -> String {
    let quoted = ids
        .iter()
        .map(|id| Value::from(*id).to_string())
        .collect::<Vec<_>>();
    format!("[{}]", quoted.join(", "))
}
