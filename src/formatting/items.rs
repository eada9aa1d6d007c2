use colored::*;

use super::utils::*;
use crate::models::{ColumnValue, Item};

pub fn format_column_value(column: &ColumnValue) -> String {
    match column.text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => format_value_text(&column.value),
    }
}

pub fn print_items(items: &[Item], format: &str) {
    if items.is_empty() {
        println!("{}", "No items found.".dimmed());
        return;
    }

    match format {
        "json" => match serde_json::to_string_pretty(items) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize items: {}", e),
        },
        _ => {
            for item in items {
                print_single_item(item);
                println!();
            }
        }
    }
}

pub fn print_single_item(item: &Item) {
    println!("{} {}", item.id.dimmed(), item.name.bold());
    print_values(item, 1);
}

fn print_values(item: &Item, depth: usize) {
    let indent = "  ".repeat(depth);

    for column in &item.values {
        let label = column.title.as_deref().unwrap_or(&column.id);
        println!(
            "{}{}: {}",
            indent,
            label.cyan(),
            truncate(&format_column_value(column), 80)
        );

        for linked in column.linked_items.iter().flatten() {
            println!("{}  {} {} {}", indent, "↳".dimmed(), linked.id.dimmed(), linked.name);
            print_values(linked, depth + 2);
        }
    }
}
