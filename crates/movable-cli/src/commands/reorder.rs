use anyhow::Result;
use serde_json::json;

use movable_core::{move_item, remove_item};

pub fn move_to(items: &[String], from: usize, to: isize, as_json: bool) -> Result<()> {
    if from >= items.len() {
        tracing::warn!(from, len = items.len(), "index out of range, list unchanged");
    }
    print_items(&move_item(items, from, to), as_json);
    Ok(())
}

pub fn remove(items: &[String], index: usize, as_json: bool) -> Result<()> {
    if index >= items.len() {
        tracing::warn!(index, len = items.len(), "index out of range, list unchanged");
    }
    print_items(&remove_item(items, index), as_json);
    Ok(())
}

fn print_items(items: &[String], as_json: bool) {
    if as_json {
        println!("{}", json!(items));
    } else {
        println!("{}", items.join(" "));
    }
}
