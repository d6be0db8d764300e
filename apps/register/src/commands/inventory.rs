//! # Inventory Commands
//!
//! Catalog listing and maintenance: add, edit price, restock.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::SessionState;
use till_core::validation::{parse_money, parse_quantity};
use till_core::{CoreResult, Item};

/// Item DTO for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        ItemDto {
            name: item.name.clone(),
            price_cents: item.price.cents(),
            stock: item.stock,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            price_cents: item.price.cents(),
            stock: item.stock,
            name: item.name,
        }
    }
}

/// Lists the catalog in the order items were added.
pub fn list_items(session: &SessionState) -> Vec<ItemDto> {
    debug!("list_items command");
    session.with_session(|s| s.catalog().list().map(ItemDto::from).collect())
}

/// Adds an item, or replaces price and stock of an existing one.
pub fn add_item(
    session: &SessionState,
    name: &str,
    price: &str,
    stock: &str,
) -> Result<ItemDto, ApiError> {
    debug!(name = %name, price = %price, stock = %stock, "add_item command");

    let price = parse_money("price", price)?;
    let stock = parse_quantity("stock", stock)?;

    let item = logged(
        "add_item",
        name,
        session.with_session_mut(|s| s.inventory().add_item(name, price, stock)),
    )?;

    info!(name = %item.name, price = %item.price, stock = item.stock, "Item added");
    Ok(item.into())
}

/// Sets a new unit price; later sales use it, earlier ones keep theirs.
pub fn edit_price(session: &SessionState, name: &str, price: &str) -> Result<ItemDto, ApiError> {
    debug!(name = %name, price = %price, "edit_price command");

    let price = parse_money("price", price)?;

    let item = logged(
        "edit_price",
        name,
        session.with_session_mut(|s| s.inventory().edit_price(name, price)),
    )?;

    info!(name = %item.name, price = %item.price, "Price edited");
    Ok(item.into())
}

/// Adds `units` (at least one) to an item's stock.
pub fn restock(session: &SessionState, name: &str, units: &str) -> Result<ItemDto, ApiError> {
    debug!(name = %name, units = %units, "restock command");

    let units = parse_quantity("units", units)?;

    let item = logged(
        "restock",
        name,
        session.with_session_mut(|s| s.inventory().restock(name, units)),
    )?;

    info!(name = %item.name, stock = item.stock, added = units, "Item restocked");
    Ok(item.into())
}

fn logged(command: &str, name: &str, result: CoreResult<Item>) -> Result<Item, ApiError> {
    result.map_err(|e| {
        warn!(command = %command, name = %name, error = %e, "Inventory change rejected");
        ApiError::from(e)
    })
}
