use serde::{Deserialize, Serialize};

use crate::config::ResponseDefaults;
use crate::interceptors::{ApiResponse, Responder};

pub const DEFAULTS: ResponseDefaults =
    ResponseDefaults::with_messages("cart operation succeeded", "cart operation failed");

pub fn responder(debug: bool) -> Responder {
    Responder::new(DEFAULTS, debug)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u32,
    pub total_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product_id: i64,
    pub quantity: u32,
    pub cart_total_items: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockShortage {
    pub product_id: i64,
    pub available_stock: u32,
    pub requested_quantity: u32,
    pub shortfall: u32,
}

pub fn cart_empty(responder: &Responder) -> ApiResponse<CartSummary> {
    responder.success(
        Some(CartSummary {
            item_count: 0,
            total_amount: 0,
        }),
        Some("cart is empty"),
        None,
    )
}

pub fn item_added(
    responder: &Responder,
    product_id: i64,
    quantity: u32,
    cart_total: u32,
) -> ApiResponse<ItemAdded> {
    responder.success(
        Some(ItemAdded {
            product_id,
            quantity,
            cart_total_items: cart_total,
        }),
        Some("item added to cart"),
        None,
    )
}

pub fn insufficient_stock(
    responder: &Responder,
    product_id: i64,
    available: u32,
    requested: u32,
) -> ApiResponse<StockShortage> {
    responder.error(
        Some("insufficient stock"),
        Some(409),
        None,
        Some(StockShortage {
            product_id,
            available_stock: available,
            requested_quantity: requested,
            shortfall: requested.saturating_sub(available),
        }),
    )
}
