use serde::{Deserialize, Serialize};

use crate::config::ResponseDefaults;
use crate::interceptors::{ApiResponse, Responder};

/// Goods keep the base messages.
pub const DEFAULTS: ResponseDefaults = ResponseDefaults::BASE;

pub fn responder(debug: bool) -> Responder {
    Responder::new(DEFAULTS, debug)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutOfStock {
    pub product_id: i64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub old_price: f64,
    pub new_price: f64,
    pub change: f64,
}

pub fn out_of_stock(responder: &Responder, product_id: i64) -> ApiResponse<OutOfStock> {
    responder.error(
        Some("product out of stock"),
        Some(409),
        None,
        Some(OutOfStock {
            product_id,
            available: false,
        }),
    )
}

pub fn price_updated(responder: &Responder, old_price: f64, new_price: f64) -> ApiResponse<PriceChange> {
    responder.success(
        Some(PriceChange {
            old_price,
            new_price,
            change: new_price - old_price,
        }),
        Some("price updated"),
        None,
    )
}
