use serde::{Deserialize, Serialize};

use crate::config::ResponseDefaults;
use crate::interceptors::{ApiResponse, Responder};

pub const DEFAULTS: ResponseDefaults =
    ResponseDefaults::with_messages("order operation succeeded", "order operation failed");

const PENDING: &str = "pending";

pub fn responder(debug: bool) -> Responder {
    Responder::new(DEFAULTS, debug)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: i64,
    pub order_number: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDue {
    pub order_id: i64,
    pub amount: f64,
    pub payment_status: String,
}

pub fn order_created(
    responder: &Responder,
    order_id: i64,
    order_number: impl Into<String>,
) -> ApiResponse<OrderCreated> {
    responder.created(
        Some(OrderCreated {
            order_id,
            order_number: order_number.into(),
            status: PENDING.to_string(),
        }),
        Some("order created"),
    )
}

pub fn payment_required(responder: &Responder, order_id: i64, amount: f64) -> ApiResponse<PaymentDue> {
    responder.error(
        Some("payment required"),
        Some(402),
        None,
        Some(PaymentDue {
            order_id,
            amount,
            payment_status: PENDING.to_string(),
        }),
    )
}
