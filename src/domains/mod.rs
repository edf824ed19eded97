//! Per-domain defaults and fixed-shape responses for the shop modules.

pub mod cart;
pub mod goods;
pub mod order;
pub mod user;
