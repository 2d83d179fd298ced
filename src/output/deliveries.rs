use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::domain::{Order, OrderStatus, OrderValidationCode};

/// Outcome of one order, as written to the deliveries file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord<'a> {
    pub order_no: &'a str,
    pub order_status: OrderStatus,
    pub order_validation_code: OrderValidationCode,
    pub cost_in_pence: u32,
}

impl<'a> From<&'a Order> for DeliveryRecord<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            order_no: &order.order_no,
            order_status: order.order_status,
            order_validation_code: order.order_validation_code,
            cost_in_pence: order.price_total_in_pence,
        }
    }
}

/// Write one record per order, valid or not
pub fn write_deliveries(path: &Path, orders: &[Order]) -> Result<()> {
    let records: Vec<DeliveryRecord> = orders.iter().map(DeliveryRecord::from).collect();
    super::write_json(path, &records)
}
