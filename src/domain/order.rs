use super::Pizza;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Undefined,
    ValidButNotDelivered,
    Delivered,
    Invalid,
}

/// Outcome of order validation. `NoError` is the only code of a valid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderValidationCode {
    #[default]
    Undefined,
    NoError,
    CardNumberInvalid,
    ExpiryDateInvalid,
    CvvInvalid,
    TotalIncorrect,
    PizzaNotDefined,
    MaxPizzaCountExceeded,
    PizzaFromMultipleRestaurants,
    RestaurantClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInformation {
    pub credit_card_number: String,
    /// `MM/YY`
    pub credit_card_expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: String,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub order_validation_code: OrderValidationCode,
    pub price_total_in_pence: u32,
    pub pizzas_in_order: Vec<Pizza>,
    pub credit_card_information: CreditCardInformation,
}

impl Order {
    pub fn set_outcome(&mut self, status: OrderStatus, code: OrderValidationCode) {
        self.order_status = status;
        self.order_validation_code = code;
    }

    pub fn is_deliverable(&self) -> bool {
        self.order_status == OrderStatus::ValidButNotDelivered
    }

    pub fn mark_delivered(&mut self) {
        self.order_status = OrderStatus::Delivered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        let json = r#"{
            "orderNo": "19514FE0",
            "orderDate": "2023-09-01",
            "orderStatus": "UNDEFINED",
            "orderValidationCode": "UNDEFINED",
            "priceTotalInPence": 2400,
            "pizzasInOrder": [
                {"name": "R1: Margarita", "priceInPence": 1000},
                {"name": "R1: Calzone", "priceInPence": 1400}
            ],
            "creditCardInformation": {
                "creditCardNumber": "4012888888881881",
                "creditCardExpiry": "06/28",
                "cvv": "816"
            }
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_no, "19514FE0");
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
        assert_eq!(order.order_status, OrderStatus::Undefined);
        assert_eq!(order.pizzas_in_order.len(), 2);
        assert_eq!(order.credit_card_information.cvv, "816");
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&OrderStatus::ValidButNotDelivered).unwrap();
        assert_eq!(json, r#""VALID_BUT_NOT_DELIVERED""#);
        let json = serde_json::to_string(&OrderValidationCode::PizzaFromMultipleRestaurants).unwrap();
        assert_eq!(json, r#""PIZZA_FROM_MULTIPLE_RESTAURANTS""#);
    }
}
