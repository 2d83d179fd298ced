//! Order validation against card rules, pricing and restaurant menus.
//!
//! Checks run in a fixed order and the first failure decides the
//! validation code.

use chrono::NaiveDate;

use crate::config::constants::{MAX_PIZZAS_PER_ORDER, ORDER_CHARGE_IN_PENCE};
use crate::domain::{Order, OrderStatus, OrderValidationCode, Pizza, Restaurant};

/// Validate `order`, record the outcome on it and return the code
pub fn validate_order(order: &mut Order, restaurants: &[Restaurant]) -> OrderValidationCode {
    let code = check_order(order, restaurants);
    let status = if code == OrderValidationCode::NoError {
        OrderStatus::ValidButNotDelivered
    } else {
        OrderStatus::Invalid
    };
    order.set_outcome(status, code);
    code
}

fn check_order(order: &Order, restaurants: &[Restaurant]) -> OrderValidationCode {
    let pizzas = &order.pizzas_in_order;
    let card = &order.credit_card_information;

    if pizzas.len() > MAX_PIZZAS_PER_ORDER {
        return OrderValidationCode::MaxPizzaCountExceeded;
    }
    if !is_valid_cvv(&card.cvv) {
        return OrderValidationCode::CvvInvalid;
    }
    if !is_valid_card_number(&card.credit_card_number) {
        return OrderValidationCode::CardNumberInvalid;
    }
    if is_card_expired(&card.credit_card_expiry, order.order_date).unwrap_or(true) {
        return OrderValidationCode::ExpiryDateInvalid;
    }
    if total_cost(pizzas) != Some(order.price_total_in_pence) {
        return OrderValidationCode::TotalIncorrect;
    }

    // Restaurants serving any of the pizzas; exactly one must serve all of them
    let mut serving = 0;
    let mut supplier = None;
    for restaurant in restaurants {
        let served = restaurant.count_served(pizzas);
        if served == pizzas.len() {
            serving += 1;
            supplier = Some(restaurant);
        } else if served > 0 {
            serving += 1;
        }
    }

    match supplier {
        _ if serving > 1 => OrderValidationCode::PizzaFromMultipleRestaurants,
        None => OrderValidationCode::PizzaNotDefined,
        Some(r) if !r.is_open_on(order.order_date) => OrderValidationCode::RestaurantClosed,
        Some(_) => OrderValidationCode::NoError,
    }
}

/// Sum of pizza prices plus the fixed delivery charge, `None` on overflow
pub fn total_cost(pizzas: &[Pizza]) -> Option<u32> {
    pizzas
        .iter()
        .try_fold(ORDER_CHARGE_IN_PENCE, |total, p| total.checked_add(p.price_in_pence))
}

pub fn is_valid_cvv(cvv: &str) -> bool {
    cvv.len() == 3 && cvv.bytes().all(|b| b.is_ascii_digit())
}

/// 16 ASCII digits passing the Luhn checksum
pub fn is_valid_card_number(number: &str) -> bool {
    if number.len() != 16 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                doubled / 10 + doubled % 10
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Whether a card with `MM/YY` expiry is expired on `order_date`.
///
/// A card is valid through the last day of its expiry month. Returns `None`
/// if the expiry is malformed.
pub fn is_card_expired(expiry: &str, order_date: NaiveDate) -> Option<bool> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let year = 2000 + year;

    let first_invalid_day = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some(order_date >= first_invalid_day)
}
