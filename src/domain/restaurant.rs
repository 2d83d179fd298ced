use super::LngLat;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A menu item. Two pizzas are the same item only if both name and price match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub name: String,
    pub price_in_pence: u32,
}

impl Pizza {
    pub fn new(name: impl Into<String>, price_in_pence: u32) -> Self {
        Self {
            name: name.into(),
            price_in_pence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: LngLat,
    pub opening_days: Vec<DayOfWeek>,
    pub menu: Vec<Pizza>,
}

impl Restaurant {
    /// Number of pizzas in `order` that appear on this restaurant's menu
    pub fn count_served(&self, order: &[Pizza]) -> usize {
        order.iter().filter(|p| self.menu.contains(p)).count()
    }

    /// True if every pizza in `order` is on the menu
    pub fn serves_all(&self, order: &[Pizza]) -> bool {
        self.count_served(order) == order.len()
    }

    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.opening_days.contains(&DayOfWeek::from(date.weekday()))
    }
}
