use crate::config::PlannerConfig;
use crate::domain::{LngLat, Order, Restaurant};
use crate::error::{PlanError, Result};

use super::cache::{PathCache, RouteKey};
use super::search::{Airspace, CentralAreaRule, PathSearch, mirror_leg};
use super::Movement;

/// An order that was valid but could not be flown
#[derive(Debug, Clone, PartialEq)]
pub struct FailedOrder {
    pub order_no: String,
    pub error: PlanError,
}

/// Flight log for a whole day of orders
#[derive(Debug, Default)]
pub struct RoutePlan {
    /// Every movement of every delivered order, in delivery order
    pub movements: Vec<Movement>,
    pub delivered: usize,
    pub failed: Vec<FailedOrder>,
}

/// Plans round trips from the delivery point to each order's restaurant.
///
/// Owns the path cache for one run: repeated restaurant/delivery-point pairs
/// are searched once.
#[derive(Debug)]
pub struct PathManager {
    airspace: Airspace,
    restaurants: Vec<Restaurant>,
    delivery_point: LngLat,
    config: PlannerConfig,
    cache: PathCache,
}

impl PathManager {
    pub fn new(
        airspace: Airspace,
        restaurants: Vec<Restaurant>,
        delivery_point: LngLat,
        config: PlannerConfig,
    ) -> Self {
        Self {
            airspace,
            restaurants,
            delivery_point,
            config,
            cache: PathCache::new(),
        }
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Location of the first restaurant whose menu covers the whole order
    pub fn restaurant_location(&self, order: &Order) -> Result<LngLat> {
        self.restaurants
            .iter()
            .find(|r| r.serves_all(&order.pizzas_in_order))
            .map(|r| r.location)
            .ok_or_else(|| PlanError::UnresolvableRestaurant(order.order_no.clone()))
    }

    /// Plan every deliverable order and mark it delivered.
    ///
    /// An order whose restaurant cannot be resolved or whose path cannot be
    /// found is skipped and keeps its status; the rest of the run continues.
    pub fn determine_routes(&mut self, orders: &mut [Order]) -> RoutePlan {
        let mut plan = RoutePlan::default();

        for order in orders.iter_mut().filter(|o| o.is_deliverable()) {
            match self.plan_order(order) {
                Ok(path) => {
                    tracing::debug!(
                        order_no = %order.order_no,
                        moves = path.len(),
                        "order planned"
                    );
                    plan.movements.extend(path);
                    plan.delivered += 1;
                    order.mark_delivered();
                }
                Err(error) => {
                    tracing::warn!(order_no = %order.order_no, %error, "skipping order");
                    plan.failed.push(FailedOrder {
                        order_no: order.order_no.clone(),
                        error,
                    });
                }
            }
        }

        plan
    }

    fn plan_order(&mut self, order: &Order) -> Result<Vec<Movement>> {
        let source = self.restaurant_location(order)?;
        self.calculate_total_path(source, self.delivery_point, &order.order_no)
    }

    /// Round trip `target -> source -> target` for `order_no`.
    ///
    /// The outbound leg is searched from `target` toward `source`; the return
    /// leg is the outbound leg flown backwards. Each leg ends with a hover.
    ///
    /// A mirrored return leg ends exactly on `target`. When
    /// `verify_return_leg` is set and the mirror is illegal, the return leg
    /// is searched on its own and only ends close to `target`.
    pub fn calculate_total_path(
        &mut self,
        source: LngLat,
        target: LngLat,
        order_no: &str,
    ) -> Result<Vec<Movement>> {
        let key = RouteKey::new(source, target);
        if let Some(path) = self.cache.get(&key, order_no) {
            tracing::debug!(order_no, "path cache hit");
            return Ok(path);
        }

        let mut path = PathSearch::new(&self.airspace)
            .with_max_steps(self.config.max_steps)
            .find(target, source, order_no)?;
        let return_leg = self.return_leg(&path, target, order_no)?;
        path.extend(return_leg);

        self.cache.insert(key, path.clone());
        Ok(path)
    }

    fn return_leg(
        &self,
        outbound: &[Movement],
        target: LngLat,
        order_no: &str,
    ) -> Result<Vec<Movement>> {
        let mirrored = mirror_leg(outbound, order_no);
        if !self.config.verify_return_leg
            || self.airspace.is_legal_leg(&mirrored, CentralAreaRule::NoExit)
        {
            return Ok(mirrored);
        }

        tracing::warn!(order_no, "mirrored return leg is illegal, searching it directly");
        let pickup = outbound.last().map(|m| m.end).unwrap_or(target);
        PathSearch::new(&self.airspace)
            .with_rule(CentralAreaRule::NoExit)
            .with_max_steps(self.config.max_steps)
            .find(pickup, target, order_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CreditCardInformation, DayOfWeek, NamedRegion, OrderStatus, OrderValidationCode, Pizza,
    };
    use crate::geometry::is_close;
    use chrono::NaiveDate;

    fn central() -> NamedRegion {
        NamedRegion::new(
            "central",
            vec![
                LngLat::new(-0.001, -0.001),
                LngLat::new(0.001, -0.001),
                LngLat::new(0.001, 0.001),
                LngLat::new(-0.001, 0.001),
            ],
        )
    }

    fn restaurant(name: &str, location: LngLat, pizza: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            location,
            opening_days: vec![DayOfWeek::Friday],
            menu: vec![Pizza::new(pizza, 1000)],
        }
    }

    fn order(order_no: &str, pizza: &str) -> Order {
        Order {
            order_no: order_no.to_string(),
            order_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            order_status: OrderStatus::ValidButNotDelivered,
            order_validation_code: OrderValidationCode::NoError,
            price_total_in_pence: 1100,
            pizzas_in_order: vec![Pizza::new(pizza, 1000)],
            credit_card_information: CreditCardInformation {
                credit_card_number: "4012888888881881".to_string(),
                credit_card_expiry: "06/28".to_string(),
                cvv: "816".to_string(),
            },
        }
    }

    fn manager() -> PathManager {
        PathManager::new(
            Airspace::new(vec![], central()),
            vec![
                restaurant("East", LngLat::new(0.0025, 0.0003), "Margarita"),
                restaurant("North", LngLat::new(0.0002, 0.0022), "Calzone"),
            ],
            LngLat::new(0.0, 0.0),
            PlannerConfig::default(),
        )
    }

    #[test]
    fn test_restaurant_location() {
        let m = manager();
        assert_eq!(
            m.restaurant_location(&order("A", "Calzone")).unwrap(),
            LngLat::new(0.0002, 0.0022)
        );
        assert_eq!(
            m.restaurant_location(&order("B", "Hawaiian")).unwrap_err(),
            PlanError::UnresolvableRestaurant("B".to_string())
        );
    }

    #[test]
    fn test_determine_routes_marks_delivered() {
        let mut m = manager();
        let mut orders = vec![
            order("A", "Margarita"),
            order("B", "Hawaiian"),
            order("C", "Margarita"),
        ];
        orders.push(Order {
            order_status: OrderStatus::Invalid,
            ..order("D", "Margarita")
        });

        let plan = m.determine_routes(&mut orders);

        assert_eq!(plan.delivered, 2);
        assert_eq!(plan.failed.len(), 1);
        assert_eq!(plan.failed[0].order_no, "B");
        assert_eq!(orders[0].order_status, OrderStatus::Delivered);
        assert_eq!(orders[1].order_status, OrderStatus::ValidButNotDelivered);
        assert_eq!(orders[2].order_status, OrderStatus::Delivered);
        assert_eq!(orders[3].order_status, OrderStatus::Invalid);

        // A and C share a restaurant
        assert_eq!(m.cache().len(), 1);
        let a_moves = plan.movements.iter().filter(|mv| mv.order_no == "A").count();
        let c_moves = plan.movements.iter().filter(|mv| mv.order_no == "C").count();
        assert_eq!(a_moves, c_moves);
        assert_eq!(a_moves + c_moves, plan.movements.len());
    }

    #[test]
    fn test_verified_return_leg_matches_mirror() {
        let mut plain = manager();
        let mut strict = PathManager::new(
            Airspace::new(vec![], central()),
            vec![],
            LngLat::new(0.0, 0.0),
            PlannerConfig::default().with_verify_return_leg(true),
        );

        let source = LngLat::new(0.0025, 0.0003);
        let target = LngLat::new(0.0, 0.0);
        let a = plain.calculate_total_path(source, target, "A").unwrap();
        let b = strict.calculate_total_path(source, target, "A").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_illegal_mirror_is_searched_again() {
        // Delivery point inside a small no-fly square: the mirror would fly back into it
        let zone = NamedRegion::new(
            "rooftop",
            vec![
                LngLat::new(-0.0001, -0.0001),
                LngLat::new(0.0001, -0.0001),
                LngLat::new(0.0001, 0.0001),
                LngLat::new(-0.0001, 0.0001),
            ],
        );
        let airspace = Airspace::new(vec![zone], central());
        let target = LngLat::new(0.0, 0.0);
        let source = LngLat::new(0.002, 0.0);
        let mut strict = PathManager::new(
            airspace.clone(),
            vec![],
            target,
            PlannerConfig::default().with_verify_return_leg(true),
        );

        let path = strict.calculate_total_path(source, target, "A").unwrap();
        let pickup = path.iter().position(Movement::is_hover).unwrap();
        let (outbound, back) = path.split_at(pickup + 1);

        let mirrored = mirror_leg(outbound, "A");
        assert!(!airspace.is_legal_leg(&mirrored, CentralAreaRule::NoExit));
        assert_ne!(back, mirrored.as_slice());

        for m in back.iter().filter(|m| !m.is_hover()) {
            assert!(airspace.is_legal_move(m.start, m.end, CentralAreaRule::NoExit));
        }
        for m in outbound.iter().chain(back) {
            assert!(!airspace.in_no_fly_zone(m.end), "{:?} in no-fly zone", m.end);
        }

        let last = back.last().unwrap();
        assert!(last.is_hover());
        assert!(is_close(last.end, target));
        assert_eq!(back.first().unwrap().start, outbound.last().unwrap().end);
    }
}
