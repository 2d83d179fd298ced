//! Greedy heading search over the 16 compass headings.
//!
//! At every step the search evaluates all headings from the current
//! position and takes the legal one whose end point is nearest the goal.
//! Every point it has ever produced is remembered for the whole search and
//! can never be chosen again, even when reached from a different position.
//! This keeps the drone from oscillating but means the search can strand
//! itself; there is no backtracking.

use std::collections::HashSet;

use crate::config::PlannerConfig;
use crate::domain::{LngLat, NamedRegion, PointKey};
use crate::error::{PlanError, Result};
use crate::geometry::{COMPASS_HEADINGS, distance, in_region, is_close, next_position};

use super::Movement;

/// Which crossings of the central-area boundary a move may make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralAreaRule {
    /// From outside the central area a move may not enter it.
    /// Moves starting inside are unrestricted.
    NoEntry,
    /// From inside the central area a move may not leave it.
    /// Moves starting outside are unrestricted.
    NoExit,
}

/// The static obstacles of one planning run
#[derive(Debug, Clone)]
pub struct Airspace {
    pub no_fly_zones: Vec<NamedRegion>,
    pub central_area: NamedRegion,
}

impl Airspace {
    pub fn new(no_fly_zones: Vec<NamedRegion>, central_area: NamedRegion) -> Self {
        Self {
            no_fly_zones,
            central_area,
        }
    }

    pub fn in_no_fly_zone(&self, position: LngLat) -> bool {
        self.no_fly_zones.iter().any(|zone| in_region(position, zone))
    }

    pub fn in_central_area(&self, position: LngLat) -> bool {
        in_region(position, &self.central_area)
    }

    /// Legality of a move to `to` when the start's central-area membership is already known
    fn permits(&self, rule: CentralAreaRule, from_in_central: bool, to: LngLat) -> bool {
        if self.in_no_fly_zone(to) {
            return false;
        }
        let to_in_central = self.in_central_area(to);
        match rule {
            CentralAreaRule::NoEntry => from_in_central || !to_in_central,
            CentralAreaRule::NoExit => !from_in_central || to_in_central,
        }
    }

    pub fn is_legal_move(&self, from: LngLat, to: LngLat, rule: CentralAreaRule) -> bool {
        self.permits(rule, self.in_central_area(from), to)
    }

    /// True if every non-hover movement of `leg` is legal under `rule`
    pub fn is_legal_leg(&self, leg: &[Movement], rule: CentralAreaRule) -> bool {
        leg.iter()
            .filter(|m| !m.is_hover())
            .all(|m| self.is_legal_move(m.start, m.end, rule))
    }
}

/// A configured search over one airspace
#[derive(Debug, Clone)]
pub struct PathSearch<'a> {
    airspace: &'a Airspace,
    rule: CentralAreaRule,
    max_steps: usize,
}

impl<'a> PathSearch<'a> {
    pub fn new(airspace: &'a Airspace) -> Self {
        Self {
            airspace,
            rule: CentralAreaRule::NoEntry,
            max_steps: PlannerConfig::default().max_steps,
        }
    }

    pub fn with_rule(mut self, rule: CentralAreaRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Search from `from` until a position close to `to` is reached.
    ///
    /// The returned path ends with a hover movement at the arrival point.
    /// Fails with [`PlanError::PlanningExhausted`] if no heading is eligible
    /// at some step or the step ceiling is hit.
    pub fn find(&self, from: LngLat, to: LngLat, order_no: &str) -> Result<Vec<Movement>> {
        let mut visited: HashSet<PointKey> = HashSet::new();
        let mut current = from;
        let mut path = Vec::new();

        while !is_close(current, to) {
            if path.len() >= self.max_steps {
                return Err(PlanError::PlanningExhausted {
                    steps: path.len(),
                    at: current,
                });
            }

            let current_in_central = self.airspace.in_central_area(current);
            // (heading, end point, distance to goal)
            let mut best: Option<(f64, LngLat, f64)> = None;

            for heading in COMPASS_HEADINGS {
                let candidate = next_position(current, heading)?;

                // Seen before, from any position
                if !visited.insert(candidate.key()) {
                    continue;
                }
                if !self.airspace.permits(self.rule, current_in_central, candidate) {
                    continue;
                }

                let remaining = distance(candidate, to);
                if best.is_none_or(|(_, _, closest)| remaining < closest) {
                    best = Some((heading, candidate, remaining));
                }
            }

            let Some((heading, next, _)) = best else {
                return Err(PlanError::PlanningExhausted {
                    steps: path.len(),
                    at: current,
                });
            };

            path.push(Movement::new(current, heading, next, order_no));
            current = next;
        }

        tracing::trace!(
            steps = path.len(),
            visited = visited.len(),
            "search arrived"
        );

        path.push(Movement::hover(current, order_no));
        Ok(path)
    }
}

/// Build the return leg of `outbound` by flying it backwards.
///
/// Hover markers are dropped, every movement is reversed, the order is
/// flipped and a new hover marker is appended where the leg ends, which is
/// the start of `outbound`.
pub fn mirror_leg(outbound: &[Movement], order_no: &str) -> Vec<Movement> {
    let Some(first) = outbound.first() else {
        return Vec::new();
    };

    let mut leg: Vec<Movement> = outbound
        .iter()
        .filter(|m| !m.is_hover())
        .map(|m| m.reversed().for_order(order_no))
        .collect();
    leg.reverse();

    let end = leg.last().map(|m| m.end).unwrap_or(first.start);
    leg.push(Movement::hover(end, order_no));
    leg
}
