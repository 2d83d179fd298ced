//! dronepath - Plan no-fly-zone aware delivery drone flight paths

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod output;
pub mod planner;
pub mod validation;

pub use error::{PlanError, Result};
