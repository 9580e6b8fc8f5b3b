//! Commons Menu Library
//!
//! Resolves the current meal period, fetches its menu from the Commons API,
//! tracks when the widget last refreshed, and renders the result.

pub mod cache;
pub mod cli;
pub mod data;
pub mod meal;
pub mod snapshot;
pub mod ui;
