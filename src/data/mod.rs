//! Remote menu data
//!
//! This module contains the client for the Commons menu API and the helpers
//! that read the fields the widget displays out of a menu document.

pub mod menu;

pub use menu::{menu_items, FetchError, MenuClient, MenuFetcher, DEFAULT_BASE_URL};
