//! Meal period resolution
//!
//! Maps the local hour of day to the meal currently being served. The result
//! is both the widget's heading and the path segment of the menu URL.

use std::fmt;

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// A meal served at the dining hall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealPeriod {
    /// Resolves the meal period for the local hour of `time`
    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        resolve(time.hour())
    }

    /// Human-readable name, e.g. "Breakfast"
    pub fn name(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "Breakfast",
            MealPeriod::Lunch => "Lunch",
            MealPeriod::Dinner => "Dinner",
        }
    }

    /// Lower-cased name used as the URL path segment
    pub fn slug(&self) -> &'static str {
        match self {
            MealPeriod::Breakfast => "breakfast",
            MealPeriod::Lunch => "lunch",
            MealPeriod::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an hour of day to a meal period
///
/// Hour 16 and hour 0 are not covered by any serving window and fall back to
/// breakfast, as does any hour outside 0-23.
pub fn resolve(hour: u32) -> MealPeriod {
    match hour {
        1..=9 => MealPeriod::Breakfast,
        10..=15 => MealPeriod::Lunch,
        17..=23 => MealPeriod::Dinner,
        _ => MealPeriod::Breakfast,
    }
}

/// Builds the menu endpoint for a meal period: `{base}/commons/{slug}`
pub fn menu_url(base_url: &str, period: MealPeriod) -> String {
    format!("{}/commons/{}", base_url.trim_end_matches('/'), period.slug())
}
