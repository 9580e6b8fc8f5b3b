//! One refresh of the widget, from clock reading to displayable record
//!
//! `build_snapshot` runs the whole data path in order: resolve the meal
//! period, fetch its menu, update the freshness record and pull out the menu
//! items. `run` then hands the finished snapshot to a presenter. A failure at
//! any step aborts the refresh and nothing is presented.

use chrono::{DateTime, Local, Timelike};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::cache::{FreshnessCache, KeyValueStore, StoreError};
use crate::data::{menu_items, FetchError, MenuFetcher, DEFAULT_BASE_URL};
use crate::meal::{menu_url, resolve, MealPeriod};
use crate::ui::{PresentError, Presenter};

/// Settings the data path needs
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Scheme and host of the menu API, without the `/commons/...` path
    pub base_url: String,
    /// Hour used to pick the meal instead of the clock's
    ///
    /// Only meal resolution sees this; the freshness record and "last check"
    /// still use the real time.
    pub hour: Option<u32>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            hour: None,
        }
    }
}

/// Everything the widget shows for one refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Meal period resolved from the clock
    pub meal: MealPeriod,
    /// Heading label for the meal
    pub label: String,
    /// Menu items, in the order the API listed them
    pub items: Vec<String>,
    /// Epoch milliseconds stored by the previous run (or now, on first run)
    pub last_updated: i64,
    /// When this refresh happened
    pub checked_at: DateTime<Local>,
}

/// Errors that abort a refresh
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Present(#[from] PresentError),
}

/// Runs one refresh and assembles the snapshot
///
/// The freshness record is only touched once the fetch has succeeded. After
/// that it is always overwritten with `now`, even if the menu turns out to be
/// malformed.
pub async fn build_snapshot<S, F>(
    now: DateTime<Local>,
    store: &mut S,
    fetcher: &F,
    config: &MenuConfig,
) -> Result<Snapshot, SnapshotError>
where
    S: KeyValueStore + ?Sized,
    F: MenuFetcher + ?Sized,
{
    let meal = resolve(config.hour.unwrap_or_else(|| now.hour()));
    let url = menu_url(&config.base_url, meal);
    info!(%meal, url = %url, "resolved meal period");

    let menu = fetcher.fetch_json(&url).await?;

    let now_ms = now.timestamp_millis();
    let mut freshness = FreshnessCache::new(store);
    let last_updated = freshness.last_updated(now_ms)?;
    freshness.touch(now_ms)?;

    let items = menu_items(&menu)?;

    Ok(Snapshot {
        meal,
        label: meal.name().to_string(),
        items,
        last_updated,
        checked_at: now,
    })
}

/// Builds a snapshot and presents it
pub async fn run<S, F, P>(
    now: DateTime<Local>,
    store: &mut S,
    fetcher: &F,
    config: &MenuConfig,
    presenter: &mut P,
) -> Result<Snapshot, SnapshotError>
where
    S: KeyValueStore + ?Sized,
    F: MenuFetcher + ?Sized,
    P: Presenter + ?Sized,
{
    let snapshot = build_snapshot(now, store, fetcher, config).await?;
    info!(items = snapshot.items.len(), "creating widget");
    presenter.present(&snapshot)?;
    Ok(snapshot)
}
