//! Unified and per-category views over the five request sources.
//!
//! A load fetches every category concurrently and only publishes once all
//! five have settled. The published [`AggregatorState`] is a plain value:
//! it is built by [`AggregatorState::from_results`] from the joined fetch
//! results and never patched in place.
//!
//! A category whose fetch fails is flagged on its own; the other categories
//! still show their data, and the load still completes.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use crate::config::ALL_VIEW_PER_CATEGORY;
use crate::request::{Category, OrderBy, RequestRecord};
use crate::source::SourceSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CategorySlot {
    /// No load has completed yet.
    #[default]
    Pending,
    Loaded(Vec<RequestRecord>),
    Failed(String),
}

/// What a single category tab shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryView<'a> {
    Loading,
    Empty,
    Failed(&'a str),
    Requests(&'a [RequestRecord]),
}

/// The outcome of one category fetch, as handed to [`AggregatorState::from_results`].
pub type FetchResult = (Category, anyhow::Result<Vec<RequestRecord>>);

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatorState {
    phase: LoadPhase,
    generation: u64,
    slots: [CategorySlot; 5],
}

impl Default for AggregatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AggregatorState {
    /// Before the first load: loading, nothing to show.
    pub fn initial() -> Self {
        Self {
            phase: LoadPhase::Loading,
            generation: 0,
            slots: Default::default(),
        }
    }

    /// One result per category, as [`fetch_all`] returns them.
    pub fn from_results(generation: u64, results: [FetchResult; 5]) -> Self {
        let mut slots: [CategorySlot; 5] = Default::default();
        for (category, result) in results {
            slots[category.index()] = match result {
                Ok(records) => CategorySlot::Loaded(records),
                Err(e) => CategorySlot::Failed(format!("{e:#}")),
            };
        }
        Self {
            phase: LoadPhase::Loaded,
            generation,
            slots,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Number of completed loads this state descends from.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn slot(&self, category: Category) -> &CategorySlot {
        &self.slots[category.index()]
    }

    /// Up to [`ALL_VIEW_PER_CATEGORY`] records from each category, in tab
    /// order. Empty, failed and pending categories contribute nothing.
    pub fn view_all(&self) -> Vec<&RequestRecord> {
        Category::ALL
            .iter()
            .filter_map(|&c| match self.slot(c) {
                CategorySlot::Loaded(records) => Some(records),
                _ => None,
            })
            .flat_map(|records| records.iter().take(ALL_VIEW_PER_CATEGORY))
            .collect()
    }

    pub fn view_category(&self, category: Category) -> CategoryView<'_> {
        match self.slot(category) {
            CategorySlot::Pending => CategoryView::Loading,
            CategorySlot::Failed(message) => CategoryView::Failed(message),
            CategorySlot::Loaded(records) if records.is_empty() => CategoryView::Empty,
            CategorySlot::Loaded(records) => CategoryView::Requests(records),
        }
    }

    pub fn failures(&self) -> Vec<(Category, &str)> {
        Category::ALL
            .iter()
            .filter_map(|&c| match self.slot(c) {
                CategorySlot::Failed(message) => Some((c, message.as_str())),
                _ => None,
            })
            .collect()
    }
}

/// Lists every category concurrently and returns once all five have settled.
pub async fn fetch_all(sources: &SourceSet, order: OrderBy) -> [FetchResult; 5] {
    let fetch = |category: Category| {
        let source = sources.get(category).clone();
        async move {
            tracing::debug!("Fetching {} from {}", category, source.name());
            let result = source.list(order).await;
            match &result {
                Ok(records) => tracing::debug!("{}: {} request(s)", category, records.len()),
                Err(e) => tracing::warn!("Error loading {} requests: {:#}", category, e),
            }
            (category, result)
        }
    };

    let (travel, roommate, business, dating, social) = tokio::join!(
        fetch(Category::Travel),
        fetch(Category::Roommate),
        fetch(Category::Business),
        fetch(Category::Dating),
        fetch(Category::Social),
    );
    [travel, roommate, business, dating, social]
}

/// Marks a load as in flight until it is dropped, whether the load
/// finished or its future was cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns the latest published state. Loads are serialized: a second
/// [`Aggregator::load_all`] waits for the one in flight, then runs a full
/// cycle of its own.
///
/// While a load runs, snapshots report [`LoadPhase::Loading`] over the
/// previous data. A cancelled load leaves the previous state as it was.
pub struct Aggregator {
    sources: SourceSet,
    state: RwLock<AggregatorState>,
    load_gate: Mutex<()>,
    in_flight: AtomicBool,
}

impl Aggregator {
    pub fn new(sources: SourceSet) -> Self {
        Self {
            sources,
            state: RwLock::new(AggregatorState::initial()),
            load_gate: Mutex::new(()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// A copy of the currently visible state.
    pub async fn snapshot(&self) -> AggregatorState {
        let mut state = self.state.read().await.clone();
        if self.in_flight.load(Ordering::SeqCst) {
            state.phase = LoadPhase::Loading;
        }
        state
    }

    pub async fn load_all(&self) -> AggregatorState {
        let _gate = self.load_gate.lock().await;

        let _in_flight = InFlight::start(&self.in_flight);
        let generation = self.state.read().await.generation() + 1;

        let results = fetch_all(&self.sources, OrderBy::NewestFirst).await;
        let next = AggregatorState::from_results(generation, results);

        let failed = next.failures().len();
        if failed > 0 {
            tracing::warn!("Load {generation} finished, {failed} of 5 categories failed");
        } else {
            tracing::info!("Load {generation} finished");
        }

        *self.state.write().await = next.clone();
        next
    }
}
