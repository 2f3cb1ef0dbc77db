pub mod html;
pub mod json;
pub mod terminal;

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregator::{AggregatorState, CategorySlot, CategoryView, LoadPhase};
use crate::request::{Category, RequestDetails, RequestRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Html,
}

#[derive(Debug, Serialize)]
pub struct FailedCategory {
    pub category: Category,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    /// `None` when the category failed to load.
    pub total: Option<usize>,
}

/// One rendered tab of the connections screen.
#[derive(Debug, Serialize)]
pub struct ConnectionsView {
    pub generated_at: String,
    /// `"all"` or a category name.
    pub tab: String,
    pub phase: LoadPhase,
    pub requests: Vec<RequestRecord>,
    pub empty_message: Option<String>,
    pub failed: Vec<FailedCategory>,
    pub summary: Vec<CategorySummary>,
}

impl ConnectionsView {
    /// `tab = None` is the capped "all" view.
    pub fn build(state: &AggregatorState, tab: Option<Category>) -> Self {
        let failed_in = |categories: &[Category]| {
            state
                .failures()
                .into_iter()
                .filter(|(c, _)| categories.contains(c))
                .map(|(category, error)| FailedCategory {
                    category,
                    error: error.to_string(),
                })
                .collect::<Vec<_>>()
        };

        let summary = Category::ALL
            .iter()
            .map(|&category| CategorySummary {
                category,
                total: match state.slot(category) {
                    CategorySlot::Loaded(records) => Some(records.len()),
                    _ => None,
                },
            })
            .collect();

        let (tab_name, requests, empty_message, failed) = match tab {
            None => (
                "all".to_string(),
                state.view_all().into_iter().cloned().collect(),
                None,
                failed_in(&Category::ALL),
            ),
            Some(category) => {
                let (requests, empty_message) = match state.view_category(category) {
                    CategoryView::Requests(records) => (records.to_vec(), None),
                    CategoryView::Empty => (Vec::new(), Some(category.empty_message())),
                    CategoryView::Failed(_) => (Vec::new(), None),
                    CategoryView::Loading => (Vec::new(), Some("Loading requests...".to_string())),
                };
                (
                    category.as_str().to_string(),
                    requests,
                    empty_message,
                    failed_in(&[category]),
                )
            }
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            tab: tab_name,
            phase: state.phase(),
            requests,
            empty_message,
            failed,
            summary,
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Terminal => terminal::render(self),
            OutputFormat::Json => json::render(self),
            OutputFormat::Html => html::render(self),
        }
    }
}

/// Headline plus detail lines summarising one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<String>,
}

fn short_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| "TBD".into())
}

pub fn card(record: &RequestRecord) -> Card {
    match &record.details {
        RequestDetails::Travel(t) => Card {
            title: t.destination.clone(),
            lines: vec![
                format!("{} - {}", short_date(t.start_date), short_date(t.end_date)),
                format!("Budget: ${} - ${}", t.budget_min, t.budget_max),
            ],
        },
        RequestDetails::Roommate(r) => Card {
            title: "Looking for Roommate".into(),
            lines: vec![
                format!("Budget: ${} - ${}/month", r.budget_min, r.budget_max),
                if r.preferred_locations.is_empty() {
                    "Location flexible".into()
                } else {
                    r.preferred_locations.join(", ")
                },
            ],
        },
        RequestDetails::Business(b) => Card {
            title: b.business_type.label(),
            lines: vec![
                b.business_idea.clone(),
                format!(
                    "Stage: {} \u{2022} {}",
                    b.business_stage.label(),
                    b.commitment_level.label()
                ),
            ],
        },
        RequestDetails::Dating(d) => Card {
            title: format!("Looking for {}", d.relationship_type.label()),
            lines: vec![
                format!("Age: {} - {}", d.age_min, d.age_max),
                format!("Activity: {}", d.date_activity.label()),
            ],
        },
        RequestDetails::Social(s) => Card {
            title: s.activity_type.label(),
            lines: vec![
                format!("{} at {}", short_date(s.preferred_date), s.preferred_time),
                s.location.clone(),
            ],
        },
    }
}
