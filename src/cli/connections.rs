use crate::aggregator::Aggregator;
use crate::render::{ConnectionsView, OutputFormat};
use crate::request::Category;

pub async fn connections(
    aggregator: &Aggregator,
    category: Option<Category>,
    format: OutputFormat,
    output: Option<&str>,
) -> anyhow::Result<()> {
    aggregator.load_all().await;
    let state = aggregator.snapshot().await;
    for (category, error) in state.failures() {
        tracing::warn!("Showing connections without {category}: {error}");
    }

    let rendered = ConnectionsView::build(&state, category).render(format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Connections written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
