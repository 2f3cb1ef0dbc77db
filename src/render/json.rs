use super::ConnectionsView;

pub fn render(view: &ConnectionsView) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
