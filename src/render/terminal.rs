use comfy_table::{Cell, Table};

use super::{ConnectionsView, card};
use crate::profile::UserProfile;

pub fn render(view: &ConnectionsView) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "=== My Connections: {} ({}) ===\n\n",
        view.tab, view.generated_at
    ));

    output.push_str("--- Summary ---\n");
    for s in &view.summary {
        let total = s
            .total
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unavailable".into());
        output.push_str(&format!("{:<10} {}\n", format!("{}:", s.category.title()), total));
    }

    if !view.requests.is_empty() {
        output.push('\n');
        let mut table = Table::new();
        table.set_header(vec!["Category", "ID", "Status", "Created", "Request", "Details"]);
        for r in &view.requests {
            let c = card(r);
            table.add_row(vec![
                Cell::new(r.category().title()),
                Cell::new(r.id),
                Cell::new(r.status),
                Cell::new(r.created_date.format("%b %-d")),
                Cell::new(&c.title),
                Cell::new(c.lines.join("\n")),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    if let Some(message) = &view.empty_message {
        output.push_str(&format!("\n{message}\n"));
    }

    for f in &view.failed {
        output.push_str(&format!(
            "\nCould not load {} requests: {}\n",
            f.category, f.error
        ));
    }

    Ok(output)
}

pub fn render_profile(profile: &UserProfile) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    let age = profile
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".into());
    let interests = if profile.interests.is_empty() {
        "-".to_string()
    } else {
        profile.interests.join(", ")
    };

    table.add_row(vec!["Name", profile.full_name.as_str()]);
    table.add_row(vec!["Email", profile.email.as_str()]);
    table.add_row(vec!["Age", age.as_str()]);
    table.add_row(vec!["Location", profile.location.as_str()]);
    table.add_row(vec!["Occupation", profile.occupation.as_str()]);
    table.add_row(vec!["Personality", profile.personality_type.as_str()]);
    table.add_row(vec!["Bio", profile.bio.as_str()]);
    table.add_row(vec!["Interests", interests.as_str()]);
    table.add_row(vec![
        "Photo",
        profile.profile_photo.as_deref().unwrap_or("-"),
    ]);

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{AggregatorState, FetchResult};
    use crate::request::Category;
    use crate::source::mock::seed_records;

    #[test]
    fn test_render_all_tab() {
        let results: [FetchResult; 5] = Category::ALL.map(|c| (c, Ok(seed_records(c))));
        let state = AggregatorState::from_results(1, results);
        let out = render(&ConnectionsView::build(&state, None)).unwrap();
        assert!(out.contains("My Connections: all"));
        assert!(out.contains("Tokyo, Japan"));
        assert!(out.contains("Looking for Roommate"));
        assert!(!out.contains("Could not load"));
    }

    #[test]
    fn test_render_empty_and_failed() {
        let results: [FetchResult; 5] = Category::ALL.map(|c| match c {
            Category::Social => (c, Err(anyhow::anyhow!("timed out"))),
            _ => (c, Ok(Vec::new())),
        });
        let state = AggregatorState::from_results(1, results);

        let out = render(&ConnectionsView::build(&state, Some(Category::Travel))).unwrap();
        assert!(out.contains("No travel requests yet"));

        let out = render(&ConnectionsView::build(&state, Some(Category::Social))).unwrap();
        assert!(out.contains("Could not load social requests: timed out"));
    }

    #[test]
    fn test_render_profile() {
        let out = render_profile(&UserProfile::demo());
        assert!(out.contains("Alex Morgan"));
        assert!(out.contains("hiking, standup, coffee"));
    }
}
