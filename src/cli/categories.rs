use comfy_table::{Cell, Table};

use crate::form::{CONNECTION_TYPES, SOCIAL_ACTIVITIES};

pub fn categories() -> anyhow::Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Title", "About"]);
    for t in CONNECTION_TYPES {
        table.add_row(vec![
            Cell::new(t.category),
            Cell::new(t.title),
            Cell::new(format!("{}\n{}", t.subtitle, t.description)),
        ]);
    }
    println!("{table}");

    println!("\nSocial activities (socialsphere submit social --activity <id>):");
    let mut table = Table::new();
    table.set_header(vec!["Activity", "Title"]);
    for (activity, title) in SOCIAL_ACTIVITIES {
        table.add_row(vec![Cell::new(activity), Cell::new(title)]);
    }
    println!("{table}");

    Ok(())
}
