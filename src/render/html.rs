use super::{ConnectionsView, card};

pub fn render(view: &ConnectionsView) -> anyhow::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>SocialSphere - My Connections</title>\n");
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 2rem auto; padding: 0 1rem; color: #1f2937; }\n");
    html.push_str("  h1 { color: #1f2937; margin-bottom: 0.25rem; }\n");
    html.push_str("  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; margin: 1.5rem 0; }\n");
    html.push_str("  .card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; }\n");
    html.push_str("  .card header { display: flex; justify-content: space-between; font-size: 0.875rem; color: #6b7280; }\n");
    html.push_str("  .badge { background: #f3e8ff; color: #7e22ce; border-radius: 9999px; padding: 0 0.5rem; }\n");
    html.push_str("  .card h3 { margin: 0.75rem 0 0.5rem; }\n");
    html.push_str("  .card p { margin: 0.25rem 0; font-size: 0.875rem; color: #4b5563; }\n");
    html.push_str("  .empty { color: #6b7280; text-align: center; }\n");
    html.push_str("  .error { color: #b91c1c; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<h1>My Connections</h1>\n<p>View and manage your connection requests and matches. Tab: {}. Generated: {}</p>\n",
        escape_html(&view.tab),
        escape_html(&view.generated_at)
    ));

    for f in &view.failed {
        html.push_str(&format!(
            "<p class=\"error\">Could not load {} requests: {}</p>\n",
            f.category,
            escape_html(&f.error)
        ));
    }

    html.push_str("<div class=\"grid\">\n");
    for r in &view.requests {
        let c = card(r);
        html.push_str(&format!(
            "<article class=\"card {}\">\n<header><span class=\"badge\">{}</span><span>{}</span></header>\n<h3>{}</h3>\n",
            r.category(),
            r.status,
            r.created_date.format("%b %-d"),
            escape_html(&c.title)
        ));
        for line in &c.lines {
            html.push_str(&format!("<p>{}</p>\n", escape_html(line)));
        }
        html.push_str("</article>\n");
    }
    html.push_str("</div>\n");

    if let Some(message) = &view.empty_message {
        html.push_str(&format!("<p class=\"empty\">{}</p>\n", escape_html(message)));
    }

    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
