use reportview::ReportRecord;
use serde_json::{Value, json};

pub const INDEX_PATH: &str = "data/reports.json";

/// A short report with a repeated heading and a table.
pub const COFFEE_REPORT: &str = "# Coffee Grinders\n\
\n\
Intro line one\n\
intro line two\n\
\n\
## Market Overview\n\
\n\
| Brand | Share |\n\
|---|---|\n\
| Acme | 40% |\n\
\n\
## Pricing\n\
\n\
### Market Overview\n\
\n\
Closing notes.\n";

/// Anchors `COFFEE_REPORT` headings receive, in document order.
pub const COFFEE_ANCHORS: [&str; 4] = [
    "coffee-grinders",
    "market-overview",
    "pricing",
    "market-overview-1",
];

pub fn inline_record(id: &str, title: &str, content: &str) -> ReportRecord {
    ReportRecord::new(id, title).with_content(content)
}

pub fn path_record(id: &str, title: &str, path: &str) -> ReportRecord {
    ReportRecord::new(id, title).with_markdown_path(path)
}

/// The published index as the site would serve it.
pub fn remote_index() -> Value {
    json!([
        {
            "id": "remote-1",
            "title": "Espresso Machines",
            "created_at": "2026-03-01T09:30:00Z",
            "markdown_path": "reports/remote-1.md",
            "asin": "B07ZPKBL9V"
        },
        {
            "id": "broken",
            "title": "Missing Document",
            "markdown_path": "reports/missing.md"
        },
        {
            "id": "empty",
            "title": "Nothing Attached"
        }
    ])
}

pub const REMOTE_REPORT: &str = "# Espresso Machines\n\n## Summary\n\nPressure matters.\n";
