use crate::entity::{StoreDocument, StoreTotals, TodoItem};
use std::fmt::Write;

const PAGE_STYLE: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }\
body { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); min-height: 100vh; padding: 20px; }\
.container { max-width: 1200px; margin: 0 auto; background: white; padding: 30px; border-radius: 15px; box-shadow: 0 20px 40px rgba(0,0,0,0.1); }\
.header { text-align: center; margin-bottom: 30px; }\
.header h1 { font-size: 2.5em; margin-bottom: 10px; color: #667eea; }\
.stats-bar { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; margin-bottom: 30px; }\
.stat-card { background: linear-gradient(135deg, #667eea, #764ba2); color: white; padding: 20px; border-radius: 10px; text-align: center; }\
.stat-number { font-size: 2em; font-weight: bold; }\
.user-section { margin: 25px 0; padding: 20px; background: #f8f9fa; border-radius: 10px; border-left: 5px solid #4ECDC4; }\
.user-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 2px solid #e9ecef; }\
.user-header h2 { color: #2d3748; }\
.user-stats { display: flex; gap: 15px; font-size: 0.9em; }\
.stat-badge { padding: 5px 10px; border-radius: 15px; font-weight: 600; color: white; }\
.stat-badge.total { background: #4ECDC4; }\
.stat-badge.completed { background: #51cf66; }\
.stat-badge.pending { background: #FFD93D; color: black; }\
pre { background: #2d3748; color: #e2e8f0; padding: 20px; border-radius: 8px; overflow: auto; max-height: 400px; font-size: 0.85em; }\
.no-data { text-align: center; padding: 40px; color: #6c757d; }\
.last-updated { text-align: center; color: #6c757d; margin-top: 20px; font-size: 0.9em; }";

/// Renders the full `/raw-data` diagnostic page for the given store document.
/// `generated_at` lands in the page footer as the last-updated stamp.
pub fn render_report(document: &StoreDocument, generated_at: &str) -> String {
    let totals = StoreTotals::from_document(document);

    let mut page = String::with_capacity(4096);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<title>SparkTask Pro - Raw Data</title>\n");
    let _ = write!(page, "<style>{PAGE_STYLE}</style>\n");
    page.push_str("</head>\n<body>\n<div class=\"container\">\n");
    page.push_str(
        "<div class=\"header\">\n<h1>SparkTask Pro - Raw Data</h1>\n\
         <p>View all user data stored in the system</p>\n</div>\n",
    );

    page.push_str("<div class=\"stats-bar\">\n");
    let _ = write!(page, "{}", stat_card(totals.total_users, "Total Users"));
    let _ = write!(page, "{}", stat_card(totals.total_todos, "Total Todos"));
    let _ = write!(
        page,
        "{}",
        stat_card(totals.total_completed, "Completed Todos")
    );
    page.push_str("</div>\n");

    if document.is_empty() {
        page.push_str(
            "<div class=\"no-data\">\n<h3>No Data Found</h3>\n\
             <p>No user data found. Users need to register and add todos first.</p>\n</div>\n",
        );
    } else {
        for (username, items) in document {
            page.push_str(&user_section(username, items));
        }
    }

    let _ = write!(
        page,
        "<div class=\"last-updated\">Last updated: {}</div>\n",
        escape_html(generated_at)
    );
    page.push_str("</div>\n<script>setInterval(() => location.reload(), 10000);</script>\n</body>\n</html>\n");
    page
}

fn stat_card(count: usize, label: &str) -> String {
    format!(
        "<div class=\"stat-card\"><div class=\"stat-number\">{count}</div><div>{label}</div></div>\n"
    )
}

fn user_section(username: &str, items: &[TodoItem]) -> String {
    let completed = items.iter().filter(|item| item.is_completed()).count();
    let pending = items.len() - completed;
    let dump = serde_json::to_string_pretty(items).unwrap_or_else(|_| String::from("[]"));

    format!(
        "<div class=\"user-section\">\n<div class=\"user-header\">\n\
         <h2>User: {user}</h2>\n<div class=\"user-stats\">\
         <span class=\"stat-badge total\">{total} Total</span>\
         <span class=\"stat-badge completed\">{completed} Completed</span>\
         <span class=\"stat-badge pending\">{pending} Pending</span>\
         </div>\n</div>\n<pre>{dump}</pre>\n</div>\n",
        user = escape_html(username),
        total = items.len(),
        dump = escape_html(&dump),
    )
}

/// Minimal escaping for user-supplied text interpolated into the report markup.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
