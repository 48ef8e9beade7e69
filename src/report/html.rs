use chrono::Utc;

use super::ReportInput;

const TEMPLATE: &str = include_str!("templates/page.html");

/// Render the scored repositories as a single self-contained page. No
/// external assets, so the output can be dropped onto any static host.
pub fn render_page(input: &ReportInput) -> String {
    TEMPLATE
        .replace("{{TITLE}}", &escape_html(input.title))
        .replace("{{WARNING}}", &build_warning(input))
        .replace("{{INTRO}}", &build_intro(input))
        .replace("{{HEADER_CELLS}}", &build_header_cells(input))
        .replace("{{TABLE_ROWS}}", &build_table_rows(input))
        .replace(
            "{{GENERATED_AT}}",
            &Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
        .replace("{{REPORT_JSON}}", &build_report_json(input))
}

fn build_warning(input: &ReportInput) -> String {
    input
        .token_message
        .map(|message| format!(r#"<p class="warning">{}</p>"#, escape_html(message)))
        .unwrap_or_default()
}

fn build_intro(input: &ReportInput) -> String {
    input
        .intro
        .map(|intro| format!(r#"<p class="intro">{}</p>"#, escape_html(intro)))
        .unwrap_or_default()
}

fn build_header_cells(input: &ReportInput) -> String {
    input
        .metrics
        .iter()
        .map(|metric| format!("<th>{}</th>", escape_html(&metric.name)))
        .collect()
}

fn build_table_rows(input: &ReportInput) -> String {
    let mut rows = String::new();
    for scored in input.repos {
        rows.push_str("<tr>");
        rows.push_str(&format!(
            r#"<td class="repo"><a href="{}">{}</a></td>"#,
            escape_html(&scored.repo.url),
            escape_html(&scored.repo.name)
        ));
        for verdict in &scored.verdicts {
            rows.push_str(&format!(
                r#"<td class="{}">{}</td>"#,
                verdict.severity.as_str(),
                escape_html(&verdict.message)
            ));
        }
        rows.push_str("</tr>\n");
    }
    rows
}

/// Machine-readable copy of the verdicts, embedded for page scripts. Angle
/// brackets are escaped so repository text can never close the script tag.
fn build_report_json(input: &ReportInput) -> String {
    let repos: Vec<_> = input
        .repos
        .iter()
        .map(|scored| {
            serde_json::json!({
                "name": scored.repo.name,
                "owner": scored.repo.owner,
                "url": scored.repo.url,
                "verdicts": scored.verdicts,
            })
        })
        .collect();

    serde_json::json!({ "repos": repos })
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
