//! HTML templates for the dashboard and login screens.

use crate::dashboard::{Dashboard, FormMode};
use crate::models::{PositionForm, TeamMemberDisplay};

/// Number of table columns, used for full-width placeholder rows.
pub const TABLE_COLUMNS: usize = 8;

const EMPTY_MESSAGE: &str = "No team members found";
const LOADING_MESSAGE: &str = "Loading...";

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Team Dashboard</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 2rem; background: #f9fafb; }}
        .card {{ background: #fff; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }}
        .error {{ background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; padding: .75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ text-align: left; padding: .5rem; border-bottom: 1px solid #e5e7eb; }}
        .grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: .75rem; }}
        .inline {{ display: inline; }}
    </style>
</head>
<body>
    {content}
</body>
</html>"##,
        title = html_escape(title),
        content = content,
    )
}

/// Render the full dashboard page from the current state.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let error_html = dashboard
        .error()
        .map(|msg| format!(r#"<div class="error" role="alert">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let content = format!(
        r##"<header class="card">
        <h1>Team Dashboard</h1>
        <form method="post" action="/logout" class="inline">
            <button type="submit">Logout</button>
        </form>
    </header>
    {error_html}
    {form}
    <section class="card">
        <h2>Team Members</h2>
        {table}
    </section>"##,
        error_html = error_html,
        form = render_form(dashboard.form(), dashboard.mode()),
        table = render_table(&dashboard.rows(), dashboard.is_loading()),
    );

    layout("Dashboard", &content)
}

/// Render the add/edit form.
pub fn render_form(form: &PositionForm, mode: FormMode) -> String {
    let (title, submit_label, cancel_html) = match mode {
        FormMode::Create => ("Add Team Member", "Add", String::new()),
        FormMode::Editing(_) => (
            "Edit Team Member",
            "Update",
            r#"<button type="submit" formaction="/cancel">Cancel</button>"#.to_string(),
        ),
    };

    let fields = [
        ("position_code", "Position Code", &form.position_code),
        ("position_name", "Position Name", &form.position_name),
        ("department", "Department", &form.department),
        ("salary", "Salary", &form.salary),
        ("location", "Location", &form.location),
        ("status", "Status", &form.status),
    ]
    .iter()
    .map(|(name, label, value)| {
        format!(
            r#"<label>{label}<input type="text" name="{name}" value="{value}"></label>"#,
            label = label,
            name = name,
            value = html_escape(value),
        )
    })
    .collect::<Vec<_>>()
    .join("\n            ");

    format!(
        r##"<section class="card">
        <h2>{title}</h2>
        <form method="post" action="/positions">
            <div class="grid">
            {fields}
            </div>
            <button type="submit">{submit_label}</button>
            {cancel_html}
        </form>
    </section>"##,
        title = title,
        fields = fields,
        submit_label = submit_label,
        cancel_html = cancel_html,
    )
}

/// Render the positions table.
///
/// While loading, or when there are no rows, a single full-width row stands in
/// for the body. Pages served by `render_dashboard` are drawn after the fetch
/// completes, so only callers rendering mid-fetch get the loading row.
pub fn render_table(rows: &[TeamMemberDisplay], loading: bool) -> String {
    let body = if loading {
        placeholder_row(LOADING_MESSAGE)
    } else if rows.is_empty() {
        placeholder_row(EMPTY_MESSAGE)
    } else {
        rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
    };

    format!(
        r##"<table>
            <thead>
                <tr>
                    <th>ID</th>
                    <th>Code</th>
                    <th>Name</th>
                    <th>Department</th>
                    <th>Salary</th>
                    <th>Location</th>
                    <th>Status</th>
                    <th>Actions</th>
                </tr>
            </thead>
            <tbody>
{body}
            </tbody>
        </table>"##,
        body = body,
    )
}

fn placeholder_row(message: &str) -> String {
    format!(
        r#"<tr><td colspan="{}">{}</td></tr>"#,
        TABLE_COLUMNS, message
    )
}

fn render_row(row: &TeamMemberDisplay) -> String {
    let id = row
        .position_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    // Rows without an id have nothing to target
    let actions = match row.position_id {
        Some(id) => format!(
            r#"<form method="post" action="/positions/{id}/edit" class="inline"><button type="submit">Edit</button></form>
                <form method="post" action="/positions/{id}/delete" class="inline"><button type="submit">Delete</button></form>"#,
            id = id
        ),
        None => String::new(),
    };

    format!(
        r#"<tr>
                <td>{id}</td>
                <td>{code}</td>
                <td>{name}</td>
                <td>{department}</td>
                <td>{salary}</td>
                <td>{location}</td>
                <td>{status}</td>
                <td>{actions}</td>
            </tr>"#,
        id = id,
        code = html_escape(&row.position_code),
        name = html_escape(&row.position_name),
        department = html_escape(&row.department),
        salary = html_escape(&row.salary),
        location = html_escape(&row.location),
        status = html_escape(&row.status),
        actions = actions,
    )
}

/// Render the token entry page.
pub fn render_login(error: Option<&str>) -> String {
    let error_html = match error {
        Some("missing") => r#"<div class="error" role="alert">Please enter an access token.</div>"#,
        Some(_) => r#"<div class="error" role="alert">Could not save the token. Please try again.</div>"#,
        None => "",
    };

    let content = format!(
        r##"<section class="card">
        <h1>Sign in</h1>
        {error_html}
        <form method="post" action="/login">
            <label>Access token<input type="password" name="token" autocomplete="off"></label>
            <button type="submit">Sign in</button>
        </form>
    </section>"##,
        error_html = error_html,
    );

    layout("Login", &content)
}

/// Simple HTML escape function
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: Option<i64>, code: &str) -> TeamMemberDisplay {
        crate::view::to_display(&crate::models::Position {
            position_id: id,
            position_code: code.to_string(),
            position_name: "Name".to_string(),
        })
    }

    #[test]
    fn test_empty_table_renders_single_spanning_placeholder() {
        let html = render_table(&[], false);

        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains(r#"<td colspan="8">No team members found</td>"#));
        assert!(!html.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_loading_table_renders_loading_row() {
        let html = render_table(&[row(Some(1), "A")], true);

        assert!(html.contains(r#"<td colspan="8">Loading...</td>"#));
        assert!(!html.contains("/positions/1/edit"));
    }

    #[test]
    fn test_rows_render_actions_and_status() {
        let html = render_table(&[row(Some(4), "A"), row(Some(5), "B")], false);

        assert!(html.contains(r#"action="/positions/4/edit""#));
        assert!(html.contains(r#"action="/positions/5/delete""#));
        assert!(html.contains("<td>Active</td>"));
        assert!(html.contains("<td>On Leave</td>"));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_row_without_id_has_no_actions() {
        let html = render_table(&[row(None, "A")], false);
        assert!(!html.contains("/edit"));
        assert!(!html.contains("/delete"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render_table(&[row(Some(2), "<script>")], false);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_form_labels_follow_mode() {
        let form = PositionForm::default();

        let create = render_form(&form, FormMode::Create);
        assert!(create.contains("Add Team Member"));
        assert!(!create.contains("Cancel"));

        let edit = render_form(&form, FormMode::Editing(3));
        assert!(edit.contains("Edit Team Member"));
        assert!(edit.contains(">Update<"));
        assert!(edit.contains(r#"formaction="/cancel""#));
    }

    #[test]
    fn test_login_page_shows_error_only_when_requested() {
        assert!(!render_login(None).contains("role=\"alert\""));
        assert!(render_login(Some("missing")).contains("Please enter an access token."));
        assert!(render_login(Some("store")).contains("Could not save the token."));
    }
}
