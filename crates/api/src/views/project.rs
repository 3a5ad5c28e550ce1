//! Project list, new-project form and project detail pages.

use std::fmt::Write;

use axum::response::Html;
use ventureboard_core::status::{label_for, PROJECT_STATUS_OPTIONS, TASK_STATUS_OPTIONS};
use ventureboard_core::types::DbId;
use ventureboard_db::models::project::{CreateProject, Project, ProjectListParams};
use ventureboard_db::models::research::ResearchMaterial;
use ventureboard_db::models::task::Task;

use super::{escape, escape_opt, is_web_url, layout, options};
use crate::flash::Flash;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// GET / -- all projects, newest first, with the status/search filter form.
pub fn project_list(
    projects: &[Project],
    params: &ProjectListParams,
    flash: Option<&Flash>,
) -> Html<String> {
    let mut c = String::new();
    c.push_str("<h1>Projects</h1>\n");
    let _ = write!(
        c,
        "<form method=\"get\" action=\"/\" class=\"filters\">\n\
         <input type=\"search\" name=\"search\" placeholder=\"Search\" value=\"{}\">\n\
         <select name=\"status\"><option value=\"\">All statuses</option>\n{}</select>\n\
         <button type=\"submit\">Filter</button>\n</form>\n",
        escape_opt(params.search.as_deref()),
        options(PROJECT_STATUS_OPTIONS, params.status.as_deref()),
    );

    if projects.is_empty() {
        c.push_str("<p class=\"empty\">No projects yet. <a href=\"/new\">Create one</a>.</p>\n");
    } else {
        c.push_str("<ul class=\"projects\">\n");
        for p in projects {
            let status = p.status.as_deref().unwrap_or("");
            let _ = writeln!(
                c,
                "<li class=\"project\" data-id=\"{id}\"><a href=\"/project/{id}\">{name}</a> \
                 <span class=\"status\">{status}</span> \
                 <span class=\"created\">{created}</span></li>",
                id = p.id,
                name = escape(&p.project_name),
                status = escape(label_for(PROJECT_STATUS_OPTIONS, status)),
                created = p.created_at.format(TIMESTAMP_FORMAT),
            );
        }
        c.push_str("</ul>\n");
    }

    layout("Projects", flash, &c)
}

/// GET /new -- the new-project form, pre-filled when re-rendered after a
/// rejected submission.
pub fn new_project_form(input: Option<&CreateProject>, flash: Option<&Flash>) -> Html<String> {
    let status = input.and_then(|i| i.status.as_deref());

    let content = format!(
        "<h1>New project</h1>\n\
         <form method=\"post\" action=\"/new\">\n\
         <label>Project Name <input name=\"project_name\" maxlength=\"100\" value=\"{name}\" required></label>\n\
         <label>Code repository <input name=\"code_repository\" value=\"{repo}\"></label>\n\
         <label>Idea <textarea name=\"idea\">{idea}</textarea></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Status <select name=\"status\">\n{status}</select></label>\n\
         <button type=\"submit\">Create project</button>\n\
         </form>\n",
        name = escape_opt(input.and_then(|i| i.project_name.as_deref())),
        repo = escape_opt(input.and_then(|i| i.code_repository.as_deref())),
        idea = escape_opt(input.and_then(|i| i.idea.as_deref())),
        description = escape_opt(input.and_then(|i| i.description.as_deref())),
        status = options(PROJECT_STATUS_OPTIONS, status),
    );

    layout("New project", flash, &content)
}

/// GET /project/{id} -- edit form plus the tasks and research tabs.
pub fn project_detail(
    project: &Project,
    tasks: &[Task],
    research: &[ResearchMaterial],
    flash: Option<&Flash>,
) -> Html<String> {
    let mut c = String::new();
    let _ = writeln!(c, "<h1>{}</h1>", escape(&project.project_name));
    c.push_str(
        "<nav class=\"tabs\"><a href=\"#details\">Details</a> | \
         <a href=\"#tasks\">Tasks</a> | <a href=\"#research\">Research</a></nav>\n",
    );

    write_details(&mut c, project);
    write_tasks(&mut c, project.id, tasks);
    write_research(&mut c, project.id, research);

    layout(&project.project_name, flash, &c)
}

fn write_details(c: &mut String, p: &Project) {
    let current = p.status.as_deref();
    let mut status_options = options(PROJECT_STATUS_OPTIONS, current);
    if let Some(status) = current.filter(|s| !PROJECT_STATUS_OPTIONS.iter().any(|(v, _)| v == s)) {
        let _ = writeln!(
            status_options,
            "<option value=\"{0}\" selected>{0}</option>",
            escape(status)
        );
    }

    let _ = write!(
        c,
        "<section id=\"details\">\n\
         <form method=\"post\" action=\"/project/{id}\">\n\
         <label>Project Name <input name=\"project_name\" maxlength=\"100\" value=\"{name}\" required></label>\n\
         <label>Code repository <input name=\"code_repository\" value=\"{repo}\"></label>\n\
         <label>Idea <textarea name=\"idea\">{idea}</textarea></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Market research <textarea name=\"market_research\">{market}</textarea></label>\n\
         <label>Competitor research <textarea name=\"competitor_research\">{competitors}</textarea></label>\n\
         <label>Status <select name=\"status\">\n<option value=\"\"></option>\n{status}</select></label>\n\
         <label>Start date <input type=\"date\" name=\"start_date\" value=\"{start}\"></label>\n\
         <label>Due date <input type=\"date\" name=\"due_date\" value=\"{due}\"></label>\n\
         <button type=\"submit\">Save project</button>\n\
         </form>\n\
         <p class=\"created\">Created {created}</p>\n\
         </section>\n",
        id = p.id,
        name = escape(&p.project_name),
        repo = escape_opt(p.code_repository.as_deref()),
        idea = escape_opt(p.idea.as_deref()),
        description = escape_opt(p.description.as_deref()),
        market = escape_opt(p.market_research.as_deref()),
        competitors = escape_opt(p.competitor_research.as_deref()),
        status = status_options,
        start = escape_opt(p.start_date.as_deref()),
        due = escape_opt(p.due_date.as_deref()),
        created = p.created_at.format(TIMESTAMP_FORMAT),
    );
}

fn write_tasks(c: &mut String, project_id: DbId, tasks: &[Task]) {
    c.push_str("<section id=\"tasks\">\n<h2>Tasks</h2>\n");
    if tasks.is_empty() {
        c.push_str("<p class=\"empty\">No tasks yet.</p>\n");
    } else {
        c.push_str("<ul class=\"tasks\">\n");
        for t in tasks {
            let completed = t
                .completed_at
                .map(|ts| format!(" <span class=\"completed\">completed {}</span>", ts.format(TIMESTAMP_FORMAT)))
                .unwrap_or_default();
            let due = t
                .due_date
                .as_deref()
                .map(|d| format!(" <span class=\"due\">due {}</span>", escape(d)))
                .unwrap_or_default();
            let _ = write!(
                c,
                "<li class=\"task task-{status_class}\" data-id=\"{id}\">{name}{due}{completed}\n\
                 <p class=\"notes\">{notes}</p>\n\
                 <form method=\"post\" action=\"/task/{id}/edit\">\
                 <select name=\"status\">{options}</select>\
                 <button type=\"submit\">Update</button></form>\n\
                 <form method=\"post\" action=\"/task/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form>\n\
                 </li>\n",
                id = t.id,
                status_class = escape(&t.status),
                name = escape(&t.task_name),
                notes = escape_opt(t.notes.as_deref()),
                options = options(TASK_STATUS_OPTIONS, Some(&t.status)),
            );
        }
        c.push_str("</ul>\n");
    }
    let _ = write!(
        c,
        "<form method=\"post\" action=\"/project/{project_id}/task/add\">\n\
         <label>Task <input name=\"task_name\" required></label>\n\
         <label>Status <select name=\"status\">{options}</select></label>\n\
         <label>Notes <textarea name=\"notes\"></textarea></label>\n\
         <label>Due date <input type=\"date\" name=\"due_date\"></label>\n\
         <button type=\"submit\">Add task</button>\n\
         </form>\n</section>\n",
        options = options(TASK_STATUS_OPTIONS, None),
    );
}

fn write_research(c: &mut String, project_id: DbId, research: &[ResearchMaterial]) {
    c.push_str("<section id=\"research\">\n<h2>Research</h2>\n");
    if research.is_empty() {
        c.push_str("<p class=\"empty\">No research saved yet.</p>\n");
    } else {
        c.push_str("<ul class=\"research\">\n");
        for r in research {
            let title = match r.url.as_deref() {
                Some(url) if is_web_url(url) => format!(
                    "<a href=\"{}\" rel=\"noopener noreferrer\">{}</a>",
                    escape(url.trim()),
                    escape(&r.title)
                ),
                Some(url) => format!(
                    "{} <span class=\"url\">{}</span>",
                    escape(&r.title),
                    escape(url)
                ),
                None => escape(&r.title),
            };
            let _ = write!(
                c,
                "<li class=\"material\" data-id=\"{id}\">{title} \
                 <span class=\"saved\">{saved}</span>\n\
                 <p class=\"summary\">{summary}</p>\n\
                 <form method=\"post\" action=\"/research/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form>\n\
                 </li>\n",
                id = r.id,
                saved = r.saved_at.format(TIMESTAMP_FORMAT),
                summary = escape_opt(r.summary.as_deref()),
            );
        }
        c.push_str("</ul>\n");
    }
    let _ = write!(
        c,
        "<form method=\"post\" action=\"/project/{project_id}/research/add\">\n\
         <label>Title <input name=\"title\" required></label>\n\
         <label>URL <input type=\"url\" name=\"url\"></label>\n\
         <label>Summary <textarea name=\"summary\"></textarea></label>\n\
         <button type=\"submit\">Save research</button>\n\
         </form>\n</section>\n"
    );
}
