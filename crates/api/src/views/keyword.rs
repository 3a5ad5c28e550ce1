//! Keyword dashboard and single-keyword pages.

use std::fmt::Write;

use axum::response::Html;
use ventureboard_core::keyword_tree::KeywordNode;
use ventureboard_db::models::keyword::{Keyword, KeywordListParams};
use ventureboard_db::models::project::Project;

use super::{escape, escape_opt, layout};
use crate::flash::Flash;

/// GET /keywords -- broad keywords with their long-tails, plus the add form.
pub fn keyword_dashboard(
    tree: &[KeywordNode<Keyword>],
    projects: &[Project],
    params: &KeywordListParams,
    flash: Option<&Flash>,
) -> Html<String> {
    let mut c = String::new();
    c.push_str("<h1>Keywords</h1>\n");
    let _ = write!(
        c,
        "<form method=\"get\" action=\"/keywords\" class=\"filters\">\n\
         <input type=\"search\" name=\"search\" placeholder=\"Search\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n</form>\n",
        escape_opt(params.search.as_deref()),
    );

    if tree.is_empty() {
        c.push_str("<p class=\"empty\">No keywords yet.</p>\n");
    } else {
        c.push_str("<ul class=\"keyword-tree\">\n");
        for node in tree {
            write_node(&mut c, node);
        }
        c.push_str("</ul>\n");
    }

    let mut project_options = String::from("<option value=\"\">No project</option>\n");
    for p in projects {
        let _ = writeln!(
            project_options,
            "<option value=\"{}\">{}</option>",
            p.id,
            escape(&p.project_name)
        );
    }

    let _ = write!(
        c,
        "<h2>Add keyword</h2>\n\
         <form method=\"post\" action=\"/keywords/add\">\n\
         <label>Broad keyword <input name=\"keyword_text\" maxlength=\"100\" required></label>\n\
         <label>Project <select name=\"project_id\">\n{project_options}</select></label>\n\
         <label>Competition level <input name=\"competition_level\"></label>\n\
         <label>Competitor analysis <textarea name=\"competitor_analysis\"></textarea></label>\n\
         <label>Long-tail keywords (one per line) <textarea name=\"long_tail_keywords\"></textarea></label>\n\
         <button type=\"submit\">Add keyword</button>\n\
         </form>\n"
    );

    layout("Keywords", flash, &c)
}

fn write_node(c: &mut String, node: &KeywordNode<Keyword>) {
    let k = &node.keyword;
    let _ = write!(
        c,
        "<li class=\"keyword\" data-id=\"{id}\"><a href=\"/keyword/{id}\">{text}</a>",
        id = k.id,
        text = escape(&k.keyword_text),
    );
    if let Some(level) = k.competition_level.as_deref() {
        let _ = write!(c, " <span class=\"competition\">{}</span>", escape(level));
    }
    if !node.children.is_empty() {
        c.push_str("\n<ul class=\"long-tails\">\n");
        for child in &node.children {
            write_node(c, child);
        }
        c.push_str("</ul>\n");
    }
    c.push_str("</li>\n");
}

/// GET /keyword/{id} -- one keyword with its parent and long-tails.
pub fn keyword_detail(
    keyword: &Keyword,
    parent: Option<&Keyword>,
    children: &[Keyword],
    project: Option<&Project>,
    flash: Option<&Flash>,
) -> Html<String> {
    let mut c = String::new();
    let kind = if keyword.is_broad() { "Broad keyword" } else { "Long-tail keyword" };
    let _ = write!(
        c,
        "<h1>{}</h1>\n<p class=\"kind\">{kind}</p>\n<dl>\n",
        escape(&keyword.keyword_text)
    );

    if let Some(project) = project {
        let _ = writeln!(
            c,
            "<dt>Project</dt><dd><a href=\"/project/{}\">{}</a></dd>",
            project.id,
            escape(&project.project_name)
        );
    }
    if let Some(parent) = parent {
        let _ = writeln!(
            c,
            "<dt>Parent</dt><dd class=\"parent\"><a href=\"/keyword/{}\">{}</a></dd>",
            parent.id,
            escape(&parent.keyword_text)
        );
    }
    let _ = writeln!(
        c,
        "<dt>Competition level</dt><dd>{}</dd>\n<dt>Competitor analysis</dt><dd>{}</dd>\n</dl>",
        escape_opt(keyword.competition_level.as_deref()),
        escape_opt(keyword.competitor_analysis.as_deref()),
    );

    if keyword.is_broad() {
        c.push_str("<h2>Long-tail keywords</h2>\n");
        if children.is_empty() {
            c.push_str("<p class=\"empty\">No long-tail keywords.</p>\n");
        } else {
            c.push_str("<ul class=\"long-tails\">\n");
            for child in children {
                let _ = writeln!(
                    c,
                    "<li class=\"keyword\" data-id=\"{id}\"><a href=\"/keyword/{id}\">{text}</a></li>",
                    id = child.id,
                    text = escape(&child.keyword_text),
                );
            }
            c.push_str("</ul>\n");
        }
    }

    write_edit_form(&mut c, keyword);

    let _ = write!(
        c,
        "<form method=\"post\" action=\"/keyword/{}/delete\">\
         <button type=\"submit\">Delete keyword</button></form>\n\
         <p><a href=\"/keywords\">All keywords</a></p>\n",
        keyword.id
    );

    layout(&keyword.keyword_text, flash, &c)
}

fn write_edit_form(c: &mut String, keyword: &Keyword) {
    let _ = write!(
        c,
        "<h2>Edit keyword</h2>\n\
         <form method=\"post\" action=\"/keyword/{id}/edit\">\n\
         <label>Keyword <input name=\"keyword_text\" maxlength=\"100\" required value=\"{text}\"></label>\n",
        id = keyword.id,
        text = escape(&keyword.keyword_text),
    );
    if keyword.is_broad() {
        let _ = write!(
            c,
            "<label>Competition level <input name=\"competition_level\" value=\"{level}\"></label>\n\
             <label>Competitor analysis <textarea name=\"competitor_analysis\">{analysis}</textarea></label>\n\
             <label>Add long-tail keywords (one per line) <textarea name=\"long_tail_keywords\"></textarea></label>\n",
            level = escape_opt(keyword.competition_level.as_deref()),
            analysis = escape_opt(keyword.competitor_analysis.as_deref()),
        );
    }
    c.push_str("<button type=\"submit\">Save keyword</button>\n</form>\n");
}
