pub mod health;
pub mod keyword;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   project list (?status=&search=)
/// /new                                new project form, create
/// /project/{id}                       detail, update
/// /project/{id}/research/add          add research material
/// /research/{id}/delete               delete research material
/// /project/{id}/task/add              add task
/// /task/{id}/edit                     change task status
/// /task/{id}/delete                   delete task
///
/// /keywords                           keyword tree (?search=)
/// /keywords/add                       add broad keyword with long-tails
/// /keyword/{id}                       keyword with parent and long-tails
/// /keyword/{id}/edit                  edit keyword, append long-tails
/// /keyword/{id}/delete                delete keyword
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(keyword::router())
}
