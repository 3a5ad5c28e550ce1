//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Every method runs one
//! parameterized statement; connections are checked out of the pool for
//! the duration of that statement and returned on every exit path.

pub mod keyword_repo;
pub mod project_repo;
pub mod research_repo;
pub mod task_repo;

pub use keyword_repo::KeywordRepo;
pub use project_repo::ProjectRepo;
pub use research_repo::ResearchRepo;
pub use task_repo::TaskRepo;

/// Build a `LIKE` pattern matching `term` anywhere in a column.
///
/// `%`, `_` and `\` in the term are escaped so they match literally; the
/// query must declare `ESCAPE '\'`.
pub(crate) fn contains_pattern(term: Option<&str>) -> Option<String> {
    term.map(|term| {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    })
}
