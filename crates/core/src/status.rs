//! Status vocabularies for projects and tasks.
//!
//! Statuses are stored as plain strings. The lists below feed the `<select>`
//! options in the forms; the database accepts any value a form submits.

// ---------------------------------------------------------------------------
// Project statuses
// ---------------------------------------------------------------------------

pub const PROJECT_IDEA: &str = "idea";
pub const PROJECT_VALIDATING: &str = "validating";
pub const PROJECT_IN_PROGRESS: &str = "in_progress";
pub const PROJECT_MVP_LAUNCHED: &str = "mvp_launched";
pub const PROJECT_RUNNING: &str = "running";
pub const PROJECT_SUCCESS: &str = "success";
pub const PROJECT_FAILED: &str = "failed";

/// Status assigned to a project created without one.
pub const DEFAULT_PROJECT_STATUS: &str = PROJECT_IDEA;

/// Project statuses paired with their display labels, in lifecycle order.
pub const PROJECT_STATUS_OPTIONS: &[(&str, &str)] = &[
    (PROJECT_IDEA, "Idea"),
    (PROJECT_VALIDATING, "Validating"),
    (PROJECT_IN_PROGRESS, "In progress"),
    (PROJECT_MVP_LAUNCHED, "MVP launched"),
    (PROJECT_RUNNING, "Running"),
    (PROJECT_SUCCESS, "Success"),
    (PROJECT_FAILED, "Failed"),
];

// ---------------------------------------------------------------------------
// Task statuses
// ---------------------------------------------------------------------------

pub const TASK_TODO: &str = "todo";
pub const TASK_IN_PROGRESS: &str = "in_progress";
pub const TASK_DONE: &str = "done";

/// Status assigned to a task created without one.
pub const DEFAULT_TASK_STATUS: &str = TASK_TODO;

pub const TASK_STATUS_OPTIONS: &[(&str, &str)] = &[
    (TASK_TODO, "To do"),
    (TASK_IN_PROGRESS, "In progress"),
    (TASK_DONE, "Done"),
];

/// Whether a task in `status` counts as completed and carries a
/// `completed_at` timestamp.
pub fn is_task_done(status: &str) -> bool {
    status == TASK_DONE
}

/// Display label for a status value, falling back to the raw value for
/// statuses outside the known vocabulary.
pub fn label_for<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}
