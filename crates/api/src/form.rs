//! Boundary validation for the typed form models.
//!
//! POST handlers take `Result<Form<T>, FormRejection>` so that a body which
//! does not even deserialize (a non-numeric id, say) ends in the same error
//! flash and redirect as a failed validation.

use axum::extract::rejection::FormRejection;
use axum::Form;
use validator::{Validate, ValidationErrors};

/// Unwrap a submitted form and validate it.
pub fn accept<T: Validate>(submitted: Result<Form<T>, FormRejection>) -> Result<T, String> {
    let Form(input) = submitted.map_err(|rejection| rejected(&rejection))?;
    check(&input)?;
    Ok(input)
}

/// User-facing message for a body that could not be read into a form model.
pub fn rejected(rejection: &FormRejection) -> String {
    tracing::debug!(error = %rejection, "Form body rejected");
    format!("The form could not be read. {}", rejection.body_text())
}

/// Validate a form model, turning failures into one user-facing message.
pub fn check<T: Validate>(input: &T) -> Result<(), String> {
    input.validate().map_err(|errors| describe(&errors))
}

/// Join the messages of every failed field, ordered by field name so the
/// text is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid."),
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
