use roic_core::RoicError;

/// Collapse a set of provider errors into a uniform `RoicError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If every error is `NotFound` → `NotFound(not_found_what)`.
/// - If exactly one provider failed → that error.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: &str,
    attempted_any: bool,
    mut errors: Vec<RoicError>,
    not_found_what: String,
) -> RoicError {
    if !attempted_any {
        return RoicError::unsupported(capability);
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, RoicError::NotFound { .. }))
    {
        return RoicError::not_found(not_found_what);
    }
    if errors.len() == 1
        && let Some(only) = errors.pop()
    {
        return only;
    }
    RoicError::AllProvidersFailed(errors)
}
