use counsel_core::forms::FormErrors;

/// Turn a form rejection into a CLI error naming every invalid field.
pub fn submit<T>(validated: Result<T, FormErrors>, action: &str) -> anyhow::Result<T> {
    validated.map_err(|errors| {
        tracing::info!(action, rejected = errors.fields().len(), "form rejected");
        anyhow::Error::new(errors).context(format!("could not {action}"))
    })
}
