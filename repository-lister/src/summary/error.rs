//! Summary rendering error types.

/// Summary rendering error.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Handlebars rendering error.
    #[error("Summary rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Summary template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
