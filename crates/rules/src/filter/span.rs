//! Span factories used to instrument saved-object fetches.
//!
//! The resolver never creates spans directly; it asks a [`SpanWrapper`]
//! and attaches the result with [`tracing::Instrument`]. Swapping in
//! [`NoopSpans`] removes instrumentation without touching the logic.

/// Produces the span an async call is instrumented with.
pub trait SpanWrapper: Send + Sync {
    fn span(&self, name: &'static str) -> tracing::Span;
}

/// Info-level `security_span` carrying the operation name as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecuritySpans;

impl SpanWrapper for SecuritySpans {
    fn span(&self, name: &'static str) -> tracing::Span {
        tracing::info_span!("security_span", name)
    }
}

/// Disabled spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpans;

impl SpanWrapper for NoopSpans {
    fn span(&self, _name: &'static str) -> tracing::Span {
        tracing::Span::none()
    }
}
