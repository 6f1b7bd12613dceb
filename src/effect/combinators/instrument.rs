//! Instrument combinator - runs an effect inside a tracing span.

use tracing::Instrument as _;

use crate::effect::trait_def::Effect;

/// An effect wrapped in a tracing span.
///
/// The span is entered on every poll of the effect's future, so events
/// logged by inner effects and the wrapped capability inherit its fields.
#[derive(Debug)]
pub struct Instrument<Inner> {
    pub(crate) inner: Inner,
    pub(crate) span: tracing::Span,
}

impl<Inner: Effect> Effect for Instrument<Inner> {
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        self.inner.run(env).instrument(self.span).await
    }
}
