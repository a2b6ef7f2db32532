//! Request instrumentation, independent of any HTTP framework.
//!
//! [`instrument`] wraps a handler so every call increments
//! [`HTTP_REQUESTS_TOTAL`] and, when the handler returns `Ok`, stores the
//! elapsed time under [`HTTP_REQUEST_DURATION`].
//!
//! An `Err` (or a panic) from the downstream handler propagates unchanged and
//! the duration for that call is not recorded.

use std::sync::Arc;
use std::time::Instant;

use crate::registry::MetricsRegistry;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION: &str = "http_request_duration";

/// Something that processes a request and writes a response.
pub trait Handler<Req, Res> {
    type Error;

    fn handle(&self, req: Req, res: &mut Res) -> Result<(), Self::Error>;
}

impl<F, Req, Res, E> Handler<Req, Res> for F
where
    F: Fn(Req, &mut Res) -> Result<(), E>,
{
    type Error = E;

    fn handle(&self, req: Req, res: &mut Res) -> Result<(), E> {
        self(req, res)
    }
}

/// A handler observed by a [`MetricsRegistry`]. Built by [`instrument`].
#[derive(Debug, Clone)]
pub struct Instrumented<H> {
    registry: Arc<MetricsRegistry>,
    inner: H,
}

impl<H> Instrumented<H> {
    pub fn registry(&self) -> &Arc<MetricsRegistry> {
        &self.registry
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H, Req, Res> Handler<Req, Res> for Instrumented<H>
where
    H: Handler<Req, Res>,
{
    type Error = H::Error;

    fn handle(&self, req: Req, res: &mut Res) -> Result<(), Self::Error> {
        self.registry.increment_counter(HTTP_REQUESTS_TOTAL);
        let start = Instant::now();

        self.inner.handle(req, res)?;

        self.registry.record_time(HTTP_REQUEST_DURATION, start.elapsed());
        Ok(())
    }
}

/// Wrap `handler` so each call is counted and timed in `registry`.
pub fn instrument<H>(registry: Arc<MetricsRegistry>, handler: H) -> Instrumented<H> {
    Instrumented { registry, inner: handler }
}
