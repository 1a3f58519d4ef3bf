//! Trace points of a walk.
//!
//! A [`MaskObserver`] is told about every node the walker visits and every node
//! it masks. Observers never influence the output. The default
//! [`NoopObserver`] compiles away; [`crate::TracingObserver`] and (with the
//! `slog` feature) [`crate::SlogObserver`] forward the events to a logger.

/// Receives walk events. Both methods default to doing nothing.
///
/// `path` is the concrete path of the node (`$.jobs[1].name`), `canonical` the
/// form used for rule lookup (`$.jobs[].name`).
pub trait MaskObserver {
    /// Called once for every node reached, before the rule lookup.
    fn visited(&self, path: &str, canonical: &str) {
        let _ = (path, canonical);
    }

    /// Called when the node's subtree is replaced by the mask output.
    fn masked(&self, path: &str, canonical: &str) {
        let _ = (path, canonical);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MaskObserver for NoopObserver {}

impl<T: MaskObserver + ?Sized> MaskObserver for &T {
    fn visited(&self, path: &str, canonical: &str) {
        (**self).visited(path, canonical);
    }

    fn masked(&self, path: &str, canonical: &str) {
        (**self).masked(path, canonical);
    }
}

/// Fans each event out to both observers, left first.
impl<A: MaskObserver, B: MaskObserver> MaskObserver for (A, B) {
    fn visited(&self, path: &str, canonical: &str) {
        self.0.visited(path, canonical);
        self.1.visited(path, canonical);
    }

    fn masked(&self, path: &str, canonical: &str) {
        self.0.masked(path, canonical);
        self.1.masked(path, canonical);
    }
}
