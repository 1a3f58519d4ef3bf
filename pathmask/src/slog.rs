//! Adapters between mask operations and `slog`.
//!
//! This module is responsible for:
//! - logging [`MaskedJson`] as structured JSON through `slog`'s nested-value
//!   support, so a masked document keeps its shape in the log record
//! - forwarding walk events to a `slog::Logger` via [`SlogObserver`]
//!
//! It does not configure `slog` drains or decide what gets masked.
//!
//! ```ignore
//! let masked = masker.mask_json(payload, &rules);
//! slog::info!(logger, "webhook received"; "payload" => masked);
//! ```

use slog::{Key, Logger, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{observer::MaskObserver, output::MaskedJson};

/// Marker for values whose `slog::Value` output is always masked.
///
/// Only adapters produced by a mask operation implement it; raw JSON values
/// do not.
///
/// ```compile_fail
/// use pathmask::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<serde_json::Value>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value().clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

/// Emits every walk event through a `slog::Logger`.
///
/// Visits are logged at `trace`, masking decisions at `debug`.
#[derive(Clone)]
pub struct SlogObserver {
    logger: Logger,
}

impl SlogObserver {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl MaskObserver for SlogObserver {
    fn visited(&self, path: &str, canonical: &str) {
        slog::trace!(self.logger, "visiting node"; "path" => path, "canonical" => canonical);
    }

    fn masked(&self, path: &str, canonical: &str) {
        slog::debug!(self.logger, "masking node"; "path" => path, "canonical" => canonical);
    }
}
