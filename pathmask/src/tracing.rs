//! Adapters between mask operations and `tracing`.
//!
//! - [`TracingObserver`]: the debug-logging observer installed by
//!   [`crate::MaskerBuilder::debug_logging`]. Visits are emitted at `TRACE`,
//!   masking decisions at `DEBUG`, both under the `pathmask` target with
//!   `path` and `canonical` fields.
//! - [`TracingMaskedExt`]: records a [`MaskedJson`] as a display field.
//!
//! ```ignore
//! use pathmask::TracingMaskedExt;
//!
//! let masked = masker.mask_json(event, &rules);
//! tracing::info!(event = %masked.tracing_masked(), "request received");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{observer::MaskObserver, output::MaskedJson};

/// Emits every walk event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MaskObserver for TracingObserver {
    fn visited(&self, path: &str, canonical: &str) {
        tracing::trace!(target: "pathmask", path, canonical, "visiting node");
    }

    fn masked(&self, path: &str, canonical: &str) {
        tracing::debug!(target: "pathmask", path, canonical, "masking node");
    }
}

/// Extension trait for recording masked documents as `tracing` fields.
pub trait TracingMaskedExt {
    /// Wraps the masked document as a display value holding compact JSON.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl TracingMaskedExt for MaskedJson {
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}
