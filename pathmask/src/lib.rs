//! Path-addressed masking for JSON documents.
//!
//! This crate replaces selected values inside an arbitrary JSON document before
//! it reaches a log line or a telemetry sink. Values are selected by their
//! **structural path**, never by inspecting their content:
//!
//! - `$` is the document root
//! - `.name` descends into an object field
//! - `[]` stands for any element of an array
//!
//! A rule such as `$.jobs[].name` therefore masks the `name` field of every
//! element of the `jobs` array, whatever its length.
//!
//! What this crate does:
//! - decodes a document into a [`serde_json::Value`] tree
//! - walks the tree, computing a canonical path for every node
//! - substitutes the output of a [`MaskFunction`] for every matched node
//! - re-encodes the result
//!
//! What it does not do:
//! - detect sensitive values by content or type
//! - support wildcards other than `[]`
//! - stream documents; the whole tree is materialized in memory
//!
//! ```rust
//! let masked = pathmask::mask(r#"{"user":"ana","token":"sk_live_123"}"#, ["$.token"])?;
//! assert_eq!(masked, r#"{"user":"ana","token":"[REDACTED]"}"#);
//! # Ok::<(), pathmask::MaskError>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub mod codec;
mod error;
pub mod mask;
mod masker;
pub mod observer;
mod output;
pub mod path;
mod rules;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;
pub mod walk;

pub use codec::KeyOrder;
pub use error::{MaskError, Result};
pub use mask::{FixedMask, MASK_CHAR, MaskFunction, REDACTED_PLACEHOLDER, TextMask};
pub use masker::{Masker, MaskerBuilder, MaskerConfig, mask};
pub use observer::{MaskObserver, NoopObserver};
pub use output::MaskedJson;
pub use path::{JsonPath, ROOT, canonicalize};
pub use rules::RuleSet;
#[cfg(feature = "slog")]
pub use self::slog::{SlogMasked, SlogObserver};
pub use self::tracing::{TracingMaskedExt, TracingObserver};
pub use walk::Walker;
