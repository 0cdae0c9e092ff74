//! Interchangeable kernels answering one question: do two byte slices hold
//! the same bytes?
//!
//! Each kernel reads memory at a different width: one byte at a time
//! ([`scalar`]), eight-byte words ([`word`]), 128-bit and 256-bit vector
//! lanes (see [`Kernel::NarrowVector`] and [`Kernel::WideVector`]), the C
//! library's `memcmp` ([`native`]) and the standard slice equality
//! ([`sequence`]). They all agree on every input.
//!
//! A missing slice is written `None`. Two missing slices are equal, a
//! missing slice never equals a present one, and slices of different lengths
//! are never equal. The same checks also short-circuit two handles to the
//! same memory without reading it.
//!
//! [`generic`] offers the same unrolled comparison over slices of any
//! `PartialEq` element type.
//!
//! # Example
//!
//! ```
//! use slicecmp::{scalar, Kernel};
//!
//! let left = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit";
//! let right = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit";
//!
//! assert!(scalar::compare(Some(left), Some(right)));
//!
//! let kernel = "word".parse::<Kernel>().unwrap();
//! assert_eq!(kernel.compare(Some(left), None), Ok(false));
//! ```

#![warn(missing_docs)]

/// Vector kernels using x86 architecture features.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

/// Vector kernels using aarch64 NEON.
#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Vector kernels using WebAssembly SIMD128.
#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub mod wasm32;

/// Equality kernel backed by the C library's `memcmp`.
#[cfg(any(unix, windows))]
pub mod native;

pub mod generic;
/// Byte-at-a-time equality kernel.
pub mod scalar;
/// Equality kernel backed by the standard library's slice equality.
pub mod sequence;
/// Word-at-a-time equality kernel.
pub mod word;

mod capability;
mod error;
mod kernel;
mod memcmp;
mod preamble;
#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "wasm32", target_feature = "simd128")
))]
mod vector;

pub use self::{
    capability::{Capabilities, Capability},
    error::{Error, Result},
    kernel::Kernel,
};
