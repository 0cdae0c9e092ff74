use std::{fmt, sync::OnceLock};

/// Hardware or platform facility a kernel needs before it may be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// 128-bit vector lanes: SSE2 on x86, NEON on aarch64, SIMD128 on wasm32.
    NarrowVector,
    /// 256-bit vector lanes: AVX2 on x86.
    WideVector,
    /// A linked C library providing `memcmp`.
    NativeCompare,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NarrowVector => "128-bit vector lanes",
            Self::WideVector => "256-bit vector lanes",
            Self::NativeCompare => "native memcmp",
        })
    }
}

/// Capabilities of the running host, detected once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    narrow_vector: bool,
    wide_vector: bool,
    native_compare: bool,
}

static DETECTED: OnceLock<Capabilities> = OnceLock::new();

impl Capabilities {
    /// Returns the host capabilities. Detection runs on the first call only;
    /// every later call returns the same value.
    pub fn detect() -> &'static Self {
        DETECTED.get_or_init(|| {
            let (narrow_vector, wide_vector) = probe_vectors();
            let capabilities = Self {
                narrow_vector,
                wide_vector,
                native_compare: cfg!(any(unix, windows)),
            };
            log::debug!("detected kernel capabilities: {:?}", capabilities);
            capabilities
        })
    }

    /// Whether `capability` is present.
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::NarrowVector => self.narrow_vector,
            Capability::WideVector => self.wide_vector,
            Capability::NativeCompare => self.native_compare,
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        fn probe_vectors() -> (bool, bool) {
            (is_x86_feature_detected!("sse2"), is_x86_feature_detected!("avx2"))
        }
    } else if #[cfg(target_arch = "aarch64")] {
        fn probe_vectors() -> (bool, bool) {
            (std::arch::is_aarch64_feature_detected!("neon"), false)
        }
    } else if #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))] {
        fn probe_vectors() -> (bool, bool) {
            (true, false)
        }
    } else {
        fn probe_vectors() -> (bool, bool) {
            (false, false)
        }
    }
}
