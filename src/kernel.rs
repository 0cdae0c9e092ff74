use crate::{scalar, sequence, word, Capabilities, Capability, Error, Result};
use std::{fmt, str::FromStr};

/// Every equality kernel offered by the crate.
///
/// All kernels return the same verdict for the same input. They differ only
/// in how many bytes they inspect per step and in what the host must
/// provide. No kernel is preferred over another: callers pick one, usually
/// among [`Kernel::available`].
///
/// ```
/// use slicecmp::Kernel;
///
/// let left = vec![1u8; 4096];
/// let right = left.clone();
///
/// for kernel in Kernel::available() {
///     assert_eq!(kernel.compare(Some(&left), Some(&right)), Ok(true));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// One byte per step. The reference every other kernel is tested against.
    Scalar,
    /// Eight-byte words, four per step.
    Word,
    /// 128-bit vector lanes, four per step.
    NarrowVector,
    /// 256-bit vector lanes, four per step.
    WideVector,
    /// The C library's `memcmp`.
    Native,
    /// The standard library's slice equality.
    Sequence,
}

impl Kernel {
    /// All kernels, in no particular order of preference.
    pub const ALL: [Kernel; 6] = [
        Kernel::Scalar,
        Kernel::Word,
        Kernel::NarrowVector,
        Kernel::WideVector,
        Kernel::Native,
        Kernel::Sequence,
    ];

    /// Canonical name, accepted back by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Kernel::Scalar => "scalar",
            Kernel::Word => "word",
            Kernel::NarrowVector => "narrow",
            Kernel::WideVector => "wide",
            Kernel::Native => "native",
            Kernel::Sequence => "sequence",
        }
    }

    /// What the host must provide before this kernel can run.
    pub fn required_capability(self) -> Option<Capability> {
        match self {
            Kernel::Scalar | Kernel::Word | Kernel::Sequence => None,
            Kernel::NarrowVector => Some(Capability::NarrowVector),
            Kernel::WideVector => Some(Capability::WideVector),
            Kernel::Native => Some(Capability::NativeCompare),
        }
    }

    /// Whether this kernel can run on the current host.
    pub fn is_available(self) -> bool {
        self.required_capability()
            .map_or(true, |capability| Capabilities::detect().has(capability))
    }

    /// Kernels that can run on the current host.
    pub fn available() -> impl Iterator<Item = Kernel> {
        Self::ALL.into_iter().filter(|kernel| kernel.is_available())
    }

    /// Compares `a` and `b`, where `None` stands for an absent sequence.
    ///
    /// Fails only when the kernel cannot run on this host.
    pub fn compare(self, a: Option<&[u8]>, b: Option<&[u8]>) -> Result<bool> {
        if let Some(capability) = self.required_capability() {
            if !Capabilities::detect().has(capability) {
                log::warn!("kernel {} requested without {}", self, capability);
                return Err(Error::Unavailable {
                    kernel: self,
                    capability,
                });
            }
        }

        // Safe because the required capability was just checked.
        Ok(unsafe { self.compare_unchecked(a, b) })
    }

    /// # Safety
    ///
    /// The host must provide `self.required_capability()`.
    unsafe fn compare_unchecked(self, a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
        match self {
            Kernel::Scalar => scalar::compare(a, b),
            Kernel::Word => word::compare(a, b),
            Kernel::NarrowVector => narrow_vector_compare(a, b),
            Kernel::WideVector => wide_vector_compare(a, b),
            Kernel::Native => native_compare(a, b),
            Kernel::Sequence => sequence::compare(a, b),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        #[inline]
        unsafe fn narrow_vector_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
            crate::x86::sse2_compare(a, b)
        }

        #[inline]
        unsafe fn wide_vector_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
            crate::x86::avx2_compare(a, b)
        }
    } else if #[cfg(target_arch = "aarch64")] {
        #[inline]
        unsafe fn narrow_vector_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
            crate::aarch64::neon_compare(a, b)
        }

        unsafe fn wide_vector_compare(_: Option<&[u8]>, _: Option<&[u8]>) -> bool {
            unreachable!("256-bit lanes are not offered on aarch64")
        }
    } else if #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))] {
        #[inline]
        unsafe fn narrow_vector_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
            crate::wasm32::simd128_compare(a, b)
        }

        unsafe fn wide_vector_compare(_: Option<&[u8]>, _: Option<&[u8]>) -> bool {
            unreachable!("256-bit lanes are not offered on wasm32")
        }
    } else {
        unsafe fn narrow_vector_compare(_: Option<&[u8]>, _: Option<&[u8]>) -> bool {
            unreachable!("128-bit lanes are not offered on this architecture")
        }

        unsafe fn wide_vector_compare(_: Option<&[u8]>, _: Option<&[u8]>) -> bool {
            unreachable!("256-bit lanes are not offered on this architecture")
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(unix, windows))] {
        #[inline]
        unsafe fn native_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
            crate::native::compare(a, b)
        }
    } else {
        unsafe fn native_compare(_: Option<&[u8]>, _: Option<&[u8]>) -> bool {
            unreachable!("memcmp is not linked on this platform")
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kernel {
    type Err = Error;

    /// Parses a kernel name, ignoring ASCII case. Besides the canonical names,
    /// the instruction set names `sse2`, `neon`, `simd128`, `avx2` and the
    /// routine name `memcmp` are accepted.
    fn from_str(name: &str) -> Result<Self> {
        const NAMES: [(&str, Kernel); 11] = [
            ("scalar", Kernel::Scalar),
            ("word", Kernel::Word),
            ("narrow", Kernel::NarrowVector),
            ("sse2", Kernel::NarrowVector),
            ("neon", Kernel::NarrowVector),
            ("simd128", Kernel::NarrowVector),
            ("wide", Kernel::WideVector),
            ("avx2", Kernel::WideVector),
            ("native", Kernel::Native),
            ("memcmp", Kernel::Native),
            ("sequence", Kernel::Sequence),
        ];

        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, kernel)| kernel)
            .ok_or_else(|| Error::UnknownKernel(name.to_owned()))
    }
}
