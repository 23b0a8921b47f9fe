//! Instruction sets backing the kernels.
//!
//! Selection happens at compile time from the enabled target features; the
//! running CPU is never probed.

/// Instruction set a kernel was compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// SSE with 128-bit vectors (4 f32 per vector)
    Sse,
    /// AVX with 256-bit vectors (8 f32 per vector)
    Avx,
    /// AVX-512F with 512-bit vectors (16 f32 per vector)
    Avx512,
    /// ARM NEON with 128-bit vectors (4 f32 per vector)
    Neon,
    /// Portable lane loop (left to the compiler's auto-vectorizer)
    Portable,
}

impl Backend {
    /// Backend used by the 4-lane kernel in this build.
    pub const fn narrow() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse"
        )) {
            Backend::Sse
        } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            Backend::Neon
        } else {
            Backend::Portable
        }
    }

    /// Backend used by the 8-lane kernel in this build.
    pub const fn medium() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx"
        )) {
            Backend::Avx
        } else {
            Backend::Portable
        }
    }

    /// Backend used by the 16-lane kernel in this build.
    pub const fn wide() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx512f"
        )) {
            Backend::Avx512
        } else {
            Backend::Portable
        }
    }

    /// Check if this backend uses explicit SIMD intrinsics.
    #[inline]
    pub fn is_simd(&self) -> bool {
        !matches!(self, Backend::Portable)
    }

    /// Get a human-readable description of the backend.
    pub fn description(&self) -> &'static str {
        match self {
            Backend::Sse => "SSE (128-bit)",
            Backend::Avx => "AVX (256-bit)",
            Backend::Avx512 => "AVX-512F (512-bit)",
            Backend::Neon => "NEON (128-bit)",
            Backend::Portable => "portable (no intrinsics)",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
