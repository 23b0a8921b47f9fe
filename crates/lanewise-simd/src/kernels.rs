//! Fixed-width element-wise `f32` addition kernels.
//!
//! Every kernel computes `dst[i] = a[i] + b[i]` over exactly its native
//! width. Lanes are independent, so results match [`add_scalar`] bit for bit
//! whichever instruction set is compiled in.

/// Number of lanes processed by [`add_narrow`].
pub const NARROW_WIDTH: usize = 4;
/// Number of lanes processed by [`add_medium`].
pub const MEDIUM_WIDTH: usize = 8;
/// Number of lanes processed by [`add_wide`].
pub const WIDE_WIDTH: usize = 16;

/// A stateless addition kernel: `(dst, a, b)`.
pub type Kernel = fn(&mut [f32], &[f32], &[f32]);

#[inline]
fn check_chunk(width: usize, dst: &[f32], a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), width, "Operand a must hold exactly {width} lanes");
    assert_eq!(b.len(), width, "Operand b must hold exactly {width} lanes");
    assert_eq!(dst.len(), width, "Destination must hold exactly {width} lanes");
}

/// Add one 4-lane chunk: `dst[i] = a[i] + b[i]`.
///
/// # Panics
///
/// Panics if any slice is not exactly 4 elements long.
#[inline]
pub fn add_narrow(dst: &mut [f32], a: &[f32], b: &[f32]) {
    check_chunk(NARROW_WIDTH, dst, a, b);

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
    {
        // SAFETY: lengths checked above; sse is enabled for the whole build
        unsafe { add_narrow_sse(dst, a, b) };
    }
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        // SAFETY: lengths checked above; neon is enabled for the whole build
        unsafe { add_narrow_neon(dst, a, b) };
    }
    #[cfg(not(any(
        all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    add_scalar(dst, a, b);
}

/// Add one 8-lane chunk: `dst[i] = a[i] + b[i]`.
///
/// # Panics
///
/// Panics if any slice is not exactly 8 elements long.
#[inline]
pub fn add_medium(dst: &mut [f32], a: &[f32], b: &[f32]) {
    check_chunk(MEDIUM_WIDTH, dst, a, b);

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx"))]
    {
        // SAFETY: lengths checked above; avx is enabled for the whole build
        unsafe { add_medium_avx(dst, a, b) };
    }
    #[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx")))]
    add_scalar(dst, a, b);
}

/// Add one 16-lane chunk: `dst[i] = a[i] + b[i]`.
///
/// # Panics
///
/// Panics if any slice is not exactly 16 elements long.
#[inline]
pub fn add_wide(dst: &mut [f32], a: &[f32], b: &[f32]) {
    check_chunk(WIDE_WIDTH, dst, a, b);

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx512f"))]
    {
        // SAFETY: lengths checked above; avx512f is enabled for the whole build
        unsafe { add_wide_avx512(dst, a, b) };
    }
    #[cfg(not(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "avx512f"
    )))]
    add_scalar(dst, a, b);
}

/// Scalar implementation of element-wise addition over any length.
///
/// # Panics
///
/// Panics if the three slices have different lengths.
#[inline]
pub fn add_scalar(dst: &mut [f32], a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len(), "Vector lengths must match");
    assert_eq!(dst.len(), a.len(), "Output vector size mismatch");

    for ((d, ai), bi) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *d = ai + bi;
    }
}

// ============================================================================
// SSE Implementation
// ============================================================================

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse"))]
#[target_feature(enable = "sse")]
unsafe fn add_narrow_sse(dst: &mut [f32], a: &[f32], b: &[f32]) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    let a_vec = _mm_loadu_ps(a.as_ptr());
    let b_vec = _mm_loadu_ps(b.as_ptr());
    _mm_storeu_ps(dst.as_mut_ptr(), _mm_add_ps(a_vec, b_vec));
}

// ============================================================================
// AVX Implementation
// ============================================================================

// Compiled on every x86 build so tests can reach it; only called from
// `add_medium` when the build enables avx.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[cfg_attr(not(target_feature = "avx"), allow(dead_code))]
#[target_feature(enable = "avx")]
unsafe fn add_medium_avx(dst: &mut [f32], a: &[f32], b: &[f32]) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    let a_vec = _mm256_loadu_ps(a.as_ptr());
    let b_vec = _mm256_loadu_ps(b.as_ptr());
    _mm256_storeu_ps(dst.as_mut_ptr(), _mm256_add_ps(a_vec, b_vec));
}

// ============================================================================
// AVX-512 Implementation
// ============================================================================

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[cfg_attr(not(target_feature = "avx512f"), allow(dead_code))]
#[target_feature(enable = "avx512f")]
unsafe fn add_wide_avx512(dst: &mut [f32], a: &[f32], b: &[f32]) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    let a_vec = _mm512_loadu_ps(a.as_ptr());
    let b_vec = _mm512_loadu_ps(b.as_ptr());
    _mm512_storeu_ps(dst.as_mut_ptr(), _mm512_add_ps(a_vec, b_vec));
}

// ============================================================================
// NEON Implementation
// ============================================================================

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
#[target_feature(enable = "neon")]
unsafe fn add_narrow_neon(dst: &mut [f32], a: &[f32], b: &[f32]) {
    use std::arch::aarch64::*;

    let a_vec = vld1q_f32(a.as_ptr());
    let b_vec = vld1q_f32(b.as_ptr());
    vst1q_f32(dst.as_mut_ptr(), vaddq_f32(a_vec, b_vec));
}
