//! Aligned `f32` storage shared by all kernels.

use std::ops::{Deref, DerefMut};

use crate::kernels::WIDE_WIDTH;

/// Byte alignment of every [`FloatVector`]; one 512-bit register.
pub const VECTOR_ALIGN: usize = 64;

/// Fixed-length `f32` array aligned to [`VECTOR_ALIGN`] bytes.
///
/// `N` must be a multiple of the widest kernel (16 lanes), so every kernel
/// width divides it evenly. A bad `N` fails to compile at the first
/// construction.
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatVector<const N: usize> {
    data: [f32; N],
}

impl<const N: usize> FloatVector<N> {
    const WHOLE_CHUNKS: () = assert!(
        N % WIDE_WIDTH == 0,
        "FloatVector length must be a multiple of 16 lanes"
    );

    /// Wrap an array.
    #[inline]
    pub const fn from_array(data: [f32; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WHOLE_CHUNKS;
        Self { data }
    }

    /// All lanes set to `0.0`.
    #[inline]
    pub const fn zeroed() -> Self {
        Self::from_array([0.0; N])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.data
    }
}

impl<const N: usize> Default for FloatVector<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> From<[f32; N]> for FloatVector<N> {
    fn from(data: [f32; N]) -> Self {
        Self::from_array(data)
    }
}

impl<const N: usize> Deref for FloatVector<N> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.data
    }
}

impl<const N: usize> DerefMut for FloatVector<N> {
    fn deref_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// The demo operand pair.
///
/// `a = [1, 2, ..., 16]` and `b` swaps each adjacent pair of `a`, so both
/// lanes of pair `p` sum to `4 * p + 3`: `[3, 3, 7, 7, ..., 31, 31]`.
pub fn demo_operands() -> (FloatVector<16>, FloatVector<16>) {
    let a = FloatVector::from_array([
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    ]);
    let b = FloatVector::from_array([
        2.0, 1.0, 4.0, 3.0, 6.0, 5.0, 8.0, 7.0, 10.0, 9.0, 12.0, 11.0, 14.0, 13.0, 16.0, 15.0,
    ]);
    (a, b)
}
