//! SIMD element-wise addition kernels for `f32` arrays.
//!
//! Provides three fixed-width kernels and a dispatcher that drives one of
//! them over an aligned array:
//! - [`add_narrow`]: 4 lanes (128-bit, SSE / NEON)
//! - [`add_medium`]: 8 lanes (256-bit, AVX)
//! - [`add_wide`]: 16 lanes (512-bit, AVX-512F)
//!
//! The instruction set behind each kernel is chosen when the crate is
//! compiled (`-C target-feature` / `-C target-cpu`). Kernels whose instruction
//! set is not enabled in the build run a portable lane loop instead, which
//! gives identical results.

pub mod backend;
pub mod buffer;
pub mod dispatch;
pub mod error;
pub mod kernels;
pub mod mode;

pub use backend::Backend;
pub use buffer::{FloatVector, VECTOR_ALIGN, demo_operands};
pub use dispatch::dispatch;
pub use error::{Error, Result};
pub use kernels::{Kernel, add_medium, add_narrow, add_scalar, add_wide};
pub use mode::Mode;
