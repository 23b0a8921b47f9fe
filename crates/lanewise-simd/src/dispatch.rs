//! Drive one kernel across a whole [`FloatVector`].

use crate::buffer::FloatVector;
use crate::mode::Mode;

/// Compute `result = a + b` with the kernel selected by `mode`.
///
/// The arrays are split into non-overlapping chunks of `mode.width()` lanes
/// and the kernel runs once per chunk, in order. Returns the number of
/// kernel calls, always `N / mode.width()`.
pub fn dispatch<const N: usize>(
    mode: Mode,
    result: &mut FloatVector<N>,
    a: &FloatVector<N>,
    b: &FloatVector<N>,
) -> usize {
    let width = mode.width();
    let kernel = mode.kernel();

    log::debug!(
        "Dispatching {} lanes through the {} kernel ({} lanes/call, {})",
        N,
        mode,
        width,
        mode.backend()
    );

    let mut calls = 0;
    for ((dst, a_chunk), b_chunk) in result
        .chunks_exact_mut(width)
        .zip(a.chunks_exact(width))
        .zip(b.chunks_exact(width))
    {
        log::trace!("{} kernel: chunk at offset {}", mode, calls * width);
        kernel(dst, a_chunk, b_chunk);
        calls += 1;
    }

    calls
}
