//! C entry point for callers that hold raw buffers.

use crate::numerics::hamming::hamming_distance_into;

/// Computes the Hamming distance of two `f32` buffers and writes it to `res[0]`.
///
/// The length is passed by pointer, the way the surrounding vector store hands it
/// over. A null pointer or a negative length returns without computing anything.
///
/// # Safety
///
/// - `a` and `b` must be valid for reads of `*len` consecutive `f32`s.
/// - `res` must be valid for a write of one `f32` and not overlap `a` or `b`.
/// - `*len` should be at least [`MIN_VECTORIZED_LEN`](super::MIN_VECTORIZED_LEN).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hamsimd_hamming(
    a: *const f32,
    b: *const f32,
    res: *mut f32,
    len: *const i64,
) {
    if a.is_null() || b.is_null() || res.is_null() || len.is_null() {
        return;
    }

    // SAFETY: non-null, caller guarantees validity
    let Ok(size) = usize::try_from(unsafe { *len }) else {
        return;
    };

    // SAFETY: caller guarantees both buffers hold `size` readable f32s
    let (a, b) = unsafe {
        (
            std::slice::from_raw_parts(a, size),
            std::slice::from_raw_parts(b, size),
        )
    };

    // SAFETY: caller guarantees `res` is writable and disjoint from the inputs
    hamming_distance_into(a, b, unsafe { &mut *res });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_result_slot() {
        let a: Vec<f32> = (0..19).map(|i| i as f32).collect();
        let mut b = a.clone();
        b[4] = 0.5;
        b[18] = 0.5;
        let len: i64 = 19;
        let mut res = [f32::NAN];

        unsafe { hamsimd_hamming(a.as_ptr(), b.as_ptr(), res.as_mut_ptr(), &len) };
        assert_eq!(res[0], 2.0);
    }

    #[test]
    fn null_and_negative_inputs_are_ignored() {
        let a = [1.0f32; 16];
        let mut res = [-1.0f32];

        let negative: i64 = -4;
        unsafe { hamsimd_hamming(a.as_ptr(), a.as_ptr(), res.as_mut_ptr(), &negative) };
        assert_eq!(res[0], -1.0);

        let len: i64 = 16;
        unsafe { hamsimd_hamming(std::ptr::null(), a.as_ptr(), res.as_mut_ptr(), &len) };
        assert_eq!(res[0], -1.0);

        unsafe { hamsimd_hamming(a.as_ptr(), a.as_ptr(), res.as_mut_ptr(), &len) };
        assert_eq!(res[0], 0.0);
    }
}
