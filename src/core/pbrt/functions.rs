use super::types::*;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_UID: AtomicU64 = AtomicU64::new(0);

/// Returns a process-wide unique identifier for a scene entity.
pub fn new_uid() -> UniqueId {
    return NEXT_UID.fetch_add(1, Ordering::Relaxed);
}

#[inline]
pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    return (1.0 - t) * v1 + t * v2;
}

#[inline]
pub fn radians(deg: Float) -> Float {
    return deg * (super::constants::PI / 180.0);
}

/// Largest power of two dividing the address, i.e. the alignment the
/// pointer actually has.
pub fn alignment<T>(ptr: *const T) -> usize {
    let address = ptr as usize;
    if address == 0 {
        return 0;
    }
    return 1usize << address.trailing_zeros();
}
