//! C ABI exported by the `cdylib` build.
//!
//! The declarations consumers compile against live in
//! `include/pixles_media.h`.

use std::ffi::{c_char, CStr};
use std::panic;

use crate::core::entry;

/// `void pixles_media(void);`
#[no_mangle]
pub extern "C" fn pixles_media() {
    // Panics must not unwind into C
    let _ = panic::catch_unwind(entry::init);
}

/// `void pixles_media_print_vector(const char *const *strings, size_t len);`
///
/// A null `strings` or zero `len` prints nothing. Null elements are skipped
/// and invalid UTF-8 is replaced. The strings are only read for the duration
/// of the call.
///
/// # Safety
///
/// When `strings` is non-null it must point to `len` readable pointers, each
/// either null or pointing to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn pixles_media_print_vector(strings: *const *const c_char, len: usize) {
    if strings.is_null() || len == 0 {
        return;
    }

    let ptrs = std::slice::from_raw_parts(strings, len);
    let values: Vec<_> = ptrs
        .iter()
        .filter(|p| !p.is_null())
        .map(|&p| CStr::from_ptr(p).to_string_lossy())
        .collect();

    let _ = panic::catch_unwind(|| entry::print_vector(&values));
}
