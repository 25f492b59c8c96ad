//! C ABI for the STARK curve bridge
//!
//! All functions follow the same convention:
//!   - The caller owns every buffer
//!   - Inputs are `(pointer, length)` pairs; lengths are validated, never assumed
//!   - Outputs are written into caller buffers of fixed size, only on success
//!   - Returns `i32`: `0` ok, `-1` invalid argument, `-2` primitive failure
//!   - `stark_bridge_verify` returns `1` for a valid signature and `0` otherwise
//!
//! Input views are created inside each call and dropped before it returns.

use std::panic;
use std::ptr;
use std::slice;

use stark_bridge_ops::facade::poseidon;
use stark_bridge_ops::{BridgeError, OperationBridge};
use stark_bridge_primitives::{SizeError, ELEMENT_SIZE, SIGNATURE_SIZE};
use tracing::warn;

/// Success
pub const STATUS_OK: i32 = 0;

/// Malformed input: wrong length, wrong grid shape or a null pointer
pub const STATUS_INVALID_ARGUMENT: i32 = -1;

/// The primitive failed
pub const STATUS_FAILURE: i32 = -2;

const BRIDGE: OperationBridge = OperationBridge::new();

/// Run an entry point, returning [`STATUS_FAILURE`] on panic instead of
/// unwinding across the ABI
fn catch_ffi<F: FnOnce() -> i32>(f: F) -> i32 {
    match panic::catch_unwind(panic::AssertUnwindSafe(f)) {
        Ok(rc) => rc,
        Err(_) => {
            warn!("panic caught at the C boundary");
            STATUS_FAILURE
        }
    }
}

/// Borrow a caller buffer for the duration of one call
///
/// # Safety
///
/// If `data` is non-null it must point to `len` readable bytes that stay
/// valid and unmodified until the enclosing call returns.
unsafe fn view<'a>(
    argument: &'static str,
    data: *const u8,
    len: usize,
) -> Result<&'a [u8], BridgeError> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return Err(SizeError::NullBuffer { argument }.into());
    }
    Ok(slice::from_raw_parts(data, len))
}

/// Copy a finished result to `out` and translate errors to status codes
///
/// # Safety
///
/// `out` must point to `N` writable bytes.
unsafe fn write_result<const N: usize>(
    result: Result<[u8; N], BridgeError>,
    out: *mut u8,
) -> i32 {
    match result {
        Ok(bytes) => {
            ptr::copy_nonoverlapping(bytes.as_ptr(), out, N);
            STATUS_OK
        }
        Err(err) => err.status_code(),
    }
}

/// Pedersen hash of two 32-byte elements into `out` (32 bytes)
///
/// # Safety
///
/// Each input pointer must be null or valid for its length; `out` must be
/// valid for 32 bytes of writes.
#[no_mangle]
pub unsafe extern "C" fn stark_bridge_pedersen(
    first: *const u8,
    first_len: usize,
    second: *const u8,
    second_len: usize,
    out: *mut u8,
) -> i32 {
    if out.is_null() {
        return STATUS_INVALID_ARGUMENT;
    }
    catch_ffi(|| {
        let result = view("first", first, first_len).and_then(|first| {
            let second = view("second", second, second_len)?;
            BRIDGE.pedersen(first, second)
        });
        write_result::<ELEMENT_SIZE>(result, out)
    })
}

/// ECDSA signature `r || w` into `out` (64 bytes), `w = s^-1 mod n`
///
/// # Safety
///
/// Each input pointer must be null or valid for its length; `out` must be
/// valid for 64 bytes of writes.
#[no_mangle]
pub unsafe extern "C" fn stark_bridge_sign(
    private_key: *const u8,
    private_key_len: usize,
    message: *const u8,
    message_len: usize,
    k: *const u8,
    k_len: usize,
    out: *mut u8,
) -> i32 {
    if out.is_null() {
        return STATUS_INVALID_ARGUMENT;
    }
    catch_ffi(|| {
        let result = (|| {
            let private_key = view("private_key", private_key, private_key_len)?;
            let message = view("message", message, message_len)?;
            let k = view("k", k, k_len)?;
            BRIDGE.sign(private_key, message, k)
        })();
        write_result::<SIGNATURE_SIZE>(result, out)
    })
}

/// ECDSA verification; `1` if the signature is valid, `0` otherwise
///
/// # Safety
///
/// Each input pointer must be null or valid for its length.
#[no_mangle]
pub unsafe extern "C" fn stark_bridge_verify(
    public_key: *const u8,
    public_key_len: usize,
    hash: *const u8,
    hash_len: usize,
    r: *const u8,
    r_len: usize,
    w: *const u8,
    w_len: usize,
) -> i32 {
    let rc = catch_ffi(|| {
        let views = (|| {
            Ok::<_, BridgeError>((
                view("public_key", public_key, public_key_len)?,
                view("hash", hash, hash_len)?,
                view("r", r, r_len)?,
                view("w", w, w_len)?,
            ))
        })();
        match views {
            Ok((public_key, hash, r, w)) => i32::from(BRIDGE.verify(public_key, hash, r, w)),
            Err(_) => 0,
        }
    });
    // A panic is just another failed verification here
    i32::from(rc == 1)
}

/// Public key x-coordinate into `out` (32 bytes)
///
/// # Safety
///
/// `private_key` must be null or valid for `private_key_len` bytes; `out`
/// must be valid for 32 bytes of writes.
#[no_mangle]
pub unsafe extern "C" fn stark_bridge_get_public_key(
    private_key: *const u8,
    private_key_len: usize,
    out: *mut u8,
) -> i32 {
    if out.is_null() {
        return STATUS_INVALID_ARGUMENT;
    }
    catch_ffi(|| {
        let result = view("private_key", private_key, private_key_len)
            .and_then(|private_key| BRIDGE.get_public_key(private_key));
        write_result::<ELEMENT_SIZE>(result, out)
    })
}

/// Poseidon permutation of a row-major `rows x cols` grid into `out`
///
/// Only a 3x4 grid is accepted; `out` receives 12 limbs in the same order.
///
/// # Safety
///
/// `state` must be null or valid for `rows * cols` reads; `out` must be
/// valid for 12 `u64` writes.
#[no_mangle]
pub unsafe extern "C" fn stark_bridge_hades(
    state: *const u64,
    rows: usize,
    cols: usize,
    out: *mut u64,
) -> i32 {
    let len = match rows.checked_mul(cols) {
        Some(len) if len > 0 => len,
        _ => return STATUS_INVALID_ARGUMENT,
    };
    if state.is_null() || out.is_null() {
        return STATUS_INVALID_ARGUMENT;
    }
    catch_ffi(|| {
        let values = slice::from_raw_parts(state, len);
        let grid: Vec<&[u64]> = values.chunks(cols).collect();

        match poseidon::hades(&grid) {
            Ok(permuted) => {
                for (i, value) in permuted.iter().flatten().enumerate() {
                    *out.add(i) = *value;
                }
                STATUS_OK
            }
            Err(err) => err.status_code(),
        }
    })
}
