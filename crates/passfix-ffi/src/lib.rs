// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// passfix-ffi: C-compatible FFI layer for the password checker.
//
// Memory management rules:
// - No handle is needed: every call is independent and stateless.
// - Error strings written to `error_out`: caller must free with `passfix_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
//
// Edit counts that do not fit in a C int saturate at INT_MAX.

use std::ffi::{CStr, CString, c_char, c_int};

use passfix_check::PasswordChecker;
use passfix_core::LengthPolicy;

// ── Evaluation ──────────────────────────────────────────────────

/// Minimum number of edits to make `password` strong under the default
/// 6..=20 policy.
///
/// Returns -1 if `password` is NULL or not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn passfix_evaluate(password: *const c_char) -> c_int {
    let Some(password) = cstr_to_str(password) else {
        return -1;
    };
    edits_to_c(PasswordChecker::default().evaluate(password))
}

/// Minimum number of edits to make `password` strong under the length
/// bounds `[min_len, max_len]`.
///
/// Returns -1 on error. If `error_out` is non-NULL it then receives a
/// heap-allocated message that the caller must free with `passfix_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn passfix_evaluate_with_policy(
    password: *const c_char,
    min_len: usize,
    max_len: usize,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(password) = cstr_to_str(password) else {
        set_error(error_out, "password is null or not valid UTF-8");
        return -1;
    };
    match LengthPolicy::new(min_len, max_len) {
        Ok(policy) => edits_to_c(PasswordChecker::new(policy).evaluate(password)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

/// Check whether `password` is already strong under the default policy.
/// Returns 1 for strong, 0 for not strong, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn passfix_is_strong(password: *const c_char) -> c_int {
    let Some(password) = cstr_to_str(password) else {
        return -1;
    };
    if PasswordChecker::default().is_strong(password) { 1 } else { 0 }
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned through an `error_out` parameter.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn passfix_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn edits_to_c(edits: usize) -> c_int {
    c_int::try_from(edits).unwrap_or(c_int::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn evaluate_default_policy() {
        let pw = CString::new("aaa111").unwrap();
        assert_eq!(unsafe { passfix_evaluate(pw.as_ptr()) }, 2);

        let empty = CString::new("").unwrap();
        assert_eq!(unsafe { passfix_evaluate(empty.as_ptr()) }, 6);
    }

    #[test]
    fn null_password_is_error() {
        assert_eq!(unsafe { passfix_evaluate(ptr::null()) }, -1);
        assert_eq!(unsafe { passfix_is_strong(ptr::null()) }, -1);
    }

    #[test]
    fn invalid_utf8_is_error() {
        let bytes = [0xFFu8, 0xFE, 0x00];
        assert_eq!(unsafe { passfix_evaluate(bytes.as_ptr().cast()) }, -1);
    }

    #[test]
    fn evaluate_with_custom_policy() {
        let pw = CString::new("aB3").unwrap();
        let mut err: *mut c_char = ptr::null_mut();
        let edits = unsafe { passfix_evaluate_with_policy(pw.as_ptr(), 8, 12, &mut err) };
        assert_eq!(edits, 5);
        assert!(err.is_null());
    }

    #[test]
    fn inverted_policy_reports_error() {
        let pw = CString::new("aB3").unwrap();
        let mut err: *mut c_char = ptr::null_mut();
        let edits = unsafe { passfix_evaluate_with_policy(pw.as_ptr(), 12, 8, &mut err) };
        assert_eq!(edits, -1);
        assert!(!err.is_null());
        let msg = unsafe { CStr::from_ptr(err) }.to_str().unwrap().to_string();
        assert_eq!(msg, "minimum length 12 exceeds maximum length 8");
        unsafe { passfix_free_str(err) };
    }

    #[test]
    fn strong_check() {
        let strong = CString::new("1337C0d3").unwrap();
        let weak = CString::new("password").unwrap();
        assert_eq!(unsafe { passfix_is_strong(strong.as_ptr()) }, 1);
        assert_eq!(unsafe { passfix_is_strong(weak.as_ptr()) }, 0);
    }

    #[test]
    fn edit_count_saturates() {
        assert_eq!(edits_to_c(7), 7);
        assert_eq!(edits_to_c(usize::MAX), c_int::MAX);
    }
}
