// WASM bindings for passfix.
//
// Provides a `WasmPassfix` class exported via wasm-bindgen that wraps a
// `PasswordChecker`. The assessment breakdown is serialized to a plain
// JavaScript object using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   evaluate("aaa111");                   // => 2
//   const checker = new WasmPassfix(8, 64);
//   checker.evaluate("hunter2");          // => 2
//   checker.isStrong("c0rrectHorse");     // => true
//   checker.assess("aaa111");             // => { edits: 2, missingClasses: ["uppercase"], ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use passfix_check::{Assessment, PasswordChecker};
use passfix_core::policy::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use passfix_core::{LengthPolicy, PolicyError};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of an offending run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRun {
    ch: String,
    start: usize,
    len: usize,
    replacements: usize,
}

/// Serializable representation of an assessment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAssessment {
    char_count: usize,
    min_len: usize,
    max_len: usize,
    inserts: usize,
    deletes: usize,
    missing_classes: Vec<&'static str>,
    offending_runs: Vec<JsRun>,
    k_replacements: usize,
    k_runs: usize,
    non_k_replacements: usize,
    insert_side: usize,
    delete_side: usize,
    edits: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js_assessment(a: &Assessment) -> JsAssessment {
    JsAssessment {
        char_count: a.char_count,
        min_len: a.policy.min_len(),
        max_len: a.policy.max_len(),
        inserts: a.signals.length.inserts,
        deletes: a.signals.length.deletes,
        missing_classes: a.missing_classes.iter().map(|c| c.label()).collect(),
        offending_runs: a
            .offending_runs
            .iter()
            .map(|r| JsRun {
                ch: r.ch.to_string(),
                start: r.start,
                len: r.len,
                replacements: r.replacements(),
            })
            .collect(),
        k_replacements: a.signals.runs.k_replacements,
        k_runs: a.signals.runs.k_runs,
        non_k_replacements: a.combination.non_k_replacements,
        insert_side: a.combination.insert_side,
        delete_side: a.combination.delete_merged,
        edits: a.edits,
    }
}

fn policy_from_bounds(
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> Result<LengthPolicy, PolicyError> {
    LengthPolicy::new(
        min_len.unwrap_or(DEFAULT_MIN_LEN),
        max_len.unwrap_or(DEFAULT_MAX_LEN),
    )
}

// ============================================================================
// WasmPassfix
// ============================================================================

/// Strong-password edit counter for WebAssembly.
#[wasm_bindgen]
pub struct WasmPassfix {
    checker: PasswordChecker,
}

#[wasm_bindgen]
impl WasmPassfix {
    /// Create a checker. Omitted bounds default to 6 and 20.
    #[wasm_bindgen(constructor)]
    pub fn new(min_len: Option<usize>, max_len: Option<usize>) -> Result<WasmPassfix, JsError> {
        let policy =
            policy_from_bounds(min_len, max_len).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmPassfix {
            checker: PasswordChecker::new(policy),
        })
    }

    /// Minimum number of edits to make the password strong.
    pub fn evaluate(&self, password: &str) -> usize {
        self.checker.evaluate(password)
    }

    /// Whether the password already satisfies every rule.
    #[wasm_bindgen(js_name = "isStrong")]
    pub fn is_strong(&self, password: &str) -> bool {
        self.checker.is_strong(password)
    }

    /// Full breakdown of the edit count as a JavaScript object.
    pub fn assess(&self, password: &str) -> Result<JsValue, JsError> {
        let assessment = self.checker.assess(password);
        serde_wasm_bindgen::to_value(&to_js_assessment(&assessment))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "minLength")]
    pub fn min_length(&self) -> usize {
        self.checker.policy().min_len()
    }

    #[wasm_bindgen(js_name = "maxLength")]
    pub fn max_length(&self) -> usize {
        self.checker.policy().max_len()
    }
}

/// Minimum number of edits under the default 6..=20 policy.
#[wasm_bindgen]
pub fn evaluate(password: &str) -> usize {
    passfix_check::evaluate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_default_when_omitted() {
        assert_eq!(policy_from_bounds(None, None).unwrap(), LengthPolicy::default());
        let policy = policy_from_bounds(Some(10), None).unwrap();
        assert_eq!(policy.min_len(), 10);
        assert_eq!(policy.max_len(), 20);
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(policy_from_bounds(Some(30), None).is_err());
    }

    #[test]
    fn assessment_dto() {
        let a = PasswordChecker::default().assess("aaa111");
        let js = to_js_assessment(&a);
        assert_eq!(js.edits, 2);
        assert_eq!(js.missing_classes, vec!["uppercase"]);
        assert_eq!(js.offending_runs.len(), 2);
        assert_eq!(js.offending_runs[0].ch, "a");
        assert_eq!(js.k_runs, 2);
        assert_eq!(js.delete_side, 0);
    }

    #[test]
    fn free_function_uses_default_policy() {
        assert_eq!(evaluate(""), 6);
        assert_eq!(evaluate("1337C0d3"), 0);
    }
}
