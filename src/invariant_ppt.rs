//! Runtime invariants with contract coverage
//!
//! Production code states its invariants through [`assert_invariant!`]. Each
//! checked invariant is recorded per thread, so a test can afterwards demand
//! that a given set of invariants was actually exercised with
//! [`contract_test`].
//!
//! ```rust,ignore
//! use liveaudio::invariant_ppt::contract_test;
//!
//! let config = AudioConfiguration::default_configuration();
//! contract_test("derived fields", &[invariants::ASC_MATCHES_INPUTS]);
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;

/// Invariant messages asserted by the configuration value
pub mod invariants {
    pub const ASC_MATCHES_INPUTS: &str =
        "ASC must decode to the stored sample rate and channel count";
    pub const ASC_IS_AAC_LC: &str = "ASC must carry the AAC LC object type";
    pub const HINT_COVERS_PCM_FRAME: &str = "Buffer size hint must cover one PCM access unit";
}

thread_local! {
    static CHECKED: RefCell<BTreeSet<&'static str>> = const { RefCell::new(BTreeSet::new()) };
}

/// Assert an invariant and record that it was checked.
///
/// Panics with the message (and optional context) when the condition is false.
#[macro_export]
macro_rules! assert_invariant {
    ($condition:expr, $message:expr) => {
        $crate::invariant_ppt::__check($condition, $message, None)
    };
    ($condition:expr, $message:expr, $context:expr) => {
        $crate::invariant_ppt::__check($condition, $message, Some($context))
    };
}

#[doc(hidden)]
pub fn __check(condition: bool, message: &'static str, context: Option<&str>) {
    CHECKED.with(|checked| {
        checked.borrow_mut().insert(message);
    });

    if !condition {
        panic!(
            "INVARIANT VIOLATION [{}]: {}",
            context.unwrap_or("unknown"),
            message
        );
    }
}

/// Invariants checked so far on this thread
pub fn checked_invariants() -> Vec<&'static str> {
    CHECKED.with(|checked| checked.borrow().iter().copied().collect())
}

/// Panic unless every listed invariant was checked on this thread.
pub fn contract_test(name: &str, required: &[&str]) {
    let checked = CHECKED.with(|checked| checked.borrow().clone());
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|inv| !checked.contains(*inv))
        .collect();

    if !missing.is_empty() {
        panic!(
            "CONTRACT FAILURE [{}]: invariants never checked:\n  - {}",
            name,
            missing.join("\n  - ")
        );
    }
}

pub fn clear_invariant_log() {
    CHECKED.with(|checked| checked.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_invariants_are_recorded() {
        clear_invariant_log();
        crate::assert_invariant!(true, invariants::ASC_IS_AAC_LC);
        assert_eq!(checked_invariants(), vec![invariants::ASC_IS_AAC_LC]);
        contract_test("recorded", &[invariants::ASC_IS_AAC_LC]);
    }

    #[test]
    #[should_panic(expected = "CONTRACT FAILURE")]
    fn test_contract_reports_missing() {
        clear_invariant_log();
        contract_test("missing", &[invariants::HINT_COVERS_PCM_FRAME]);
    }

    #[test]
    #[should_panic(expected = "INVARIANT VIOLATION [unit]")]
    fn test_violation_panics() {
        crate::assert_invariant!(false, invariants::ASC_MATCHES_INPUTS, "unit");
    }
}
