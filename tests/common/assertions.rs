//! Domain-specific assertion macros for chartcheck harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which part of a verdict was wrong.

use chartcheck::Verdict;

/// Assert that a verdict passed with an empty diff.
///
/// ```rust
/// assert_passes!(verdict);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($verdict:expr) => {{
        let verdict: &chartcheck::Verdict = &$verdict;
        if !verdict.passed || !verdict.diff.is_empty() {
            panic!(
                "assert_passes! failed:\n  passed: {}\n  diff:\n{}",
                verdict.passed,
                verdict.diff.join("\n")
            );
        }
    }};
}

/// Assert that a verdict failed with exactly the given diff lines.
///
/// ```rust
/// assert_fails_with!(verdict, ["DocumentIndex:\t0", "Expected to contain document:", "..."]);
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($verdict:expr, [$($line:expr),* $(,)?]) => {{
        let verdict: &chartcheck::Verdict = &$verdict;
        assert!(
            !verdict.passed,
            "assert_fails_with! failed: verdict passed.\n  diff:\n{}",
            verdict.diff.join("\n")
        );
        let expected: Vec<String> = vec![$($line.to_string()),*];
        pretty_assertions::assert_eq!(verdict.diff, expected);
    }};
}

/// Document indices cited by the `DocumentIndex:` lines of a diff, in order.
pub fn cited_indices(verdict: &Verdict) -> Vec<usize> {
    verdict
        .diff
        .iter()
        .filter_map(|line| line.strip_prefix("DocumentIndex:\t"))
        .map(|index| index.parse().expect("DocumentIndex must be numeric"))
        .collect()
}

/// Assert every diff block has the three-line shape.
pub fn assert_block_shape(verdict: &Verdict) {
    assert_eq!(
        verdict.diff.len() % 3,
        0,
        "diff must be made of three-line blocks:\n{}",
        verdict.diff.join("\n")
    );
    for block in verdict.diff.chunks(3) {
        assert!(block[0].starts_with("DocumentIndex:\t"), "bad block: {block:?}");
        assert!(block[1].starts_with("Expected "), "bad block: {block:?}");
        assert!(block[2].starts_with("\tKind = "), "bad block: {block:?}");
    }
}
