//! Pattern detection - repeated and sequential character runs.

const REPEAT_RUN: usize = 3;
const SEQUENCE_RUN: usize = 4;

/// Detects `REPEAT_RUN` identical characters in a row, e.g. `aaa`.
pub(super) fn has_repeated_run(chars: &[char]) -> bool {
    chars
        .windows(REPEAT_RUN)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// Detects `SEQUENCE_RUN` consecutive code points ascending or descending,
/// e.g. `1234` or `dcba`.
pub(super) fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(SEQUENCE_RUN).any(|w| {
        let steps: Vec<i64> = w
            .windows(2)
            .map(|pair| i64::from(u32::from(pair[1])) - i64::from(u32::from(pair[0])))
            .collect();
        steps.iter().all(|&s| s == 1) || steps.iter().all(|&s| s == -1)
    })
}
