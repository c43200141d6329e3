//! Parsing and clamping for the three text-field collaborators
//!
//! The engine only ever sees clean values: a filtered list of integers, a
//! size clamped to the displayable range, and a base delay in milliseconds.
//! All of the trimming, token-dropping, and fallback-to-default behavior of
//! the raw text fields lives here.

use crate::sort::sequence::{MAX_LEN, MIN_RANDOM_LEN};
use crate::sort::timing::DEFAULT_BASE_MS;

/// Size used when the size field is empty or unparsable.
pub const DEFAULT_SIZE: usize = 12;

/// Parse a comma-separated list, trimming each token and dropping anything
/// that does not parse as an integer. An empty result is the caller's
/// `InvalidInput` case, not an error here.
pub fn parse_manual_list(text: &str) -> Vec<i64> {
    text.split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// Parse the size field, falling back to [`DEFAULT_SIZE`] and clamping to the
/// displayable range [2, 60].
pub fn parse_size(text: &str) -> usize {
    text.trim()
        .parse::<usize>()
        .unwrap_or(DEFAULT_SIZE)
        .clamp(MIN_RANDOM_LEN, MAX_LEN)
}

/// Parse the speed field as the base delay in milliseconds. Empty, unparsable,
/// or zero input falls back to the default speed.
pub fn parse_speed_ms(text: &str) -> u64 {
    match text.trim().parse::<u64>() {
        Ok(0) | Err(_) => DEFAULT_BASE_MS,
        Ok(ms) => ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_list_trims_and_filters() {
        assert_eq!(parse_manual_list("5,1,4,2,8"), vec![5, 1, 4, 2, 8]);
        assert_eq!(parse_manual_list(" 5 , 1 ,4"), vec![5, 1, 4]);
        assert_eq!(parse_manual_list("abc, , 3"), vec![3]);
        assert_eq!(parse_manual_list("-7, 0, x"), vec![-7, 0]);
        assert!(parse_manual_list("abc,,").is_empty());
        assert!(parse_manual_list("").is_empty());
    }

    #[test]
    fn test_size_clamps_and_defaults() {
        assert_eq!(parse_size("30"), 30);
        assert_eq!(parse_size("0"), 2);
        assert_eq!(parse_size("1"), 2);
        assert_eq!(parse_size("999"), 60);
        assert_eq!(parse_size(""), DEFAULT_SIZE);
        assert_eq!(parse_size("twelve"), DEFAULT_SIZE);
    }

    #[test]
    fn test_speed_defaults_on_zero_or_garbage() {
        assert_eq!(parse_speed_ms("250"), 250);
        assert_eq!(parse_speed_ms("0"), DEFAULT_BASE_MS);
        assert_eq!(parse_speed_ms(""), DEFAULT_BASE_MS);
        assert_eq!(parse_speed_ms("fast"), DEFAULT_BASE_MS);
    }
}
