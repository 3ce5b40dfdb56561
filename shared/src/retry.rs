use crate::error::FetchError;

/// Retries allowed after the first attempt.
pub const MAX_RETRIES: u32 = 2;

/// Whether a request that failed with `error` should be tried again after
/// `failures` failed attempts. Authentication failures are final.
pub fn should_retry(failures: u32, error: &FetchError) -> bool {
    !error.is_unauthenticated() && failures <= MAX_RETRIES
}

/// Backoff before the next attempt, doubling from one second and capped at
/// thirty.
pub fn retry_delay_ms(failures: u32) -> u32 {
    let exponent = failures.saturating_sub(1).min(5);
    (1_000u32 << exponent).min(30_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, FetchError::Network("offline".into()), true)]
    #[case(2, FetchError::from_status(500, "boom"), true)]
    #[case(3, FetchError::from_status(500, "boom"), false)]
    #[case(1, FetchError::from_status(401, ""), false)]
    #[case(1, FetchError::from_status(403, ""), false)]
    #[case(1, FetchError::Decode("bad json".into()), true)]
    fn retry_policy(#[case] failures: u32, #[case] error: FetchError, #[case] expected: bool) {
        assert_eq!(should_retry(failures, &error), expected);
    }

    #[rstest]
    #[case(1, 1_000)]
    #[case(2, 2_000)]
    #[case(3, 4_000)]
    #[case(10, 30_000)]
    fn backoff(#[case] failures: u32, #[case] expected: u32) {
        assert_eq!(retry_delay_ms(failures), expected);
    }
}
