//! Prediction endpoint URL assembly.

/// Used when no base URL override was provided at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Join the configured base URL with the predict route. Trailing slashes on
/// the base are stripped so overrides like `https://host/api/` still produce
/// a single separator.
pub fn predict_url(base: &str) -> String {
    format!("{}/predict", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_base(DEFAULT_API_BASE, "http://localhost:8000/api/predict")]
    #[case::trailing_slash("https://vision.example.com/api/", "https://vision.example.com/api/predict")]
    #[case::doubled_slashes("https://vision.example.com/api//", "https://vision.example.com/api/predict")]
    fn joins_base_and_route(#[case] base: &str, #[case] url: &str) {
        assert_eq!(predict_url(base), url);
    }
}
