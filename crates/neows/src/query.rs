//! Feed query construction.
//!
//! A [`FeedQuery`] is the validated form of the caller's (start date, end
//! date, API key) triple, resolved into the URL that will be requested.

use std::fmt;

use chrono::NaiveDate;
use reqwest::Url;

use crate::error::{Error, Result};

/// Endpoint for the NeoWs close-approach feed.
pub const FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Public placeholder key accepted by api.nasa.gov at a reduced rate limit.
pub const DEMO_KEY: &str = "DEMO_KEY";

/// Wire format of every date parameter.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    api_key: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    url: Url,
}

impl FeedQuery {
    /// Build a query against the public endpoint.
    ///
    /// An empty `api_key` falls back to [`DEMO_KEY`]. An `end_date` that does
    /// not parse (including the empty string) is left out, and the server
    /// answers with its default window of seven days from `start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `start_date` is not a calendar date in
    /// `YYYY-MM-DD` form.
    pub fn build(start_date: &str, end_date: &str, api_key: &str) -> Result<Self> {
        Self::build_with_base(FEED_URL, start_date, end_date, api_key)
    }

    /// Build a query against a custom endpoint.
    ///
    /// Any query string already present on `base` is replaced.
    pub fn build_with_base(
        base: &str,
        start_date: &str,
        end_date: &str,
        api_key: &str,
    ) -> Result<Self> {
        let api_key = if api_key.is_empty() {
            tracing::info!("api key not set, using {DEMO_KEY}");
            DEMO_KEY.to_string()
        } else {
            api_key.to_string()
        };

        let start = parse_date(start_date).map_err(|reason| Error::InvalidDate {
            input: start_date.to_string(),
            reason,
        })?;

        let end = match parse_date(end_date) {
            Ok(end) => Some(end),
            Err(reason) => {
                tracing::info!(
                    end_date,
                    %reason,
                    "end date not set, server will default to 7 days from the start date"
                );
                None
            }
        };

        let mut url = Url::parse(base).map_err(|e| Error::InvalidUrl {
            url: base.to_string(),
            message: e.to_string(),
        })?;

        let mut params = vec![
            ("api_key", api_key.clone()),
            ("start_date", start.format(DATE_FORMAT).to_string()),
        ];
        if let Some(end) = end {
            params.push(("end_date", end.format(DATE_FORMAT).to_string()));
        }
        params.sort_by_key(|&(key, _)| key);

        url.set_query(None);
        url.query_pairs_mut().extend_pairs(&params);

        Ok(Self {
            api_key,
            start_date: start,
            end_date: end,
            url,
        })
    }

    /// The API key that will be sent.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// First day of the requested window.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the requested window, if one was sent.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// The fully resolved request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Query parameters in the order they appear in the URL.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl fmt::Display for FeedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// chrono on its own accepts unpadded fields such as `2023-1-5`, so the
/// shape is checked first.
fn parse_date(input: &str) -> std::result::Result<NaiveDate, String> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err("expected YYYY-MM-DD".to_string());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn param(query: &FeedQuery, key: &str) -> Option<String> {
        query
            .query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_build_full_query() {
        let query = FeedQuery::build("2023-01-01", "2023-01-03", "abc123").unwrap();
        assert_eq!(
            query.as_str(),
            "https://api.nasa.gov/neo/rest/v1/feed?api_key=abc123&end_date=2023-01-03&start_date=2023-01-01"
        );
        assert_eq!(query.api_key(), "abc123");
        assert_eq!(
            query.start_date(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(query.end_date(), NaiveDate::from_ymd_opt(2023, 1, 3));
    }

    #[test]
    fn test_empty_api_key_uses_demo_key() {
        let query = FeedQuery::build("2023-01-01", "", "").unwrap();
        assert_eq!(query.api_key(), DEMO_KEY);
        assert_eq!(param(&query, "api_key").as_deref(), Some(DEMO_KEY));
    }

    #[test]
    fn test_invalid_end_date_is_omitted() {
        for end in ["", "tomorrow", "2023-13-40", "2023-02-30", "2023-1-05"] {
            let query = FeedQuery::build("2023-01-01", end, "key").unwrap();
            assert_eq!(param(&query, "end_date"), None, "end date {end:?}");
            assert_eq!(query.end_date(), None);
            assert!(!query.as_str().contains("end_date"));
        }
    }

    #[test]
    fn test_invalid_start_date_fails() {
        for start in [
            "",
            "2023-13-40",
            "2023-02-30",
            "2023-1-05",
            "2023/01/01",
            " 2023-01-01",
            "2023-01-01T00:00",
            "+2023-01-01",
        ] {
            let err = FeedQuery::build(start, "2023-01-08", "key").unwrap_err();
            match err {
                Error::InvalidDate { input, .. } => assert_eq!(input, start),
                other => panic!("expected InvalidDate for {start:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(FeedQuery::build("2024-02-29", "", "").is_ok());
        assert!(FeedQuery::build("2023-02-29", "", "").is_err());
    }

    #[test]
    fn test_params_are_sorted_and_encoded() {
        let query = FeedQuery::build("2023-01-01", "2023-01-02", "a b&c").unwrap();
        let keys: Vec<String> = query.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["api_key", "end_date", "start_date"]);
        assert_eq!(
            query.url().query(),
            Some("api_key=a+b%26c&end_date=2023-01-02&start_date=2023-01-01")
        );
        assert_eq!(param(&query, "api_key").as_deref(), Some("a b&c"));
    }

    #[test]
    fn test_custom_base_replaces_query() {
        let query =
            FeedQuery::build_with_base("http://127.0.0.1:8080/feed?x=1", "2023-01-01", "", "k")
                .unwrap();
        assert_eq!(
            query.to_string(),
            "http://127.0.0.1:8080/feed?api_key=k&start_date=2023-01-01"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FeedQuery::build_with_base("not a url", "2023-01-01", "", "k").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    proptest! {
        #[test]
        fn test_any_valid_start_date_is_sent(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
            let start = format!("{year:04}-{month:02}-{day:02}");
            let query = FeedQuery::build(&start, "", "").unwrap();
            prop_assert_eq!(param(&query, "start_date"), Some(start));
        }

        #[test]
        fn test_any_non_date_end_is_omitted(end in "[a-zA-Z ]{0,12}") {
            let query = FeedQuery::build("2023-01-01", &end, "key").unwrap();
            prop_assert_eq!(param(&query, "end_date"), None);
        }
    }
}
