//! `?id=N` query extractor that never rejects.

use axum::{
    extract::{FromRequestParts, Query},
    http::{Uri, request::Parts},
};
use std::convert::Infallible;

/// Extractor for the integer `id` query parameter.
///
/// Absent, empty, non-numeric or out-of-range values all yield `0`. Only the
/// first `id` parameter is considered.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::any};
/// use axum_helpers::extractors::QueryId;
///
/// async fn show(QueryId(id): QueryId) -> String {
///     format!("record {}", id)
/// }
///
/// let app: Router = Router::new().route("/record", any(show));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryId(pub i64);

impl QueryId {
    pub fn from_uri(uri: &Uri) -> Self {
        let id = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == "id")
                    .map(|(_, value)| scan_decimal(&value))
            })
            .unwrap_or(0);

        QueryId(id)
    }
}

impl<S> FromRequestParts<S> for QueryId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(QueryId::from_uri(&parts.uri))
    }
}

/// Scan a leading decimal integer the way a `%d` scanner does.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// ASCII digits is parsed; anything after it is ignored. Returns `0` when no
/// digits are present or the value overflows `i64`.
pub fn scan_decimal(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    let parsed = if negative {
        format!("-{}", digits).parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(uri: &str) -> i64 {
        QueryId::from_uri(&uri.parse::<Uri>().unwrap()).0
    }

    #[test]
    fn test_plain_id() {
        assert_eq!(id_of("/product?id=2"), 2);
    }

    #[test]
    fn test_missing_or_empty_id_is_zero() {
        assert_eq!(id_of("/product"), 0);
        assert_eq!(id_of("/product?other=5"), 0);
        assert_eq!(id_of("/product?id="), 0);
        assert_eq!(id_of("/product?id"), 0);
    }

    #[test]
    fn test_non_numeric_id_is_zero() {
        assert_eq!(id_of("/product?id=abc"), 0);
    }

    #[test]
    fn test_first_id_parameter_wins() {
        assert_eq!(id_of("/product?id=7&id=8"), 7);
        assert_eq!(id_of("/product?name=x&id=3"), 3);
    }

    #[test]
    fn test_percent_encoded_value() {
        assert_eq!(id_of("/product?id=%2012"), 12);
    }

    #[test]
    fn test_scan_decimal_prefix_and_sign() {
        assert_eq!(scan_decimal("12abc"), 12);
        assert_eq!(scan_decimal("-4"), -4);
        assert_eq!(scan_decimal("+9"), 9);
        assert_eq!(scan_decimal("  5"), 5);
        assert_eq!(scan_decimal("-"), 0);
        assert_eq!(scan_decimal("x1"), 0);
    }

    #[test]
    fn test_scan_decimal_overflow_is_zero() {
        assert_eq!(scan_decimal("99999999999999999999"), 0);
        assert_eq!(scan_decimal(&i64::MIN.to_string()), i64::MIN);
    }
}
