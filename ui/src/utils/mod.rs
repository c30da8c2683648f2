//! Query-string helpers shared by the account screens.
//!
//! Parameter strings are treated as opaque key/value text: no percent
//! decoding, and malformed pieces pass through unchanged.

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL contains "localhost".
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost"))
        .unwrap_or(false)
}

/// Split a query string (with or without the leading '?') into ordered
/// key/value pairs. Pieces without '=' keep an empty value.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let trimmed = search.strip_prefix('?').unwrap_or(search);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (piece.to_string(), String::new()),
        })
        .collect()
}

/// Merge the current query string into a destination path or URL.
///
/// Parameters already present on `base` win; every parameter from `search`
/// that `base` doesn't define is appended, so tracking and deep-link
/// parameters survive the redirect. Applying the merge twice is a no-op.
pub fn merge_path_with_query(base: &str, search: &str) -> String {
    let ambient = parse_query(search);
    if ambient.is_empty() {
        return base.to_string();
    }

    let (path, base_query) = match base.split_once('?') {
        Some((path, query)) => (path, query),
        None => (base, ""),
    };

    let mut params = parse_query(base_query);
    for (key, value) in ambient {
        if !params.iter().any(|(existing, _)| *existing == key) {
            params.push((key, value));
        }
    }

    let joined = params
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{joined}")
}

/// True for destinations that leave the application. These must use a full
/// document navigation, never the in-app router.
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
}

/// Ambient read of the browser's current query string (with leading '?').
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Ambient read of the current query string, parsed.
pub fn current_query_params() -> Vec<(String, String)> {
    parse_query(&current_search())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(url: &str) -> Vec<String> {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        parse_query(query).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn merge_preserves_every_ambient_parameter() {
        let merged = merge_path_with_query(
            "/dashboard",
            "?next=/course&utm_source=newsletter",
        );
        assert_eq!(
            merged,
            "/dashboard?next=/course&utm_source=newsletter"
        );

        let merged_keys = keys(&merged);
        for key in keys("?next=/course&utm_source=newsletter") {
            assert!(merged_keys.contains(&key));
        }
    }

    #[test]
    fn base_parameters_override_ambient_ones() {
        let merged =
            merge_path_with_query("/dashboard?next=/home", "?next=/course");
        assert_eq!(merged, "/dashboard?next=/home");
    }

    #[test]
    fn base_path_is_preserved_for_absolute_urls() {
        let merged = merge_path_with_query(
            "https://other.example.com/welcome?ref=backend",
            "?utm_source=newsletter",
        );
        assert_eq!(
            merged,
            "https://other.example.com/welcome?ref=backend&utm_source=newsletter"
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let search = "?next=/course&utm_source=newsletter";
        let once = merge_path_with_query("/dashboard?tab=overview", search);
        let twice = merge_path_with_query(&once, search);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_search_leaves_the_base_unchanged() {
        assert_eq!(merge_path_with_query("/dashboard", ""), "/dashboard");
        assert_eq!(merge_path_with_query("/dashboard", "?"), "/dashboard");
    }

    #[test]
    fn malformed_pieces_pass_through_best_effort() {
        // Double '=' keeps everything after the first one as the value;
        // valueless keys are carried along.
        let merged = merge_path_with_query("/d", "?a==b&flag&&c=1");
        assert_eq!(merged, "/d?a==b&flag=&c=1");

        let parsed = parse_query("a==b&flag&&c=1");
        assert_eq!(
            parsed,
            vec![
                ("a".to_string(), "=b".to_string()),
                ("flag".to_string(), String::new()),
                ("c".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn absolute_url_detection() {
        assert!(is_absolute_url("https://other.example.com/welcome"));
        assert!(is_absolute_url("http://other.example.com"));
        assert!(is_absolute_url("//cdn.example.com/asset"));
        assert!(!is_absolute_url("/dashboard"));
        assert!(!is_absolute_url("dashboard"));
    }
}
