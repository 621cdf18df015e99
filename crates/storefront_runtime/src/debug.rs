//! Debug-mode detection from the page URL.
//!
//! `?debug` (bare or `debug=true`) turns on verbose transition logging in the
//! store provider.

/// Parses the debug flag from a query string.
pub fn parse_debug_from_query(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .any(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            key == "debug" && matches!(value.trim(), "" | "1" | "true")
        })
}

/// Whether the current URL requests debug mode. Always false off-browser.
pub fn current_debug_flag() -> bool {
    storefront_host_web::location_query()
        .map(|query| parse_debug_from_query(&query))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_flag_and_truthy_values_enable_debug() {
        assert!(parse_debug_from_query("?debug"));
        assert!(parse_debug_from_query("?debug=true"));
        assert!(parse_debug_from_query("?utm=x&debug=1"));
    }

    #[test]
    fn absent_or_false_values_stay_disabled() {
        assert!(!parse_debug_from_query(""));
        assert!(!parse_debug_from_query("?debug=false"));
        assert!(!parse_debug_from_query("?debugger"));
        assert!(!parse_debug_from_query("?utm=debug"));
    }
}
