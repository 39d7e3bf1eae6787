//! Environment-variable toggles for diagnostic call sites.

/// Checks if an environment variable is set to a true-ish value.
///
/// `true`, `1`, `yes` and `on` count, ASCII case-insensitively. An unset
/// variable (or one holding non-Unicode data) is false.
///
/// # Examples
///
/// ```
/// use conn_string::env::env_bool;
///
/// std::env::set_var("TRACE_FRAMES", "On");
/// assert!(env_bool("TRACE_FRAMES"));
/// std::env::set_var("TRACE_FRAMES", "0");
/// assert!(!env_bool("TRACE_FRAMES"));
/// ```
#[must_use]
pub fn env_bool(name: &str) -> bool {
    std::env::var(name).map_or(false, |v| {
        ["true", "1", "yes", "on"]
            .iter()
            .any(|&t| v.eq_ignore_ascii_case(t))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_values() {
        // Each test process is shared; use a variable name unique to this
        // test to avoid races with other env tests.
        let name = "CONN_STRING_TEST_ENV_BOOL";
        for v in ["true", "TRUE", "1", "yes", "On"] {
            std::env::set_var(name, v);
            assert!(env_bool(name), "{:?} should be true", v);
        }
        for v in ["", "0", "false", "off", "2", "truthy"] {
            std::env::set_var(name, v);
            assert!(!env_bool(name), "{:?} should be false", v);
        }
        std::env::remove_var(name);
        assert!(!env_bool(name));
    }
}
