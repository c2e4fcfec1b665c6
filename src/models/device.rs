/// True if `user_agent` contains any of `patterns`, ignoring case.
pub fn is_mobile_user_agent<S: AsRef<str>>(user_agent: &str, patterns: &[S]) -> bool {
    let user_agent = user_agent.to_lowercase();
    patterns
        .iter()
        .map(|pattern| pattern.as_ref().to_lowercase())
        .any(|pattern| !pattern.is_empty() && user_agent.contains(&pattern))
}

/// Read `navigator.userAgent` once and classify the session.
/// An unreadable user agent counts as non-mobile.
pub fn detect_mobile<S: AsRef<str>>(patterns: &[S]) -> bool {
    let Some(window) = web_sys::window() else {
        tracing::warn!("No browser window; treating session as desktop");
        return false;
    };

    match window.navigator().user_agent() {
        Ok(user_agent) => {
            let is_mobile = is_mobile_user_agent(&user_agent, patterns);
            tracing::debug!(is_mobile, "Classified user agent");
            is_mobile
        }
        Err(e) => {
            tracing::warn!("Failed to read user agent: {e:?}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MOBILE_PATTERNS;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn test_mobile_agents_match() {
        assert!(is_mobile_user_agent(IPHONE, &DEFAULT_MOBILE_PATTERNS));
        assert!(is_mobile_user_agent(ANDROID, &DEFAULT_MOBILE_PATTERNS));
    }

    #[test]
    fn test_desktop_agent_does_not_match() {
        assert!(!is_mobile_user_agent(DESKTOP, &DEFAULT_MOBILE_PATTERNS));
    }

    #[test]
    fn test_match_ignores_case() {
        assert!(is_mobile_user_agent("some-IPAD-browser", &DEFAULT_MOBILE_PATTERNS));
        assert!(is_mobile_user_agent("ipod touch", &DEFAULT_MOBILE_PATTERNS));
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert!(!is_mobile_user_agent(DESKTOP, &[""]));
        assert!(!is_mobile_user_agent(DESKTOP, &Vec::<String>::new()));
    }
}
