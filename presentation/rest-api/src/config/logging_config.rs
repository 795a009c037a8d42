use std::env;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the RUST_LOG env filter (default: "info")
///
/// `LOG_FORMAT=json` switches the output to one JSON object per line.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if use_json(env::var("LOG_FORMAT").ok().as_deref()) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn use_json(format: Option<&str>) -> bool {
    format.is_some_and(|value| value.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_json_only_when_requested() {
        assert!(use_json(Some("json")));
        assert!(use_json(Some("JSON")));
        assert!(!use_json(Some("pretty")));
        assert!(!use_json(None));
    }
}
