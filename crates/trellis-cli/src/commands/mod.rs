//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod project;
pub mod resolve;

use trellis_core::domain::UnknownPolicy;

use crate::config::AppConfig;

/// `--fallback` wins; otherwise the configured policy applies.
fn effective_policy(fallback: bool, config: &AppConfig) -> UnknownPolicy {
    if fallback {
        UnknownPolicy::Fallback
    } else {
        config.projection.unknown_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(effective_policy(false, &config), UnknownPolicy::Reject);
        assert_eq!(effective_policy(true, &config), UnknownPolicy::Fallback);
    }

    #[test]
    fn config_applies_without_flag() {
        let mut config = AppConfig::default();
        config.projection.unknown_policy = UnknownPolicy::Fallback;
        assert_eq!(effective_policy(false, &config), UnknownPolicy::Fallback);
    }
}
