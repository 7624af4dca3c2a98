use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use football_standings::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only edits or prints configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_url.is_some()
        || args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Applies runtime flags on top of the loaded configuration.
/// `--offline` can only force offline mode on; it never turns it off.
pub fn apply_runtime_overrides(args: &Args, config: &mut Config) {
    if args.offline {
        config.offline_mode = true;
    }
    if let Some(listen) = &args.listen {
        config.listen_addr = listen.clone();
    }
}

/// Football standings service
///
/// Serves countries, leagues, teams and league tables from an upstream
/// football statistics API, caching results and falling back to a small
/// built-in data set when offline mode is enabled.
///
/// Offline mode can be toggled at runtime:
/// `POST /standings/offline-mode?enabled=true`
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Start with offline mode enabled regardless of configuration
    #[arg(long = "offline", help_heading = "Server")]
    pub offline: bool,

    /// Address to listen on, e.g. 127.0.0.1:8080. Overrides the configured value.
    #[arg(long = "listen", value_name = "ADDR", help_heading = "Server")]
    pub listen: Option<String>,

    /// Update the upstream API base URL in config
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update the upstream API key in config
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path for this run only
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Logging")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_start_server() {
        let args = Args::try_parse_from(["football_standings"]).unwrap();
        assert!(!args.offline);
        assert!(args.listen.is_none());
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_runtime_flags() {
        let args = Args::try_parse_from([
            "football_standings",
            "--offline",
            "--listen",
            "127.0.0.1:9000",
            "--log-file",
            "/tmp/fs.log",
        ])
        .unwrap();

        assert!(args.offline);
        assert_eq!(args.listen.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(args.log_file.as_deref(), Some("/tmp/fs.log"));
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_config_operations_detected() {
        for argv in [
            vec!["football_standings", "--list-config"],
            vec!["football_standings", "--set-api-url", "https://example.com"],
            vec!["football_standings", "--set-api-key", "k"],
            vec!["football_standings", "--set-log-file", "/tmp/x.log"],
            vec!["football_standings", "--clear-log-file"],
        ] {
            let args = Args::try_parse_from(argv).unwrap();
            assert!(is_config_operation(&args));
        }
    }

    #[test]
    fn test_runtime_overrides_applied_to_config() {
        let args =
            Args::try_parse_from(["football_standings", "--offline", "--listen", "127.0.0.1:1"])
                .unwrap();
        let mut config = Config::default();

        apply_runtime_overrides(&args, &mut config);

        assert!(config.offline_mode);
        assert_eq!(config.listen_addr, "127.0.0.1:1");
    }

    #[test]
    fn test_absent_offline_flag_keeps_configured_value() {
        let args = Args::try_parse_from(["football_standings"]).unwrap();
        let mut config = Config {
            offline_mode: true,
            ..Default::default()
        };

        apply_runtime_overrides(&args, &mut config);

        assert!(config.offline_mode);
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
