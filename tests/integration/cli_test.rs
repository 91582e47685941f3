//! Smoke tests that run the compiled `stratos` binary.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_stratos_binary() -> PathBuf {
    // Cargo exposes the binary path to integration tests of this package.
    if let Some(path) = option_env!("CARGO_BIN_EXE_stratos") {
        return PathBuf::from(path);
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace_root = PathBuf::from(&manifest_dir).join("..");
    let binary_path = workspace_root.join("target").join("debug").join("stratos");

    if binary_path.exists() {
        return binary_path;
    }

    PathBuf::from("target/debug/stratos")
}

fn run_stratos(args: &[&str]) -> Output {
    Command::new(get_stratos_binary())
        .args(args)
        .output()
        .expect("Failed to execute stratos command")
}

fn run_stratos_with_env(args: &[&str], env_vars: Vec<(&str, &str)>) -> Output {
    let mut cmd = Command::new(get_stratos_binary());
    cmd.args(args);
    for (key, value) in env_vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute stratos command")
}

fn run_stratos_in_dir(args: &[&str], dir: &std::path::Path) -> Output {
    Command::new(get_stratos_binary())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute stratos command")
}

fn output_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_stratos(&["version"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version command should succeed");
        assert!(stdout.contains("stratos"));
        assert!(stdout.contains("0.1.0"));
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_stratos(&["version", "--detailed"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Version:"));
        assert!(stdout.contains("Strategy Templates:"));
    }
}

mod catalog_command_tests {
    use super::*;

    #[test]
    fn test_venues_text_output() {
        let output = run_stratos(&["venues"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Uniswap V3"));
        assert!(stdout.contains("dYdX"));
        assert!(stdout.contains("Total: 5 venues"));
    }

    #[test]
    fn test_venues_json_output_is_valid() {
        let output = run_stratos(&["venues", "--format", "json"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        let parsed: serde_json::Value =
            serde_json::from_str(&stdout).expect("venues --format json should emit valid JSON");
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(5));
    }

    #[test]
    fn test_strategies_lists_templates() {
        let output = run_stratos(&["strategies"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Delta-Neutral Arbitrage"));
        assert!(stdout.contains("Options Wheel"));
    }

    #[test]
    fn test_staking_lists_pools() {
        let output = run_stratos(&["staking"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("STRATOS Native Staking"));
        assert!(stdout.contains("24.5%"));
    }

    #[test]
    fn test_pricing_defaults_to_calls() {
        let output = run_stratos(&["pricing"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("ETH"));
        assert!(stdout.contains("$5000"));
        assert!(stdout.contains("+0.8643"));
    }

    #[test]
    fn test_pricing_puts_side() {
        let output = run_stratos(&["pricing", "--side", "puts"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("-0.1357"));
    }

    #[test]
    fn test_pricing_rejects_unknown_side() {
        let output = run_stratos(&["pricing", "--side", "straddles"]);
        assert!(!output.status.success());
    }
}

mod agents_command_tests {
    use super::*;

    #[test]
    fn test_agents_list_default() {
        let output = run_stratos(&["agents", "list"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("MagicTrend"));
        assert!(stdout.contains("Total: 5 agents"));
    }

    #[test]
    fn test_agents_list_search_filter() {
        let output = run_stratos(&["agents", "list", "--search", "sphinx"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Sphinx"));
        assert!(stdout.contains("Total: 1 agents"));
    }

    #[test]
    fn test_agents_show_unknown_name_fails() {
        let output = run_stratos(&["agents", "show", "NoSuchAgent"]);
        assert!(!output.status.success());
    }
}

mod build_command_tests {
    use super::*;

    #[test]
    fn test_build_once_delta_neutral() {
        let output = run_stratos(&["build", "once", "delta neutral ETH/USDC please"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("delta-neutral"));
        assert!(stdout.contains("95%"));
    }

    #[test]
    fn test_build_once_json_output() {
        let output = run_stratos(&["build", "once", "arbitrage bot", "--format", "json"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        let parsed: serde_json::Value =
            serde_json::from_str(&stdout).expect("build once --format json should emit JSON");
        assert_eq!(parsed["strategy"], "arbitrage");
        assert_eq!(parsed["confidence"], 92);
    }

    #[test]
    fn test_build_once_empty_message_is_graceful() {
        let output = run_stratos(&["build", "once", "   "]);
        assert!(output.status.success());
        assert!(output_to_string(&output).contains("empty"));
    }
}

mod config_wiring_tests {
    use super::*;

    // A zero base delay fails config validation, so a failing exit proves
    // the override reached the scheduler configuration.
    #[test]
    fn test_env_override_reaches_builder_config() {
        let output = run_stratos_with_env(
            &["build", "once", "arbitrage bot"],
            vec![("STRATOS_RESPONSE_BASE_DELAY_MS", "0")],
        );

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("response_base_delay_ms"));
    }

    #[test]
    fn test_stratos_toml_in_cwd_reaches_builder_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stratos.toml"),
            "[builder]\nresponse_base_delay_ms = 0\n",
        )
        .unwrap();

        let output = run_stratos_in_dir(&["build", "once", "arbitrage bot"], dir.path());

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("response_base_delay_ms"));
    }

    #[test]
    fn test_valid_stratos_toml_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stratos.toml"),
            "[builder]\nresponse_base_delay_ms = 1\nresponse_jitter_ms = 0\n",
        )
        .unwrap();

        let output = run_stratos_in_dir(&["build", "once", "arbitrage bot"], dir.path());

        assert!(output.status.success());
        assert!(output_to_string(&output).contains("arbitrage"));
    }
}
