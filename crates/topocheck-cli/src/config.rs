mod defaults;

use crate::cli::{CheckArgs, UnknownTypesFlags};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use topocheck::engine::config::{self as core_config, UnknownTypePolicy};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCheckSection {
    #[serde(rename = "unknown-types")]
    unknown_types: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputSection {
    progress: Option<bool>,
}

/// The configuration file as written, before CLI overrides and defaults are applied.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialCheckConfig {
    #[serde(rename = "allow-list")]
    allow_list: Option<PathBuf>,
    check: Option<PartialCheckSection>,
    output: Option<PartialOutputSection>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Everything the `check` command needs, fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSettings {
    pub input: PathBuf,
    pub allow_list: PathBuf,
    pub check: core_config::CheckConfig,
    pub show_progress: bool,
}

impl PartialCheckConfig {
    /// Loads a config file. Relative paths inside it are resolved against the
    /// directory that contains the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn merge_with_cli(mut self, args: &CheckArgs) -> Result<CheckSettings> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let allow_list = match (&args.allow_list, &self.allow_list) {
            (Some(cli_path), _) => cli_path.clone(),
            (None, Some(file_path)) => self.resolve_relative(file_path),
            (None, None) => {
                return Err(CliError::Config(
                    "An allow-list is required either in the config file (`allow-list`) or via --allow-list.".to_string(),
                ));
            }
        };

        let file_policy = self
            .check
            .take()
            .unwrap_or_default()
            .unknown_types
            .map(|value| parse_policy("check.unknown-types", &value))
            .transpose()?;
        let policy = Self::merge_unknown_types(args.unknown_types, file_policy)
            .unwrap_or(defaults.unknown_type_policy);

        let show_progress = !args.no_progress
            && self
                .output
                .take()
                .unwrap_or_default()
                .progress
                .unwrap_or(defaults.show_progress);

        let check = core_config::CheckConfigBuilder::new()
            .unknown_type_policy(policy)
            .build();

        Ok(CheckSettings {
            input: args.input.clone(),
            allow_list,
            check,
            show_progress,
        })
    }

    fn resolve_relative(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn merge_unknown_types(
        cli_flags: UnknownTypesFlags,
        file_val: Option<UnknownTypePolicy>,
    ) -> Option<UnknownTypePolicy> {
        if cli_flags.strict {
            Some(UnknownTypePolicy::Reject)
        } else if cli_flags.permissive {
            Some(UnknownTypePolicy::Accept)
        } else {
            file_val
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key.trim() {
                "allow-list" => {
                    // Values given on the command line are relative to the working directory.
                    self.allow_list = Some(std::env::current_dir()?.join(value_str));
                }
                "check.unknown-types" => {
                    parse_policy(key, value_str)?;
                    self.check
                        .get_or_insert_with(Default::default)
                        .unknown_types = Some(value_str.to_string());
                }
                "output.progress" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .progress = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_policy(key: &str, value: &str) -> Result<UnknownTypePolicy> {
    value
        .parse()
        .map_err(|e| CliError::Config(format!("{}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn check_args(extra: &[&str]) -> CheckArgs {
        let mut args = vec!["topocheck", "check", "-i", "topology.data"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Check(args) => args,
            other => panic!("Expected 'check' subcommand, got {other:?}"),
        }
    }

    #[test]
    fn file_values_are_used_and_paths_resolved_against_config_dir() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "topocheck.toml",
            r#"
            allow-list = "rules/allowed.toml"

            [check]
            unknown-types = "reject"

            [output]
            progress = false
            "#,
        );

        let settings = PartialCheckConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&check_args(&[]))
            .unwrap();

        assert_eq!(settings.input, PathBuf::from("topology.data"));
        assert_eq!(settings.allow_list, dir.path().join("rules/allowed.toml"));
        assert_eq!(
            settings.check.unknown_type_policy,
            UnknownTypePolicy::Reject
        );
        assert!(!settings.show_progress);
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "topocheck.toml",
            r#"
            allow-list = "/data/allowed.toml"

            [check]
            unknown-types = "reject"
            "#,
        );

        let settings = PartialCheckConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&check_args(&["-a", "other.toml", "--permissive"]))
            .unwrap();

        assert_eq!(settings.allow_list, PathBuf::from("other.toml"));
        assert_eq!(
            settings.check.unknown_type_policy,
            UnknownTypePolicy::Accept
        );
        assert!(settings.show_progress);
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let settings = PartialCheckConfig::default()
            .merge_with_cli(&check_args(&["-a", "allowed.toml"]))
            .unwrap();
        assert_eq!(settings.check, core_config::CheckConfig::default());
        assert!(settings.show_progress);
    }

    #[test]
    fn missing_allow_list_is_a_config_error() {
        let err = PartialCheckConfig::default()
            .merge_with_cli(&check_args(&[]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn set_values_override_file_but_not_flags() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "topocheck.toml",
            "allow-list = \"allowed.toml\"\n[check]\nunknown-types = \"accept\"\n",
        );

        let settings = PartialCheckConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&check_args(&[
                "-S",
                "check.unknown-types=reject",
                "-S",
                "output.progress=false",
            ]))
            .unwrap();
        assert_eq!(
            settings.check.unknown_type_policy,
            UnknownTypePolicy::Reject
        );
        assert!(!settings.show_progress);

        let settings = PartialCheckConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&check_args(&["-S", "check.unknown-types=reject", "--permissive"]))
            .unwrap();
        assert_eq!(
            settings.check.unknown_type_policy,
            UnknownTypePolicy::Accept
        );
    }

    #[test]
    fn no_progress_flag_wins_over_file() {
        let settings = PartialCheckConfig::default()
            .merge_with_cli(&check_args(&["-a", "allowed.toml", "--no-progress"]))
            .unwrap();
        assert!(!settings.show_progress);
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in [
            "check.unknown-types",
            "check.unknown-types=sometimes",
            "output.progress=maybe",
            "check.threads=4",
        ] {
            let err = PartialCheckConfig::default()
                .merge_with_cli(&check_args(&["-a", "allowed.toml", "-S", bad]))
                .unwrap_err();
            assert!(matches!(err, CliError::Config(_)), "accepted '{}'", bad);
        }
    }

    #[test]
    fn invalid_policy_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "topocheck.toml",
            "allow-list = \"allowed.toml\"\n[check]\nunknown-types = \"lenient\"\n",
        );
        let err = PartialCheckConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&check_args(&[]))
            .unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn unknown_config_keys_fail_to_parse() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(&dir, "topocheck.toml", "[check]\nstrictness = 1\n");
        let err = PartialCheckConfig::from_file(&config_path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }
}
