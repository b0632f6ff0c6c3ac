//! Command-line flags and policy assembly.
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;

use relsweep_model::{HistoryFormat, RetentionPolicy};
use relsweep_observe::LoggerFormat;

/// Deletes helm releases whose deploy label matches the cleanup policy and
/// whose last deploy is older than the age threshold.
#[derive(Debug, Parser)]
#[command(name = "relsweep", version, about)]
pub struct Cli {
    /// Label key a release must carry to be considered for deletion.
    #[arg(long, default_value = "branch")]
    pub label: String,

    /// Label values that protect a release from deletion (comma-separated).
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = ["master", "preprod", "dev", "uat", "develop"].map(String::from)
    )]
    pub ignore_values: Vec<String>,

    /// Minimum age in days before a release may be deleted.
    #[arg(long, default_value_t = 3)]
    pub min_age_days: u32,

    /// Release names that are never deleted (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// File with one excluded release name per line; overrides --excludes.
    #[arg(long)]
    pub exclude_from: Option<PathBuf>,

    /// Namespace to inspect; empty means all namespaces.
    #[arg(long, default_value = "")]
    pub namespace: String,

    /// History encoding reported by helm: structured or table.
    #[arg(long, default_value_t = HistoryFormat::Structured)]
    pub history_format: HistoryFormat,

    /// Per-fetch deadline in seconds; 0 disables the deadline.
    #[arg(long, default_value_t = 120)]
    pub fetch_timeout: u64,

    /// Actually delete; without this flag the command is only printed.
    #[arg(long)]
    pub execute: bool,

    /// Print the column report for the computed plan.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level filter expression (e.g. "info", "relsweep_core=debug,info").
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format: text, json or journald.
    #[arg(long, default_value_t = LoggerFormat::Text)]
    pub log_format: LoggerFormat,
}

impl Cli {
    /// Assemble the retention policy from flags and the optional exclude file.
    ///
    /// When `--exclude-from` is given the file wins over `--excludes`; an
    /// unreadable file is fatal before anything is fetched.
    pub fn retention_policy(&self) -> anyhow::Result<RetentionPolicy> {
        let excludes = match &self.exclude_from {
            Some(path) => read_exclude_file(path)?,
            None => self.excludes.clone(),
        };

        Ok(RetentionPolicy::new(self.label.as_str(), self.min_age_days)
            .with_ignore_values(self.ignore_values.iter().cloned())
            .with_exclude_names(excludes))
    }

    /// Namespace for the inventory source; an empty flag means all.
    pub fn namespace_opt(&self) -> Option<String> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(self.namespace.clone())
        }
    }

    /// Per-fetch deadline, disabled by `--fetch-timeout 0`.
    pub fn fetch_deadline(&self) -> Option<Duration> {
        match self.fetch_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn read_exclude_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading exclude file {}", path.display()))?;
    Ok(body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("argv must parse")
    }

    #[test]
    fn defaults_match_the_documented_policy() {
        let cli = parse(&["relsweep"]);

        assert_eq!(cli.label, "branch");
        assert_eq!(cli.min_age_days, 3);
        assert_eq!(
            cli.ignore_values,
            vec!["master", "preprod", "dev", "uat", "develop"]
        );
        assert!(cli.excludes.is_empty());
        assert_eq!(cli.namespace, "");
        assert_eq!(cli.history_format, HistoryFormat::Structured);
        assert_eq!(cli.fetch_timeout, 120);
        assert!(!cli.execute);
        assert!(!cli.verbose);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.log_format, LoggerFormat::Text);
    }

    #[test]
    fn comma_separated_flags_split_into_sets() {
        let cli = parse(&[
            "relsweep",
            "--ignore-values",
            "main,staging",
            "--excludes",
            "m3db,uk-booking",
        ]);

        assert_eq!(cli.ignore_values, vec!["main", "staging"]);
        assert_eq!(cli.excludes, vec!["m3db", "uk-booking"]);
    }

    #[test]
    fn policy_uses_flag_excludes_without_a_file() {
        let cli = parse(&["relsweep", "--excludes", "m3db", "--label", "team"]);
        let policy = cli.retention_policy().unwrap();

        assert_eq!(policy.label_key, "team");
        assert!(policy.excludes_name("m3db"));
        assert!(policy.ignores_value("master"));
        assert_eq!(policy.min_age_days, 3);
    }

    #[test]
    fn exclude_file_takes_precedence_over_the_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  padded  ").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = parse(&[
            "relsweep",
            "--excludes",
            "from-flag",
            "--exclude-from",
            &path,
        ]);
        let policy = cli.retention_policy().unwrap();

        assert!(policy.excludes_name("from-file"));
        assert!(policy.excludes_name("padded"));
        assert!(!policy.excludes_name("from-flag"));
    }

    #[test]
    fn unreadable_exclude_file_is_fatal() {
        let cli = parse(&["relsweep", "--exclude-from", "/nonexistent/excludes.txt"]);
        assert!(cli.retention_policy().is_err());
    }

    #[test]
    fn empty_namespace_means_all() {
        assert_eq!(parse(&["relsweep"]).namespace_opt(), None);
        assert_eq!(
            parse(&["relsweep", "--namespace", "staging"]).namespace_opt(),
            Some("staging".to_string())
        );
    }

    #[test]
    fn zero_timeout_disables_the_deadline() {
        let cli = parse(&["relsweep", "--fetch-timeout", "0"]);
        assert_eq!(cli.fetch_deadline(), None);
        assert_eq!(
            parse(&["relsweep"]).fetch_deadline(),
            Some(Duration::from_secs(120))
        );
    }

    #[test]
    fn table_format_is_selectable() {
        let cli = parse(&["relsweep", "--history-format", "table"]);
        assert_eq!(cli.history_format, HistoryFormat::Table);
    }
}
