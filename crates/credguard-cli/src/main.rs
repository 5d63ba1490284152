//! CLI entry point for credguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! Evaluation logic lives in `credguard-domain`, policy resolution in `credguard-settings`.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use credguard_domain::{evaluate, Monitor};
use credguard_settings::{Overrides, ResolvedPolicy};
use credguard_types::{ReportEnvelope, ToolMeta, UnmetRule, SCHEMA_REPORT_V1};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use time::OffsetDateTime;

mod messages;

#[derive(Parser, Debug)]
#[command(
    name = "credguard",
    version,
    about = "Credential policy validation engine"
)]
struct Cli {
    /// Path to credguard config TOML. A missing file means defaults apply.
    #[arg(long, default_value = "credguard.toml")]
    config: PathBuf,

    /// Override profile (standard|minimal).
    #[arg(long)]
    profile: Option<String>,

    /// Override the minimum length requirement.
    #[arg(long)]
    min_length: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single candidate and report unmet rules.
    Check {
        /// The candidate to evaluate. Prefer --stdin to keep secrets out of
        /// shell history and process listings.
        candidate: Option<String>,

        /// Read the candidate from the first line of stdin.
        #[arg(long, conflicts_with = "candidate")]
        stdin: bool,

        /// Output format.
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Read candidates line by line from stdin and print validity notifications.
    Watch,

    /// Explain a rule id or description key.
    Explain {
        /// The rule id (e.g. "credential.special") or description key to explain.
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Check {
            ref candidate,
            stdin,
            format,
        } => cmd_check(&cli, candidate.clone(), stdin, format),
        Commands::Watch => cmd_watch(&cli),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Load the config file (missing file is allowed) and resolve the policy.
fn resolve_policy(cli: &Cli) -> anyhow::Result<ResolvedPolicy> {
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

    let cfg = if cfg_text.trim().is_empty() {
        credguard_settings::CredguardConfigV1::default()
    } else {
        credguard_settings::parse_config_toml(&cfg_text).context("parse config")?
    };

    let overrides = Overrides {
        profile: cli.profile.clone(),
        min_length: cli.min_length,
    };

    credguard_settings::resolve_policy(cfg, overrides).context("resolve policy")
}

fn cmd_check(
    cli: &Cli,
    candidate: Option<String>,
    stdin: bool,
    format: Format,
) -> anyhow::Result<ExitCode> {
    let policy = resolve_policy(cli)?;

    let candidate = match (candidate, stdin) {
        (Some(c), _) => c,
        (None, true) => read_line_from_stdin()?,
        (None, false) => anyhow::bail!("no candidate given (pass one as an argument or --stdin)"),
    };

    let evaluation = evaluate(&candidate, &policy.rules);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Json => {
            let report = ReportEnvelope {
                schema: SCHEMA_REPORT_V1.to_string(),
                tool: ToolMeta {
                    name: "credguard".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                evaluated_at: OffsetDateTime::now_utc(),
                profile: policy.profile.clone(),
                valid: evaluation.is_valid(),
                unmet: evaluation.unmet.clone(),
            };
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            writeln!(out, "{json}").context("write report")?;
        }
        Format::Text => {
            render_text(&mut out, &evaluation.unmet, evaluation.is_valid())
                .context("write report")?;
        }
    }

    Ok(validity_exit_code(evaluation.is_valid()))
}

fn cmd_watch(cli: &Cli) -> anyhow::Result<ExitCode> {
    let policy = resolve_policy(cli)?;

    let mut monitor = Monitor::with_policy(policy.rules, policy.notify);
    monitor.on_validity_change(|valid| {
        println!("{}", if valid { "valid" } else { "invalid" });
    });

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let candidate = line.context("read candidate")?;
        monitor.update(&candidate);
    }

    Ok(validity_exit_code(monitor.is_valid()))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<ExitCode> {
    match messages::lookup_message(identifier) {
        Some(message) => {
            print!("{}", messages::format_message(identifier, &message));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprint!("{}", messages::format_not_found(identifier));
            Ok(ExitCode::from(2))
        }
    }
}

fn render_text(out: &mut impl Write, unmet: &[UnmetRule], valid: bool) -> std::io::Result<()> {
    if valid {
        writeln!(out, "candidate meets the policy")?;
        return Ok(());
    }
    writeln!(out, "candidate does not meet the policy; requires:")?;
    for rule in unmet {
        match messages::lookup_message(&rule.description) {
            Some(message) => writeln!(out, "  - {}", message.requirement)?,
            // Unresolvable keys still surface the rule rather than vanishing.
            None => writeln!(out, "  - {}", rule.id)?,
        }
    }
    Ok(())
}

fn read_line_from_stdin() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read candidate from stdin")?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn validity_exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
