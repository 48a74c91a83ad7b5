//! CLI entry point for input-mask
//!
//! Provides command-line interface for formatting values through a mask,
//! replaying keystrokes against a masked field, and listing profiles.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use input_mask::binding::{EditEvent, MaskController, TextField};
use input_mask::config::{load_profiles, profiles::parse_predicate, resolve_profile_path};
use input_mask::core::SlotKind;
use input_mask::{Mask, MaskDefinition, MaskOptions, MaskResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `input_mask=trace`
const LOG_ENV: &str = "INPUT_MASK_LOG";

#[derive(Parser)]
#[command(name = "input-mask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to mask profile file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one or more values
    Format {
        #[command(flatten)]
        mask: MaskArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Also print the compiled slot layout
        #[arg(long)]
        slots: bool,

        /// Raw values to format
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Replay keystrokes against a masked field
    Type {
        #[command(flatten)]
        mask: MaskArgs,

        /// Character standing for a backspace keystroke
        #[arg(short, long, default_value_t = '<')]
        backspace: char,

        /// Keys to type, in order
        keys: String,
    },

    /// List profiles from the config file
    List,
}

/// How to obtain the mask for a command
#[derive(Args)]
struct MaskArgs {
    /// Mask pattern, e.g. "(000) 000-0000"
    #[arg(short, long, required_unless_present = "profile", conflicts_with = "profile")]
    mask: Option<String>,

    /// Named profile from the config file
    #[arg(short, long)]
    profile: Option<String>,

    /// Extra placeholder definition (repeatable)
    #[arg(short = 'd', long = "define", value_name = "KEY=REGEX", value_parser = parse_define)]
    definitions: Vec<(char, String)>,

    /// Report rejected characters as warnings
    #[arg(long)]
    show_errors: bool,
}

#[derive(Serialize)]
struct FormatRecord<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: MaskResult,
}

#[derive(Serialize)]
struct FormatReport<'a> {
    mask: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    slots: Option<Vec<SlotKind>>,
    results: Vec<FormatRecord<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Format {
            mask,
            json,
            slots,
            values,
        } => format_values(&mask, config, json, slots, &values)?,
        Commands::Type {
            mask,
            backspace,
            keys,
        } => replay_keys(&mask, config, backspace, &keys)?,
        Commands::List => list_profiles(config)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "input_mask=debug"
    } else {
        "input_mask=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Parse a `--define` argument of the form `KEY=REGEX`
fn parse_define(arg: &str) -> Result<(char, String), String> {
    let (key, source) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=REGEX, got '{}'", arg))?;

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) if !source.is_empty() => Ok((key, source.to_string())),
        _ => Err(format!(
            "expected a single-character key and a non-empty pattern, got '{}'",
            arg
        )),
    }
}

/// Build the mask selected by `--mask` or `--profile`
fn build_mask(args: &MaskArgs, config: Option<&Path>) -> anyhow::Result<Mask> {
    let mut options = MaskOptions::new().show_error(args.show_errors);
    for (key, source) in &args.definitions {
        let predicate = parse_predicate(source)
            .with_context(|| format!("Invalid definition for '{}'", key))?;
        options = options.definition(*key, MaskDefinition::new(predicate));
    }

    match (&args.mask, &args.profile) {
        (Some(pattern), _) => Ok(Mask::with_options(pattern, options)?),
        (None, Some(name)) => {
            let profiles = load_profiles(config)?;
            Ok(profiles.mask_with(name, options)?)
        }
        (None, None) => anyhow::bail!("Either --mask or --profile is required"),
    }
}

/// Format each value independently
fn format_values(
    args: &MaskArgs,
    config: Option<&Path>,
    json: bool,
    slots: bool,
    values: &[String],
) -> anyhow::Result<()> {
    let mut mask = build_mask(args, config)?;

    let mut records = Vec::with_capacity(values.len());
    for value in values {
        mask.reset();
        let result = mask.mask_with_caret(value, None);
        records.push(FormatRecord {
            input: value,
            result,
        });
    }

    if json {
        let report = FormatReport {
            mask: mask.pattern().source(),
            slots: slots.then(|| mask.pattern().describe()),
            results: records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if slots {
        print_slots(&mask.pattern().describe());
    }

    for record in &records {
        let status = if record.result.complete {
            "✓".green()
        } else {
            "…".yellow()
        };
        println!(
            "{} {} → {}",
            status,
            record.input.dimmed(),
            record.result.formatted.cyan().bold()
        );
    }

    Ok(())
}

/// Print one line per compiled slot
fn print_slots(slots: &[SlotKind]) {
    for (index, slot) in slots.iter().enumerate() {
        let line = match slot {
            SlotKind::Literal { char } => format!("literal     '{}'", char).dimmed(),
            SlotKind::Placeholder {
                key,
                class,
                optional,
            } => {
                let optional = if *optional { " (optional)" } else { "" };
                format!("placeholder '{}' {}{}", key, class, optional).cyan()
            }
        };
        println!("  {} {}", format!("{:>2}.", index).dimmed(), line);
    }
    println!();
}

/// Type `keys` one at a time, masking after every keystroke
fn replay_keys(
    args: &MaskArgs,
    config: Option<&Path>,
    backspace: char,
    keys: &str,
) -> anyhow::Result<()> {
    let mask = build_mask(args, config)?;
    println!(
        "{} Mask: {}\n",
        "→".cyan(),
        mask.pattern().source().bold()
    );

    let mut controller = MaskController::new(mask);
    let mut field = TextField::new();

    for key in keys.chars() {
        let label = if key == backspace {
            field.backspace();
            "⌫".to_string()
        } else {
            field.insert(key);
            key.to_string()
        };

        controller.handle(EditEvent::Input, &mut field);

        println!(
            "  {} {}  {}",
            format!("{:>2}", label).magenta(),
            render_caret(&field),
            format!("caret {}", field.caret()).dimmed()
        );
    }

    let complete = field.len() == controller.mask().pattern().len();
    if complete {
        println!("\n{} Complete: {}", "✓".green().bold(), field.value().bold());
    } else {
        println!("\n{} Incomplete: {}", "…".yellow(), field.value());
    }

    Ok(())
}

/// Show the value with a `|` where the caret sits
fn render_caret(field: &TextField) -> String {
    let value: Vec<char> = field.value().chars().collect();
    let (before, after) = value.split_at(field.caret().min(value.len()));
    format!(
        "{}{}{}",
        before.iter().collect::<String>(),
        "|".yellow().bold(),
        after.iter().collect::<String>()
    )
}

/// List all profiles in the config file
fn list_profiles(config: Option<&Path>) -> anyhow::Result<()> {
    let path = resolve_profile_path(config)?;
    let profiles = load_profiles(Some(path.as_path()))
        .with_context(|| format!("Failed to load profiles from {}", path.display()))?;

    println!("{}", format!("Profiles from: {}\n", path.display()).bold());

    for (key, definition) in profiles.definitions().iter() {
        let optional = if definition.optional { " (optional)" } else { "" };
        println!(
            "  {} {} = {}{}",
            "define".dimmed(),
            key.to_string().magenta().bold(),
            definition.predicate,
            optional.dimmed()
        );
    }
    if !profiles.definitions().is_empty() {
        println!();
    }

    for profile in profiles.profiles() {
        println!(
            "{} → {}",
            profile.name.cyan().bold(),
            profile.pattern.green()
        );
    }

    println!(
        "\n{} Total: {} profile{}",
        "✓".green(),
        profiles.profiles().len(),
        if profiles.profiles().len() == 1 { "" } else { "s" }
    );

    Ok(())
}
