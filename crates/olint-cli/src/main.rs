//! olint CLI
//!
//! Manages the persisted settings and rewrites HTML documents so external
//! links open in a new tab.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;

use olint_core::settings::{ACTIVATION_OPTION, PLUGIN_VERSION, TEXT_DOMAIN};
use olint_core::{apply, decide, is_external, rewrite_html, AnchorAttributes, RewriteResult};

mod logging;
mod settings_file;

use settings_file::{read_settings, update_settings};

const DEFAULT_SETTINGS_PATH: &str = "olint-settings.json";

#[derive(Parser)]
#[command(name = "olint")]
#[command(about = "Open links in a new tab: settings and HTML rewriting")]
struct Cli {
    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the activation flag
    Activate,

    /// Remove the activation flag
    Deactivate,

    /// Update rewrite settings
    Configure {
        /// Host of the site, used to decide which links are external
        #[arg(long)]
        site_host: Option<String>,

        /// external-only or all-links
        #[arg(long)]
        scope: Option<String>,

        /// Class exempting an anchor from rewriting (repeatable)
        #[arg(long)]
        exclude_class: Vec<String>,

        /// Drop all excluded classes before adding new ones
        #[arg(long)]
        clear_excluded: bool,
    },

    /// Print the settings and the resolved configuration
    Show,

    /// Decide a single link
    Check {
        #[arg(long)]
        href: Option<String>,

        #[arg(long)]
        class: Option<String>,

        #[arg(long)]
        rel: Option<String>,

        #[arg(long)]
        target: Option<String>,
    },

    /// Rewrite the links of an HTML file
    Rewrite {
        /// Input HTML file
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Plugin version and text domain
    Info,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    let result = match cli.command {
        Commands::Activate => cmd_activate(&cli.settings),
        Commands::Deactivate => cmd_deactivate(&cli.settings),
        Commands::Configure {
            site_host,
            scope,
            exclude_class,
            clear_excluded,
        } => cmd_configure(&cli.settings, site_host, scope, exclude_class, clear_excluded),
        Commands::Show => cmd_show(&cli.settings),
        Commands::Check {
            href,
            class,
            rel,
            target,
        } => cmd_check(&cli.settings, href, class, rel, target),
        Commands::Rewrite { input, output } => cmd_rewrite(&cli.settings, &input, output.as_deref()),
        Commands::Info => cmd_info(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_activate(path: &Path) -> Result<(), String> {
    update_settings(path, |settings| {
        settings.activate();
        Ok(())
    })?;
    log::info!("set {} in '{}'", ACTIVATION_OPTION, path.display());
    println!("Activated ({})", path.display());
    Ok(())
}

fn cmd_deactivate(path: &Path) -> Result<(), String> {
    update_settings(path, |settings| {
        settings.deactivate();
        Ok(())
    })?;
    log::info!("removed {} from '{}'", ACTIVATION_OPTION, path.display());
    println!("Deactivated ({})", path.display());
    Ok(())
}

fn cmd_configure(
    path: &Path,
    site_host: Option<String>,
    scope: Option<String>,
    exclude_class: Vec<String>,
    clear_excluded: bool,
) -> Result<(), String> {
    let settings = update_settings(path, |settings| {
        if let Some(host) = site_host {
            settings.site_host = host;
        }
        if let Some(scope) = scope {
            settings.set_scope(&scope).map_err(|e| e.to_string())?;
        }
        if clear_excluded {
            settings.excluded_classes.clear();
        }
        settings.excluded_classes.extend(exclude_class);
        Ok(())
    })?;

    println!("Updated '{}'", path.display());
    println!("  Site host:   {}", display_or_none(&settings.site_host));
    println!("  Scope:       {}", settings.scope.as_str());
    println!("  Excluded:    {}", settings.excluded_classes.len());
    Ok(())
}

fn cmd_show(path: &Path) -> Result<(), String> {
    let settings = read_settings(path)?;
    let config = settings.resolve();
    let json = settings.to_json_pretty().map_err(|e| e.to_string())?;

    println!("Settings: {}", path.display());
    println!("{json}");
    println!();
    println!("Resolved configuration:");
    println!("  Enabled:     {}", config.enabled);
    println!("  Scope:       {}", config.scope.as_str());
    println!("  Site host:   {}", display_or_none(&config.site_host));
    let mut excluded: Vec<_> = config.excluded_classes.iter().map(String::as_str).collect();
    excluded.sort_unstable();
    println!("  Excluded:    {}", excluded.join(", "));
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    href: Option<String>,
    enabled: bool,
    external: bool,
    decision: &'static str,
    target: Option<String>,
    rel: Option<String>,
    rel_additions: Vec<&'static str>,
}

fn cmd_check(
    path: &Path,
    href: Option<String>,
    class: Option<String>,
    rel: Option<String>,
    target: Option<String>,
) -> Result<(), String> {
    let config = read_settings(path)?.resolve();

    let mut anchor = AnchorAttributes::new();
    for (name, value) in [("href", href), ("class", class), ("rel", rel), ("target", target)] {
        if let Some(value) = value {
            anchor.set(name, value);
        }
    }

    let result = decide(&anchor, &config);
    let mut rewritten = anchor.clone();
    apply(&mut rewritten, &result);

    let report = CheckReport {
        href: anchor.href().map(str::to_string),
        enabled: config.enabled,
        external: anchor.href().is_some_and(|h| is_external(h, &config)),
        decision: match result {
            RewriteResult::NoChange => "no_change",
            RewriteResult::Mutate { .. } => "mutate",
        },
        target: rewritten.target().map(str::to_string),
        rel: rewritten.rel().map(str::to_string),
        rel_additions: result.rel_addition_names(),
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
    println!("{json}");
    Ok(())
}

fn cmd_rewrite(path: &Path, input: &str, output: Option<&str>) -> Result<(), String> {
    let config = read_settings(path)?.resolve();
    if !config.enabled {
        log::warn!("{} is not set; links are left unchanged", ACTIVATION_OPTION);
    }

    let html = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read '{}': {}", input, e))?;

    let start = Instant::now();
    let outcome = rewrite_html(&html, &config);
    let elapsed = start.elapsed();

    match output {
        Some(output) => fs::write(output, &outcome.html)
            .map_err(|e| format!("Failed to write '{}': {}", output, e))?,
        None => print!("{}", outcome.html),
    }

    eprintln!("Rewrote '{}'", input);
    eprintln!("  Anchors:     {}", outcome.stats.anchors);
    eprintln!("  Rewritten:   {}", outcome.stats.rewritten);
    eprintln!("  Unchanged:   {}", outcome.stats.unchanged);
    eprintln!("  Time:        {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}

fn cmd_info() -> Result<(), String> {
    println!("Open Links In New Tab");
    println!("  Version:     {}", PLUGIN_VERSION);
    println!("  Text domain: {}", TEXT_DOMAIN);
    println!("  Option:      {}", ACTIVATION_OPTION);
    Ok(())
}

fn display_or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}
