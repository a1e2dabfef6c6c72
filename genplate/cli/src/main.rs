//! CLI for rendering code templates.
//!
//! ## Usage
//!
//! ```bash
//! # Render with a JSON data file
//! genplate model.rs.hbs src/model.rs model.json
//!
//! # Render with key=value definitions
//! genplate model.rs.hbs src/model.rs name=order_entry table=orders
//!
//! # Read JSON data from stdin
//! cat model.json | genplate model.rs.hbs src/model.rs -
//!
//! # Print the result instead of writing it
//! genplate --dry-run model.rs.hbs src/model.rs name=order_entry
//!
//! # Generate shell completions
//! source <(COMPLETE=bash genplate)
//! ```

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueHint};
use clap_complete::Shell;
use color_eyre::eyre::{Context, Result, bail};
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use genplate::{RenderOptions, TemplateData, TemplateFunctions, generate};

/// Code generation with Handlebars templates and identifier case helpers
#[derive(Parser, Debug)]
#[command(name = "genplate", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Handlebars template to render
    #[arg(value_name = "TEMPLATE", value_hint = ValueHint::FilePath)]
    template: PathBuf,

    /// Output file, replaced only when rendering succeeds
    #[arg(value_name = "OUT_FILE", value_hint = ValueHint::FilePath)]
    out_file: PathBuf,

    /// A JSON data file ("-" for stdin), or one or more key=value pairs
    ///
    /// Any argument containing `=` is a key=value pair, so a JSON file whose
    /// path contains `=` must be renamed or piped through stdin with "-".
    #[arg(value_name = "DATA", required = true, num_args = 1..)]
    data: Vec<String>,

    /// Fail when the template references a field missing from the data
    #[arg(long)]
    strict: bool,

    /// Print the rendered output instead of writing OUT_FILE
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict,
            dry_run: self.dry_run,
        }
    }
}

const AFTER_HELP: &str = "\
TEMPLATE HELPERS:
  {{Pluralize name}}    category -> categories, bus -> buses, cat -> cats
  {{CamelCase name}}    user_profile / UserProfile -> userProfile
  {{PascalCase name}}   user_profile / userProfile -> UserProfile
  {{SnakeCase name}}    userProfile / UserProfile -> user_profile

  Helpers nest: {{SnakeCase (Pluralize name)}}
  Identifiers with digits or symbols cannot be converted and abort the render.

DATA:
  A single DATA argument without '=' is a JSON file path; anything with '='
  is a key=value pair. For a JSON path containing '=', pipe it via stdin:
    genplate model.rs.hbs src/model.rs - < 'v=2/model.json'

SHELL COMPLETIONS:
  Bash (~/.bashrc):
    source <(COMPLETE=bash genplate)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh genplate)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish genplate | source

EXAMPLES:
  genplate model.rs.hbs src/model.rs model.json
  genplate model.rs.hbs src/model.rs name=order_entry
  genplate --dry-run model.rs.hbs - name=order_entry
";

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): WARN only
/// - 1 (-v): INFO (files rendered and written)
/// - 2 (-vv): DEBUG (data loading, template parsing)
/// - 3+ (-vvv): TRACE with file/line numbers
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,genplate=info".to_string(),
            2 => "info,genplate=debug".to_string(),
            _ => "debug,genplate=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        return generate_completions(&shell_name);
    }

    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data = TemplateData::from_args(&cli.data).wrap_err("Failed to load template data")?;
    let functions = TemplateFunctions::builtin();
    debug!(functions = ?functions.names().collect::<Vec<_>>(), "registered template functions");

    let options = cli.render_options();
    let rendered = generate(&cli.template, &cli.out_file, &data, &functions, &options)
        .wrap_err_with(|| format!("Failed to generate {}", cli.out_file.display()))?;

    if options.dry_run {
        print!("{rendered}");
    }

    Ok(())
}

/// Generate shell completions.
fn generate_completions(shell_name: &str) -> Result<()> {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => bail!("Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"),
    };

    clap_complete::generate(shell, &mut Cli::command(), "genplate", &mut io::stdout());
    Ok(())
}
