use clap::{Parser, Subcommand};
use lengthconv::config::Config;
use lengthconv::units::{self, format_label, ConversionModel, LengthUnit, RoundingMode};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "lengthconv")]
#[command(about = "Convert lengths between centimeters, meters, feet and millimeters", long_about = None)]
struct Cli {
    /// Config file (default: lengthconv.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Value to convert, optionally with a unit (e.g., "100" or "100 cm")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (overridden by a unit in VALUE)
        #[arg(short, long)]
        from: Option<String>,

        /// Target unit
        #[arg(short, long)]
        to: Option<String>,

        /// Drop the decimal part after rounding
        #[arg(long)]
        truncate: bool,
    },

    /// Show a value in every supported unit
    Table {
        /// Value to convert, optionally with a unit (e.g., "3 ft")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (overridden by a unit in VALUE)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// List supported units
    Units {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            truncate,
        } => convert_command(&config, &value, from.as_deref(), to.as_deref(), truncate),
        Commands::Table { value, from } => table_command(&config, &value, from.as_deref()),
        Commands::Units { json } => units_command(json),
    }
}

/// Split VALUE into raw number text and source unit.
/// A unit embedded in VALUE wins over --from, which wins over the config default.
fn resolve_input<'a>(
    config: &Config,
    value: &'a str,
    from: Option<&str>,
) -> Result<(&'a str, LengthUnit), Box<dyn std::error::Error>> {
    if let Some((number, unit)) = units::split_quantity(value) {
        return Ok((number, unit.parse::<LengthUnit>()?));
    }

    let source = match from {
        Some(name) => name.parse::<LengthUnit>()?,
        None => config.defaults.from,
    };
    Ok((value, source))
}

fn convert_command(
    config: &Config,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    truncate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (raw, source) = resolve_input(config, value, from)?;
    let target = match to {
        Some(name) => name.parse::<LengthUnit>()?,
        None => config.defaults.to,
    };

    let rounding = if truncate {
        RoundingMode::Truncate
    } else {
        config.defaults.rounding
    };
    let model = ConversionModel::with_rounding(rounding);

    debug!(raw, source = source.symbol(), target = target.symbol(), "Converting");
    let output = model.convert(raw, source, target);
    println!("{}", format_label(&output, target));

    Ok(())
}

fn table_command(
    config: &Config,
    value: &str,
    from: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (raw, source) = resolve_input(config, value, from)?;
    let model = ConversionModel::with_rounding(config.defaults.rounding);

    println!("{} {}", model.convert(raw, source, source), source.display_name());
    for target in LengthUnit::ALL {
        println!(
            "  = {:>12} {}",
            model.convert(raw, source, target),
            target.display_name()
        );
    }

    Ok(())
}

fn units_command(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = units::catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("Units ({}):", catalog.len());
    for info in &catalog {
        println!("  - {} ({}) = {} m", info.name, info.symbol, info.factor);
    }

    Ok(())
}
