use clap::{Parser, Subcommand};
use length_converter::cli;
use length_converter::convert::{self, Unit};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "length-converter")]
#[command(about = "Convert lengths between millimeters, meters, kilometers, inches, feet and miles", long_about = None)]
struct Cli {
    /// Config file with default units
    #[arg(short, long, global = true, default_value = "length-converter.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two units
    Convert {
        /// Amount to convert, e.g. "12" or "12 in" (anything that isn't a number counts as 0)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Source unit (e.g. "km", "inch", "Feet")
        #[arg(short, long)]
        from: Option<String>,

        /// Target unit
        #[arg(short, long)]
        to: Option<String>,

        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a quantity written with its unit, e.g. "12 in"
    Quantity {
        /// Quantity to convert
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Target unit
        #[arg(short, long)]
        to: Option<String>,

        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported units
    Units,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Cli::parse();

    let result = match args.command {
        Commands::Convert {
            amount,
            from,
            to,
            json,
        } => convert_amount(&args.config, &amount, from.as_deref(), to.as_deref(), json),
        Commands::Quantity { quantity, to, json } => {
            convert_quantity(&args.config, &quantity, to.as_deref(), json)
        }
        Commands::Units => {
            list_units();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn convert_amount(
    config_path: &str,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::load_config(config_path)?;
    let prepared = cli::amount_request(&config, amount, from, to)?;
    println!("{}", prepared.render(json)?);
    Ok(())
}

fn convert_quantity(
    config_path: &str,
    quantity: &str,
    to: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::load_config(config_path)?;
    let prepared = cli::quantity_request(&config, quantity, to)?;
    println!("{}", prepared.render(json)?);
    Ok(())
}

fn list_units() {
    println!("Units ({}):", Unit::ALL.len());
    for unit in Unit::ALL {
        println!(
            "  - {} ({}) = {} mm",
            unit.symbol(),
            unit.label(),
            convert::format(unit.factor_to_mm())
        );
    }
}
