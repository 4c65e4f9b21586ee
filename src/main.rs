use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use daubechies_filters::coefficients::registry;
use daubechies_filters::output::{FilterReport, OutputFormat, create_formatter};
use daubechies_filters::{BoundaryFilterFamily, FilterConfig, InteriorFilter, Side};

#[derive(Parser, Debug)]
#[command(name = "daubechies-filters")]
#[command(about = "Print Daubechies interior and boundary scaling filters", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Vanishing-moment order
    #[arg(short, long, allow_negative_numbers = true)]
    order: Option<i32>,

    /// Boundary side to print: L, R, left, right (repeatable)
    #[arg(short, long)]
    side: Vec<Side>,

    /// Print the interior filter only
    #[arg(long)]
    interior_only: bool,

    /// Use the generated Daubechies filter instead of the tabulated symmlet
    #[arg(long)]
    standard: bool,

    /// Output format: text, json, csv
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fractional digits for text and csv output
    #[arg(long)]
    precision: Option<usize>,

    /// Check the coefficient tables against their support formulas and exit
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.verify {
        registry()
            .verify()
            .context("Coefficient tables are inconsistent")?;
        println!("Coefficient tables consistent");
        return Ok(());
    }

    let config = build_config(&args)?;
    let formatter = create_formatter(config.output.format, config.output.precision);

    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    let interior = InteriorFilter::new(config.order, config.prefer_symmlet)
        .with_context(|| format!("Failed to build interior filter of order {}", config.order))?;
    println!("{}", formatter.format(&FilterReport::interior(&interior)));

    for &side in &config.sides {
        let family = BoundaryFilterFamily::new(side, config.order).with_context(|| {
            format!(
                "Failed to build {} boundary family of order {}",
                side, config.order
            )
        })?;
        log::info!(
            "{} boundary offsets: {:?}",
            side,
            family.nonzero_integer_offsets()
        );
        for member in family.members() {
            println!("{}", formatter.format(&FilterReport::boundary(&member)));
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if let Some(order) = args.order {
        config.order = order;
    }
    if !args.side.is_empty() {
        config.sides = args.side.clone();
    }
    if args.interior_only {
        config.sides.clear();
    }
    if args.standard {
        config.prefer_symmlet = false;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }

    config.validate().context("Invalid configuration")?;
    log::debug!("Using configuration: {:?}", config);
    Ok(config)
}
