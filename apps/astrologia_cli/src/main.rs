mod render;

use anyhow::Context;
use astrologia::{parse_birth_date, BirthProfile, NumerologyReading, Sign};
use astrologia_config::{
    AstrologiaSettings, OutputFormat, MAX_EVALUATION_YEAR, MIN_EVALUATION_YEAR,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Zodiac signs, numerology and compatibility from birth dates")]
struct Args {
    /// Output format (defaults to the config file, then text).
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,

    /// Config file (default: configs/astrologia.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report modern planetary rulers.
    #[arg(long, global = true)]
    modern: bool,

    /// Report traditional planetary rulers, even when the config asks for modern ones.
    #[arg(long, global = true, conflicts_with = "modern")]
    traditional: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the zodiac sign of a date (YYYY-MM-DD or DD/MM/YYYY).
    Sign { date: String },
    /// Personal number and personal year number.
    Numerology {
        date: String,
        /// Evaluation year for the personal year (default: config, then current year).
        #[arg(long, value_parser = evaluation_year_parser())]
        year: Option<i32>,
    },
    /// Affinity between two signs, by name.
    Compat { sign_a: String, sign_b: String },
    /// Full profile for a birth date.
    Profile {
        date: String,
        #[arg(long, value_parser = evaluation_year_parser())]
        year: Option<i32>,
    },
    /// List the zodiac table.
    Signs,
}

fn evaluation_year_parser() -> clap::builder::RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(i64::from(MIN_EVALUATION_YEAR)..=i64::from(MAX_EVALUATION_YEAR))
}

/// Settings after config file and flags are merged; flags win.
#[derive(Debug, Clone, Copy)]
struct Effective {
    format: Format,
    evaluation_year: Option<i32>,
    modern_rulers: bool,
}

impl Effective {
    fn merge(args: &Args, settings: &AstrologiaSettings) -> Self {
        Self {
            format: args.format.unwrap_or_else(|| settings.format.into()),
            evaluation_year: settings.evaluation_year,
            modern_rulers: !args.traditional && (args.modern || settings.modern_rulers),
        }
    }

    fn year(&self, flag: Option<i32>) -> Option<i32> {
        flag.or(self.evaluation_year)
    }
}

fn load_settings(args: &Args) -> anyhow::Result<AstrologiaSettings> {
    match &args.config {
        Some(path) => astrologia_config::load_settings_from(path),
        None => astrologia_config::load_settings(),
    }
}

fn run(args: Args) -> anyhow::Result<String> {
    let settings = load_settings(&args)?;
    let eff = Effective::merge(&args, &settings);
    log::debug!("effective settings: {:?}", eff);

    let out = match &args.command {
        Command::Sign { date } => {
            let date = parse_birth_date(date)?;
            let sign = astrologia::resolve_sign(&date)
                .with_context(|| format!("No sign covers {}", date))?;
            render::sign(sign, eff.format, eff.modern_rulers)?
        }
        Command::Numerology { date, year } => {
            let date = parse_birth_date(date)?;
            let reading = NumerologyReading::compute(&date, eff.year(*year));
            render::numerology(date, &reading, eff.format)?
        }
        Command::Compat { sign_a, sign_b } => {
            let result = astrologia::compatibility(sign_a, sign_b);
            render::compatibility(sign_a, sign_b, &result, eff.format)?
        }
        Command::Profile { date, year } => {
            let date = parse_birth_date(date)?;
            let profile = BirthProfile::compute(date, eff.year(*year))?;
            render::profile(&profile, eff.format, eff.modern_rulers)?
        }
        Command::Signs => render::table(&Sign::ALL, eff.format, eff.modern_rulers)?,
    };
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let out = run(args)?;
    println!("{}", out);
    Ok(())
}
