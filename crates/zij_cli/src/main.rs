mod render;

use std::fmt::{Display, Formatter};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zij_catalog::{CatalogError, StarCatalog, StarEphemeris};
use zij_frames::mean_obliquity_deg;
use zij_tables::{TableError, fixed_star_table, manzil_table, rashi_nakshatra_table, xiu_table};
use zij_time::{Epoch, TimeError};
use zij_zodiac::{
    AyanamsaSource, DegMin, FAGAN_ALLEN_2019, LAHIRI_SPICA, deg_to_dms, ecliptic_offset,
    hour_circle_longitude_at, zodiac_label,
};

const DEFAULT_YEARS: [i32; 3] = [2024, 2030, 2050];
const DEFAULT_XIU_YEARS: [i32; 1] = [2030];

#[derive(Parser)]
#[command(
    name = "zij",
    about = "Tropical boundaries of sidereal mansions and zodiacs"
)]
struct Cli {
    /// Star catalog CSV to use instead of the bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 28 Arabic lunar mansions, Fagan-Allen ayanamsa
    Manazil {
        /// Year to tabulate (repeatable; default 2024, 2030, 2050)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// 12 rāśi and 27 nakṣatra, Lahiri ayanamsa
    RashiNakshatra {
        /// Year to tabulate (repeatable; default 2024, 2030, 2050)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// 28 Chinese xiù by hour-circle projection
    Xiu {
        /// Year to tabulate (repeatable; default 2030)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// Tropical longitudes of the catalog stars
    FixedStars {
        /// Year to tabulate (repeatable; default 2024, 2030, 2050)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// Every table, each for its default years unless --year is given
    All {
        /// Year to tabulate (repeatable)
        #[arg(long = "year")]
        years: Vec<i32>,
    },
    /// Label a tropical longitude, e.g. 25°04' Aries
    Label {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Fagan-Allen and Lahiri ayanamsa for a year or an instant
    Ayanamsa {
        /// 1 January, 0h TT of this year
        #[arg(long, default_value_t = 2024, conflicts_with = "date")]
        year: i32,
        /// Instant in TT: YYYY-MM-DD[Thh:mm[:ss]]
        #[arg(long)]
        date: Option<String>,
    },
    /// Project a right ascension's hour circle onto the ecliptic
    Project {
        /// Right ascension of date in degrees
        #[arg(long, allow_negative_numbers = true)]
        ra_deg: f64,
        /// 1 January, 0h TT of this year
        #[arg(long, default_value_t = 2030, conflicts_with = "date")]
        year: i32,
        /// Instant in TT: YYYY-MM-DD[Thh:mm[:ss]]
        #[arg(long)]
        date: Option<String>,
    },
}

/// Anything that stops a run after output may already have been written.
#[derive(Debug)]
enum RunError {
    Catalog(CatalogError),
    Table(TableError),
    Time(TimeError),
    Write(io::Error),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "{e}"),
            Self::Table(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "invalid --date: {e}"),
            Self::Write(e) => write!(f, "writing output: {e}"),
        }
    }
}

impl From<CatalogError> for RunError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<TableError> for RunError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

impl From<TimeError> for RunError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Write(e)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<StarCatalog, CatalogError> {
    let catalog = match path {
        Some(p) => StarCatalog::from_path(p)?,
        None => StarCatalog::bundled()?,
    };
    tracing::debug!(stars = catalog.len(), "catalog ready");
    Ok(catalog)
}

fn years_or(years: &[i32], default: &[i32]) -> Vec<i32> {
    if years.is_empty() {
        default.to_vec()
    } else {
        years.to_vec()
    }
}

/// The `--date` instant when given, else 1 January of `year`.
fn epoch_of(year: i32, date: Option<&str>) -> Result<Epoch, TimeError> {
    match date {
        Some(d) => d.parse(),
        None => Ok(Epoch::new_year(year)),
    }
}

fn print_manazil(out: &mut impl Write, years: &[i32]) -> Result<(), RunError> {
    for &year in years {
        render::manzil(out, &manzil_table(year))?;
    }
    Ok(())
}

fn print_rashi_nakshatra(
    out: &mut impl Write,
    ephem: &dyn StarEphemeris,
    years: &[i32],
) -> Result<(), RunError> {
    for &year in years {
        render::rashi_nakshatra(out, &rashi_nakshatra_table(ephem, year)?)?;
    }
    Ok(())
}

fn print_xiu(
    out: &mut impl Write,
    ephem: &dyn StarEphemeris,
    years: &[i32],
) -> Result<(), RunError> {
    for &year in years {
        render::xiu(out, &xiu_table(ephem, year)?)?;
    }
    Ok(())
}

fn print_fixed_stars(
    out: &mut impl Write,
    catalog: &StarCatalog,
    years: &[i32],
) -> Result<(), RunError> {
    for &year in years {
        render::fixed_stars(out, &fixed_star_table(catalog, catalog, year)?)?;
    }
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), RunError> {
    match cli.command {
        Commands::Manazil { years } => print_manazil(out, &years_or(&years, &DEFAULT_YEARS)),

        Commands::RashiNakshatra { years } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            print_rashi_nakshatra(out, &catalog, &years_or(&years, &DEFAULT_YEARS))
        }

        Commands::Xiu { years } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            print_xiu(out, &catalog, &years_or(&years, &DEFAULT_XIU_YEARS))
        }

        Commands::FixedStars { years } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            print_fixed_stars(out, &catalog, &years_or(&years, &DEFAULT_YEARS))
        }

        Commands::All { years } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            print_manazil(out, &years_or(&years, &DEFAULT_YEARS))?;
            print_rashi_nakshatra(out, &catalog, &years_or(&years, &DEFAULT_YEARS))?;
            print_xiu(out, &catalog, &years_or(&years, &DEFAULT_XIU_YEARS))?;
            print_fixed_stars(out, &catalog, &years_or(&years, &DEFAULT_YEARS))
        }

        Commands::Label { lon } => Ok(writeln!(out, "{}", zodiac_label(lon))?),

        Commands::Ayanamsa { year, date } => {
            let epoch = epoch_of(year, date.as_deref())?;
            let catalog = load_catalog(cli.catalog.as_ref())?;
            let fa = match date {
                Some(_) => FAGAN_ALLEN_2019.at_epoch(epoch),
                None => FAGAN_ALLEN_2019.at_year(year as f64),
            };
            let spica = catalog.position(LAHIRI_SPICA.star, epoch)?;
            let lahiri = LAHIRI_SPICA.ayanamsa(spica.ecl_lon_deg);

            writeln!(out, "Ayanamsa at {epoch}")?;
            writeln!(
                out,
                "{:<14} {:>10.6}°  {}  ({})",
                "Fagan-Allen",
                fa,
                DegMin::from_degrees(fa),
                AyanamsaSource::FixedEpoch(FAGAN_ALLEN_2019).describe()
            )?;
            writeln!(
                out,
                "{:<14} {:>10.6}°  {}  ({}, tropical {})",
                "Lahiri",
                lahiri,
                DegMin::from_degrees(lahiri),
                AyanamsaSource::StarAnchored(LAHIRI_SPICA).describe(),
                zodiac_label(spica.ecl_lon_deg)
            )?;
            Ok(())
        }

        Commands::Project { ra_deg, year, date } => {
            let epoch = epoch_of(year, date.as_deref())?;
            let projected = hour_circle_longitude_at(ra_deg.to_radians(), epoch);
            let obliquity = mean_obliquity_deg(epoch.centuries());
            writeln!(
                out,
                "Obliquity ε at {epoch} = {obliquity:.4}° ({})",
                deg_to_dms(obliquity)
            )?;
            writeln!(
                out,
                "RA {ra_deg:.4}° → λ {projected:.4}° ({}), {:+.4}° from the RA",
                zodiac_label(projected),
                ecliptic_offset(projected, ra_deg)
            )?;
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(cli, &mut out);
    // tables rendered before a failure still reach stdout
    let flushed = out.flush();
    if let Err(e) = result.and_then(|()| Ok(flushed?)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut buf = Vec::new();
        run(cli, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_years() {
        assert_eq!(years_or(&[], &DEFAULT_YEARS), vec![2024, 2030, 2050]);
        assert_eq!(years_or(&[1990], &DEFAULT_YEARS), vec![1990]);
    }

    #[test]
    fn repeated_year_flag() {
        let cli = Cli::try_parse_from(["zij", "manazil", "--year", "2000", "--year", "2100"])
            .unwrap();
        match cli.command {
            Commands::Manazil { years } => assert_eq!(years, vec![2000, 2100]),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn label_command() {
        assert_eq!(run_args(&["zij", "label", "25.07"]), "25°04' Aries\n");
        assert_eq!(run_args(&["zij", "label", "-0.5"]), "29°30' Pisces\n");
    }

    #[test]
    fn manazil_one_year() {
        let s = run_args(&["zij", "manazil", "--year", "2019"]);
        assert!(s.starts_with("28 Lunar Mansions (Manāzil) — Tropical Boundaries (2019)\n"));
        assert_eq!(s.matches("Tropical Boundaries").count(), 1);
    }

    #[test]
    fn project_command() {
        let s = run_args(&["zij", "project", "--ra-deg", "201.699", "--year", "2030"]);
        assert!(s.contains("at 2030-01-01 00:00 TT"), "{s}");
        assert!(s.contains("20°03' Libra"), "{s}");
    }

    #[test]
    fn ayanamsa_command() {
        let s = run_args(&["zij", "ayanamsa", "--year", "2024"]);
        assert!(s.starts_with("Ayanamsa at 2024-01-01 00:00 TT\n"), "{s}");
        assert!(s.contains("Fagan-Allen"));
        assert!(s.contains("25°04'"));
        assert!(s.contains("Spica at 180° sidereal"));
    }

    #[test]
    fn ayanamsa_at_date() {
        let s = run_args(&["zij", "ayanamsa", "--date", "2024-07-01T12:00"]);
        assert!(s.starts_with("Ayanamsa at 2024-07-01 12:00 TT\n"), "{s}");
        assert!(s.contains("25°05'"), "{s}");
    }

    #[test]
    fn bad_date_is_time_error() {
        let cli = Cli::try_parse_from(["zij", "project", "--ra-deg", "10", "--date", "2023-02-29"])
            .unwrap();
        let err = run(cli, &mut Vec::new()).unwrap_err();
        assert!(
            matches!(err, RunError::Time(TimeError::InvalidDay { month: 2, day: 29 })),
            "{err:?}"
        );
        assert!(err.to_string().starts_with("invalid --date"));
    }

    #[test]
    fn year_and_date_conflict() {
        let parsed = Cli::try_parse_from(["zij", "ayanamsa", "--year", "2024", "--date", "2024-01-01"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn failure_keeps_earlier_tables() {
        let path = std::env::temp_dir().join(format!("zij_cli_no_spica_{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "name,hip,group,designation,ra_hms,dec_dms,pm_ra_mas_yr,pm_dec_mas_yr,parallax_mas\n\
             Vega,91262,bright,α Lyr,18:36:56.34,+38:47:01.3,200.94,286.23,130.23\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from([
            "zij",
            "--catalog",
            path.to_str().unwrap(),
            "all",
            "--year",
            "2024",
        ])
        .unwrap();

        let mut buf = Vec::new();
        let err = run(cli, &mut buf).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(
            matches!(
                &err,
                RunError::Table(TableError::Catalog(CatalogError::StarNotFound(name))) if name == "Spica"
            ),
            "{err:?}"
        );
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("28 Lunar Mansions (Manāzil) — Tropical Boundaries (2024)\n"));
        assert!(!s.contains("Rāśi and Nakṣatra"));
    }
}
