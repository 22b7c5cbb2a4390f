mod config;

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, error};
use natal_chart::{Chart, ChartConfig, ChartEngine, ChartError, ChartRequest, houses, placement};
use natal_ephemeris::ObserverLocation;
use natal_time::{BirthMoment, resolve};

#[derive(Parser)]
#[command(name = "natal", about = "Tropical natal chart calculator")]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full natal chart
    Chart {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Civil time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// IANA zone identifier, e.g. Europe/Paris
        #[arg(long)]
        zone: String,
        /// Geographic latitude in degrees (north positive)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Geographic longitude in degrees (east positive)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Elevation above sea level in metres
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        alt: f64,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a civil time to UTC and Julian Dates
    Resolve {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        zone: String,
    },
    /// Compute ascendant, midheaven and local sidereal time
    Angles {
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        zone: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Equal-house cusps from an ascendant longitude
    Houses {
        /// Ascendant longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        asc: f64,
    },
    /// Zodiac sign and degree for an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', using 'warn'", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(log_level:% = log_level; "Logger initialized");

    match cli.command {
        Commands::Chart {
            date,
            time,
            zone,
            lat,
            lon,
            alt,
            json,
        } => {
            let chart_config = load_chart_config(cli.config);
            let engine = ChartEngine::analytic(chart_config).unwrap_or_else(|e| fail(e));
            let request = ChartRequest::new(date, time, zone, lat, lon, alt);
            let chart = engine.compute(&request).unwrap_or_else(|e| fail(e));
            if json {
                let out = serde_json::to_string_pretty(&chart).unwrap_or_else(|e| fail(e));
                println!("{out}");
            } else {
                print_chart(&chart);
            }
        }

        Commands::Resolve { date, time, zone } => {
            let moment = resolve_moment(&date, &time, &zone);
            println!("UTC:        {moment}");
            println!("JD (UT):    {:.6}", moment.jd_ut());
            println!("JD (TT):    {:.6}", moment.jd_tt());
            println!("ΔT:         {:.2} s", moment.delta_t_seconds());
        }

        Commands::Angles {
            date,
            time,
            zone,
            lat,
            lon,
        } => {
            let observer = ObserverLocation::new(lat, lon, 0.0);
            observer
                .validate()
                .map_err(ChartError::from)
                .unwrap_or_else(|e| fail(e));
            let moment = resolve_moment(&date, &time, &zone);
            let angles = natal_chart::angles(&moment, &observer).unwrap_or_else(|e| fail(e));

            println!("Angles for {moment}");
            println!("  LST:        {:.6}°", angles.sidereal_time_deg);
            print_angle("ASC", angles.ascendant_deg);
            print_angle("MC", angles.midheaven_deg);
            print_angle("DSC", angles.descendant_deg());
            print_angle("IC", angles.imum_coeli_deg());
        }

        Commands::Houses { asc } => {
            if !asc.is_finite() {
                fail(format!("ascendant must be finite, got {asc}"));
            }
            println!("{:>6} {:>12}  {}", "House", "Cusp", "Position");
            println!("{}", "-".repeat(40));
            for cusp in houses(asc) {
                println!(
                    "{:>6} {:>11.6}°  {}",
                    cusp.index,
                    cusp.longitude_deg,
                    placement(cusp.longitude_deg)
                );
            }
        }

        Commands::Sign { lon } => {
            if !lon.is_finite() {
                fail(format!("longitude must be finite, got {lon}"));
            }
            let p = placement(lon);
            println!("{} {} ({})", p.sign_glyph, p.sign_name, p.sign_index);
            println!("  Degree in sign: {:.6}°  ({})", p.degree_in_sign, p.dms());
            println!("  Element:        {:?}", p.sign.element());
            println!("  Modality:       {:?}", p.sign.modality());
        }
    }
}

fn fail(e: impl Display) -> ! {
    error!(error:% = e; "Command failed");
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_chart_config(path: Option<PathBuf>) -> ChartConfig {
    config::load_config(path.as_deref())
        .unwrap_or_else(|e| fail(e))
        .chart
}

fn resolve_moment(date: &str, time: &str, zone: &str) -> BirthMoment {
    resolve(Some(date), Some(time), zone)
        .map_err(ChartError::from)
        .unwrap_or_else(|e| fail(e))
}

fn print_angle(label: &str, lon: f64) {
    println!("  {label:<4}        {lon:.6}°  {}", placement(lon));
}

fn print_chart(chart: &Chart) {
    println!("Natal chart for {}", chart.moment);
    println!();
    println!(
        "  ASC  {:>11.6}°  {}",
        chart.angles.ascendant.longitude_deg, chart.angles.ascendant.placement
    );
    println!(
        "  MC   {:>11.6}°  {}",
        chart.angles.midheaven.longitude_deg, chart.angles.midheaven.placement
    );
    println!("  LST  {:>11.6}°", chart.angles.sidereal_time_deg);
    println!();

    println!(
        "{:<12} {:>12}  {:<20} {:>5} {:>3}",
        "Body", "Longitude", "Position", "House", "R"
    );
    println!("{}", "-".repeat(58));
    for b in &chart.bodies {
        println!(
            "{:<12} {:>11.6}°  {:<20} {:>5} {:>3}",
            b.position.body.name(),
            b.position.longitude_deg,
            b.placement.to_string(),
            b.house,
            if b.position.retrograde { "R" } else { "" }
        );
    }
    println!();

    println!("{:>6} {:>12}  {}", "House", "Cusp", "Position");
    println!("{}", "-".repeat(40));
    for h in &chart.houses {
        println!(
            "{:>6} {:>11.6}°  {}",
            h.cusp.index, h.cusp.longitude_deg, h.placement
        );
    }
}
