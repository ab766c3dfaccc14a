use clap::{Parser, Subcommand};
use kundli_dialogue::{detect_intent, detect_language, parse};
use kundli_geo::Geocoder;
use kundli_time::{BirthMoment, weekday_from_jd};
use kundli_vedic::{
    deg_to_dms, mahadasha_at, nakshatra_from_longitude, rashi_from_longitude, weekday_lord,
};

#[derive(Parser)]
#[command(name = "kundli", about = "Kundli core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Current Vimshottari mahadasha from Moon longitude and age
    Dasha {
        /// Moon's sidereal longitude at birth in degrees
        #[arg(long)]
        moon: f64,
        /// Age in years (fractional)
        #[arg(long)]
        age: f64,
    },
    /// Julian Day (UT) for a local birth moment
    Jd {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u8,
        #[arg(long)]
        day: u8,
        #[arg(long, default_value = "0")]
        hour: u8,
        #[arg(long, default_value = "0")]
        minute: u8,
        /// Timezone offset from UTC in hours (e.g. 5.5 for IST)
        #[arg(long, default_value = "0")]
        tz: f64,
    },
    /// Extract birth details from a free-form message
    Parse {
        /// Message text (English, Hindi or Hinglish)
        message: String,
    },
    /// Classify a message's intent and language
    Intent {
        /// Message text
        message: String,
    },
    /// Resolve a place name against the static city table
    Geocode {
        /// Place name
        place: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.lord().name()
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", dms.degrees, dms.minutes, dms.seconds);
        }

        Commands::Dasha { moon, age } => {
            if age < 0.0 {
                eprintln!("Age must be non-negative.");
                std::process::exit(1);
            }
            let state = mahadasha_at(moon, age);
            println!(
                "{} mahadasha: {:.2} of {:.0} years elapsed, {:.2} remaining (birth balance {:.2})",
                state.lord.name(),
                state.years_completed,
                state.total_years,
                state.years_remaining,
                state.birth_balance_years
            );
        }

        Commands::Jd {
            year,
            month,
            day,
            hour,
            minute,
            tz,
        } => {
            let moment = BirthMoment {
                year,
                month,
                day,
                hour,
                minute,
                tz_offset_hours: tz,
            };
            let jd = moment.to_jd_ut();
            let weekday = weekday_from_jd(jd);
            print!("JD (UT): {jd:.5}");
            match weekday_lord(weekday) {
                Some(lord) => println!(", weekday lord {}", lord.name()),
                None => println!(),
            }
        }

        Commands::Parse { message } => {
            let parsed = parse(&message);
            match serde_json::to_string_pretty(&parsed) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Serialization failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Intent { message } => {
            let language = detect_language(&message);
            match detect_intent(&message) {
                Some(intent) => println!("{intent:?} ({})", language.name()),
                None => println!("none ({})", language.name()),
            }
        }

        Commands::Geocode { place } => {
            let geo = Geocoder::offline();
            match geo.resolve(&place) {
                Ok(r) => println!(
                    "{}, {} - lat {:.4}, lon {:.4}, UTC{:+.1}",
                    r.place, r.country, r.latitude, r.longitude, r.tz_offset_hours
                ),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
