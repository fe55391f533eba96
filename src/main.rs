use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sunnah_sleep::{
    alarm::{self, Alarm},
    config::AppConfig,
    dua::{self, DUAS},
    prayer::{AladhanClient, PRAYER_ORDER, format_api_time},
    qibla, stats,
    store::Store,
    traits::{Clock, SystemClock},
    validation::is_valid_time_format,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "sunnah-sleep")]
#[command(about = "Sleep and prayer-routine tracker")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record one night's sleep
    Log {
        /// Bedtime as HH:mm
        bedtime: String,
        /// Waketime as HH:mm
        waketime: String,
        /// Calendar date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show sleep statistics
    Stats {
        /// Trailing window in days (0 = everything); defaults from config
        #[arg(long)]
        days: Option<i64>,
    },
    /// Qibla bearing for a coordinate
    Qibla {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Today's prayer timings
    Prayer {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        /// Free-form address lookup instead of coordinates
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        address: Option<String>,
    },
    /// Manage daily alarms
    Alarm {
        #[command(subcommand)]
        command: AlarmCommand,
    },
    /// Bedtime duas
    Dua {
        #[command(subcommand)]
        command: DuaCommand,
    },
    /// Show or set the nightly sleep goal
    Goal {
        /// New goal in hours; omit to show the current goal
        hours: Option<f64>,
    },
    /// Erase all stored data
    Clear,
}

#[derive(Subcommand, Debug)]
enum AlarmCommand {
    /// Add a daily alarm
    Add {
        /// Alarm time as HH:mm
        time: String,
        /// Label shown when it fires
        #[arg(default_value = "Reminder")]
        label: String,
    },
    /// List alarms with their next trigger
    List,
    /// Enable or disable an alarm by id
    Toggle { id: String },
    /// Remove an alarm by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum DuaCommand {
    /// List the dua catalog
    List {
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Toggle a dua as favorite by id
    Favorite { id: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .parse_lossy("sunnah_sleep=debug");

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let mut store = Store::open(&config.store.path)
        .with_context(|| format!("Failed to open store at {}", config.store.path))?;
    let clock = SystemClock;

    match args.command {
        Command::Log {
            bedtime,
            waketime,
            date,
        } => {
            if !is_valid_time_format(&bedtime) || !is_valid_time_format(&waketime) {
                anyhow::bail!("Times must be valid 24-hour HH:mm values");
            }
            // Stamp with the UTC date: the recency cutoff is UTC-based, so a
            // local-date stamp could fall outside the window near midnight.
            let date = date.or_else(|| Some(clock.today_utc().format("%Y-%m-%d").to_string()));
            let entry = stats::SleepEntry {
                bedtime: bedtime.trim().to_string(),
                waketime: waketime.trim().to_string(),
                date,
            };
            let hours = stats::duration_hours(&entry.bedtime, &entry.waketime);
            store.add_sleep_entry(entry);
            store.save().context("Failed to save store")?;
            println!("Logged {} of sleep", stats::format_duration(hours));
        }

        Command::Stats { days } => {
            let window = days.unwrap_or(config.sleep.recency_window_days);
            let filtered = stats::filter_recent(store.sleep_entries(), window);
            if filtered.is_empty() {
                println!("No sleep entries in the selected window");
                return Ok(());
            }

            for entry in &filtered {
                let hours = stats::duration_hours(&entry.bedtime, &entry.waketime);
                println!(
                    "{}  {} -> {}  {}",
                    entry.date.as_deref().unwrap_or("          "),
                    entry.bedtime,
                    entry.waketime,
                    stats::format_duration(hours)
                );
            }

            let avg = stats::average_hours(&filtered);
            println!(
                "Average over {} night(s): {} (goal {}h)",
                filtered.len(),
                stats::format_duration(avg),
                store.sleep_goal_hours()
            );
        }

        Command::Qibla { lat, lon } => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!("Coordinates out of range: lat in [-90, 90], lon in [-180, 180]");
            }
            let bearing = qibla::bearing_from_coords(lat, lon);
            println!("{}\u{b0} ({})", bearing, qibla::octant_label(f64::from(bearing)));
        }

        Command::Prayer { lat, lon, address } => {
            let client = AladhanClient::new(
                config.prayer.api_url.clone(),
                config.prayer.method,
                &config.network,
            )?;
            let today = clock.now_local().date_naive();

            let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
            let timings = rt.block_on(async {
                match (lat, lon, address) {
                    (Some(lat), Some(lon), None) => {
                        client.timings_by_coords(lat, lon, today).await
                    }
                    (None, None, Some(address)) => {
                        client.timings_by_address(&address, today).await
                    }
                    _ => anyhow::bail!("Provide either --lat and --lon, or --address"),
                }
            })?;

            for prayer in PRAYER_ORDER {
                println!("{:<8} {}", prayer.label(), format_api_time(timings.get(prayer)));
            }
        }

        Command::Alarm { command } => match command {
            AlarmCommand::Add { time, label } => {
                if !is_valid_time_format(&time) {
                    anyhow::bail!("Alarm time must be a valid 24-hour HH:mm value");
                }
                let alarm = Alarm {
                    id: format!("alarm-{}", Utc::now().timestamp_millis()),
                    time: time.trim().to_string(),
                    label,
                    enabled: true,
                };
                tracing::debug!(id = %alarm.id, "adding alarm");
                println!("Added alarm {} at {}", alarm.id, alarm.time);
                store.add_alarm(alarm);
                store.save().context("Failed to save store")?;
            }
            AlarmCommand::List => {
                if store.alarms().is_empty() {
                    println!("No alarms");
                }
                for a in store.alarms() {
                    let next = alarm::next_trigger_with_clock(a, &clock)
                        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{}  {}  {}  [{}]  next: {}",
                        a.id,
                        a.time,
                        a.label,
                        if a.enabled { "on" } else { "off" },
                        next
                    );
                }
            }
            AlarmCommand::Toggle { id } => {
                let currently = store
                    .alarms()
                    .iter()
                    .find(|a| a.id == id)
                    .map(|a| a.enabled)
                    .with_context(|| format!("No alarm with id {}", id))?;
                store.set_alarm_enabled(&id, !currently);
                store.save().context("Failed to save store")?;
                println!("Alarm {} is now {}", id, if currently { "off" } else { "on" });
            }
            AlarmCommand::Remove { id } => {
                if !store.remove_alarm(&id) {
                    anyhow::bail!("No alarm with id {}", id);
                }
                store.save().context("Failed to save store")?;
                println!("Removed alarm {}", id);
            }
        },

        Command::Dua { command } => match command {
            DuaCommand::List { favorites } => {
                for d in &DUAS {
                    let starred = store.dua_favorites().iter().any(|f| f == d.id);
                    if favorites && !starred {
                        continue;
                    }
                    println!(
                        "{} {}  ({})",
                        if starred { "*" } else { " " },
                        d.title,
                        d.id
                    );
                    println!("    {}", d.arabic);
                    println!("    {}", d.transliteration);
                    println!("    {}", d.meaning);
                }
            }
            DuaCommand::Favorite { id } => {
                if dua::find_dua(&id).is_none() {
                    anyhow::bail!("No dua with id {}", id);
                }
                let now_favorite = store.toggle_dua_favorite(&id);
                store.save().context("Failed to save store")?;
                println!(
                    "{} is {} a favorite",
                    id,
                    if now_favorite { "now" } else { "no longer" }
                );
            }
        },

        Command::Goal { hours } => match hours {
            Some(hours) => {
                store.set_sleep_goal_hours(hours);
                store.save().context("Failed to save store")?;
                println!("Sleep goal set to {}h", store.sleep_goal_hours());
            }
            None => println!("Sleep goal: {}h", store.sleep_goal_hours()),
        },

        Command::Clear => {
            store.clear_all();
            store.save().context("Failed to save store")?;
            println!("All data cleared");
        }
    }

    Ok(())
}
