use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::config::DashboardSettings;
use crate::error::{DashboardError, Result};
use crate::handlers::http::{ActivityQuery, resolve_query};
use crate::models::schedule::DayType;
use crate::runtime;
use crate::service::activity_service::ActivityService;
use crate::service::card_service::activity_card;
use crate::service::render::render_text;

#[derive(Parser)]
#[command(about = "Personal daily dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP.
    Serve {},
    /// Fetch every card once and print it.
    Show {},
    /// Print the scheduled activity for now or a given time.
    Activity {
        /// Time of day as HH:MM.
        #[arg(long)]
        at: Option<String>,
        /// Monday-based weekday index, 0 to 6.
        #[arg(long, conflicts_with = "day_type")]
        weekday: Option<u32>,
        /// weekday, wednesday or weekend.
        #[arg(long)]
        day_type: Option<String>,
    },
    /// Print the schedule table.
    Schedule {
        #[arg(long)]
        day_type: Option<String>,
    },
}

pub async fn cli(settings: DashboardSettings) -> Result<()> {
    let cli = Cli::parse();
    run_command(cli.command, settings).await
}

pub async fn run_command(command: Commands, settings: DashboardSettings) -> Result<()> {
    match command {
        Commands::Serve {} => runtime::run_api(settings).await,
        Commands::Show {} => {
            let activity = ActivityService::load(settings.schedule_file.as_deref(), settings.timezone)?;
            let cards = runtime::build_card_service(&settings)?;
            let mut all = vec![activity_card(&activity.current(Utc::now()))];
            all.extend(cards.external_cards(Utc::now()).await);
            print!("{}", render_text(&all));
            Ok(())
        }
        Commands::Activity {
            at,
            weekday,
            day_type,
        } => {
            let activity = ActivityService::load(settings.schedule_file.as_deref(), settings.timezone)?;
            let query = ActivityQuery {
                at,
                day_type,
                weekday,
            };
            let current = resolve_query(&activity, &query)?;
            println!("[{}] {}\n{}", current.day_type, current.activity, current.description);
            Ok(())
        }
        Commands::Schedule { day_type } => {
            let activity = ActivityService::load(settings.schedule_file.as_deref(), settings.timezone)?;
            let day_types = match day_type {
                Some(name) => vec![name.parse::<DayType>()?],
                None => DayType::ALL.to_vec(),
            };
            for day_type in day_types {
                println!("{}:", day_type);
                for block in activity.table().blocks(day_type) {
                    println!(
                        "  {}-{}  {}",
                        block.start.format("%H:%M"),
                        block.end.format("%H:%M"),
                        block.activity
                    );
                }
            }
            Ok(())
        }
    }
}

pub fn unknown_run_mode(run_mode: &str) -> DashboardError {
    DashboardError::Config(format!("Invalid run mode {}", run_mode))
}
