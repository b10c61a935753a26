use chrono::{NaiveDate, Utc, Weekday};
use clap::{Parser, Subcommand};
use inquire::Text;

use crate::clients::api_client::EventsApi;
use crate::handlers::event_details::EventDetailsPage;
use crate::handlers::new_event::{NewEventPage, SubmitOutcome};
use crate::service::session::LoggingNavigator;
use crate::service::time_slider::format_time;

#[derive(Parser)]
#[command(name = "letsmeet", about = "Lets Meet scheduling client")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an event and print it.
    Show { uid: String },
    /// Create an event from picked days or weekdays.
    Create {
        /// Event name; prompted for interactively when omitted.
        #[arg(long)]
        name: Option<String>,
        /// Candidate day (repeatable). Picking a day twice deselects it.
        #[arg(long = "day")]
        days: Vec<NaiveDate>,
        /// Weekday mode: mon/tue/.../sun (repeatable).
        #[arg(long = "weekday")]
        weekdays: Vec<String>,
        /// Earliest time that works, in hours (quarter steps).
        #[arg(long, default_value_t = 9.0)]
        from: f64,
        /// Latest time that works, in hours (quarter steps).
        #[arg(long, default_value_t = 17.0)]
        to: f64,
    },
}

pub async fn run<A: EventsApi + ?Sized>(cli: Cli, api: &A) {
    match cli.command {
        Commands::Show { uid } => show_event(&uid, api).await,
        Commands::Create {
            name,
            days,
            weekdays,
            from,
            to,
        } => {
            if let Err(e) = create_event(name, days, weekdays, from, to, api).await {
                println!("Failed to create event: {}", e);
            }
        }
    }
}

async fn show_event<A: EventsApi + ?Sized>(uid: &str, api: &A) {
    let mut page = EventDetailsPage::new();
    let mut navigator = LoggingNavigator::new();
    page.mount(uid, api, &mut navigator).await;
    match &page.event {
        Some(event) => match serde_json::to_string_pretty(event) {
            Ok(body) => println!("{}", body),
            Err(_) => println!("{:?}", event),
        },
        None => println!("{}", page.notification.message()),
    }
}

async fn create_event<A: EventsApi + ?Sized>(
    name: Option<String>,
    days: Vec<NaiveDate>,
    weekdays: Vec<String>,
    from: f64,
    to: f64,
    api: &A,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = NewEventPage::new();

    let name = match name {
        Some(name) => name,
        None => Text::new("Enter an event name.").prompt()?,
    };
    page.form.set_event_name(&name);
    page.form.time_range.set_from(from);
    page.form.time_range.set_to(to);
    println!(
        "From {} to {}",
        format_time(page.form.time_range.from),
        format_time(page.form.time_range.to)
    );

    let today = Utc::now().date_naive();
    for day in days {
        page.form.click_day(day, today);
    }

    if !weekdays.is_empty() {
        page.form.toggle_mode();
        for label in &weekdays {
            let Some(day) = parse_weekday(label) else {
                return Err(format!("Unknown weekday: {}", label).into());
            };
            page.form.toggle_week_day(day);
        }
    }

    let mut navigator = LoggingNavigator::new();
    match page.submit(api, &mut navigator).await {
        SubmitOutcome::Created { event_id } => {
            println!("Created event {}", event_id);
            Ok(())
        }
        SubmitOutcome::Blocked | SubmitOutcome::Failed => {
            Err(page.notification.message().to_string().into())
        }
    }
}

fn parse_weekday(label: &str) -> Option<Weekday> {
    match label.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
