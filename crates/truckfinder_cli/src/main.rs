//! Command-line front end for the food truck catalog.
//!
//! # Responsibility
//! - Load a catalog (file or bundled sample) and render core query results.
//! - Keep all search, hours and formatting rules inside `truckfinder_core`.

use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;
use truckfinder_core::search::menu::FEATURED_POPULAR_ITEMS;
use truckfinder_core::search::suggest::DEFAULT_SUGGESTION_LIMIT;
use truckfinder_core::{
    cuisine_suggestions, default_log_level, filter_trucks, format_currency, format_date,
    init_logging, is_open_now, list_reviews, plans, popular_items, rating_stars, rating_summary,
    suggest, today_schedule, truncate_text, Catalog, FoodTruck, LogLevel, LoggingConfig,
    OpenFilter, Review, ReviewQuery, ReviewSort, StarBreakdown, TruckFilters,
};

const LIST_DESCRIPTION_CHARS: usize = 150;

#[derive(Parser, Debug)]
#[command(name = "truckfinder", author, version, about = "Browse the food truck catalog")]
struct Cli {
    /// Catalog JSON file; the bundled sample is used when omitted.
    #[arg(long, global = true, env = "TRUCKFINDER_CATALOG")]
    catalog: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "TRUCKFINDER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true, env = "TRUCKFINDER_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search trucks by name, cuisine, location or menu text.
    Search(SearchArgs),
    /// Show one truck with hours and menu.
    Show { truck_id: String },
    /// List reviews of one truck.
    Reviews(ReviewsArgs),
    /// Suggest cuisines and locations for a partial query.
    Suggest { query: String },
    /// List owner subscription plans.
    Plans,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(default_value = "")]
    query: String,
    /// Exact cuisine name, e.g. `Mexican` or `BBQ`.
    #[arg(long)]
    cuisine: Option<String>,
    #[arg(long, conflicts_with = "closed_only")]
    open_now: bool,
    #[arg(long)]
    closed_only: bool,
}

#[derive(Args, Debug)]
struct ReviewsArgs {
    truck_id: String,
    #[arg(long, value_enum, default_value_t = SortArg::Newest)]
    sort: SortArg,
    /// Only reviews with exactly this many stars.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    rating: Option<u8>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl From<SortArg> for ReviewSort {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => Self::Newest,
            SortArg::Oldest => Self::Oldest,
            SortArg::Highest => Self::Highest,
            SortArg::Lowest => Self::Lowest,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(message) = setup_logging(&cli) {
        eprintln!("truckfinder: {message}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_command module=cli status=error message={message}");
            eprintln!("truckfinder: {message}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<(), String> {
    let level = match cli.log_level.as_deref() {
        Some(raw) => raw.parse::<LogLevel>().map_err(|err| err.to_string())?,
        None => default_log_level(),
    };
    let config = match cli.log_dir.as_deref() {
        Some(dir) => LoggingConfig::files(level, dir).map_err(|err| err.to_string())?,
        None => LoggingConfig::stderr(level),
    };
    init_logging(&config).map_err(|err| err.to_string())
}

fn run(cli: Cli) -> Result<(), String> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::sample(),
    }
    .map_err(|err| err.to_string())?;
    debug!("event=cli_command module=cli status=start command={:?}", cli.command);

    match cli.command {
        Command::Search(args) => search(&catalog, &args),
        Command::Show { truck_id } => show(&catalog, &truck_id),
        Command::Reviews(args) => reviews(&catalog, &args),
        Command::Suggest { query } => {
            print_suggestions(&catalog, &query);
            Ok(())
        }
        Command::Plans => {
            print_plans();
            Ok(())
        }
    }
}

fn search(catalog: &Catalog, args: &SearchArgs) -> Result<(), String> {
    let open = if args.open_now {
        OpenFilter::OpenOnly
    } else if args.closed_only {
        OpenFilter::ClosedOnly
    } else {
        OpenFilter::Any
    };
    let filters = TruckFilters {
        cuisine: args.cuisine.clone(),
        open,
    };

    let trucks = filter_trucks(&catalog.trucks, &args.query, &filters);
    println!("{} food trucks found", trucks.len());
    for truck in trucks {
        println!();
        print_truck_summary(truck);
    }
    Ok(())
}

fn print_truck_summary(truck: &FoodTruck) {
    println!(
        "[{}] {} ({}) {} {:.1} ({} reviews){}",
        truck.id,
        truck.name,
        truck.cuisine,
        render_stars(rating_stars(truck.rating)),
        truck.rating,
        truck.review_count,
        if truck.is_open { " OPEN" } else { "" }
    );
    println!("    {}", truck.location.text);
    println!("    {}", truncate_text(&truck.description, LIST_DESCRIPTION_CHARS));
    let popular = popular_items(&truck.menu, FEATURED_POPULAR_ITEMS)
        .into_iter()
        .map(|item| format!("{} {}", item.name, format_currency(item.price)))
        .collect::<Vec<_>>();
    if !popular.is_empty() {
        println!("    Popular: {}", popular.join(", "));
    }
}

fn show(catalog: &Catalog, truck_id: &str) -> Result<(), String> {
    let truck = catalog
        .truck(truck_id)
        .ok_or_else(|| format!("truck not found: {truck_id}"))?;

    println!("{} ({})", truck.name, truck.cuisine);
    println!(
        "{} {:.1} ({} reviews)",
        render_stars(rating_stars(truck.rating)),
        truck.rating,
        truck.review_count
    );
    println!("{}", truck.description);
    println!();
    println!("Location: {}", truck.location.text);
    if let Some(coordinates) = truck.location.coordinates {
        println!("          {:.4}, {:.4}", coordinates.lat, coordinates.lng);
    }
    let status = if is_open_now(&truck.schedule) {
        "Open now"
    } else {
        "Closed now"
    };
    match today_schedule(&truck.schedule) {
        Some(today) if !today.is_closed() => {
            println!("Today: {} - {} ({status})", today.open, today.close)
        }
        _ => println!("Today: Closed ({status})"),
    }

    println!();
    println!("Hours:");
    for entry in &truck.schedule {
        if entry.is_closed() {
            println!("  {:<10} Closed", entry.day);
        } else {
            println!("  {:<10} {} - {}", entry.day, entry.open, entry.close);
        }
    }

    println!();
    println!("Menu:");
    for item in &truck.menu {
        let popular = if item.is_popular() { " *" } else { "" };
        println!(
            "  {:<24} {:>9}{popular}",
            item.name,
            format_currency(item.price)
        );
        println!("    {}", item.description);
        if let Some(dietary) = item.dietary.as_deref().filter(|tags| !tags.is_empty()) {
            let tags = dietary.iter().map(|tag| tag.as_str()).collect::<Vec<_>>();
            println!("    [{}]", tags.join(", "));
        }
    }

    println!();
    println!("Contact: {} | {}", truck.contact.phone, truck.contact.email);
    if let Some(instagram) = &truck.contact.instagram {
        println!("         {instagram}");
    }
    Ok(())
}

fn reviews(catalog: &Catalog, args: &ReviewsArgs) -> Result<(), String> {
    let truck = catalog
        .truck(&args.truck_id)
        .ok_or_else(|| format!("truck not found: {}", args.truck_id))?;
    let truck_reviews = catalog.reviews_for(&truck.id);
    let summary = rating_summary(truck_reviews.iter().copied());

    println!(
        "{}: {:.1} out of 5, based on {} reviews",
        truck.name, summary.average, summary.count
    );
    for stars in (1..=5u8).rev() {
        println!("  {stars} stars: {}", summary.count_for(stars));
    }

    let query = ReviewQuery {
        rating: args.rating,
        sort: args.sort.into(),
    };
    let listed = list_reviews(truck_reviews.iter().copied(), &query);
    if listed.is_empty() {
        match args.rating {
            Some(rating) => println!("No {rating}-star reviews found."),
            None => println!("No reviews yet."),
        }
        return Ok(());
    }
    for review in listed {
        println!();
        print_review(review);
    }
    Ok(())
}

fn print_review(review: &Review) {
    println!(
        "{} {} - {}",
        render_stars(rating_stars(f64::from(review.rating))),
        review.username,
        format_date(&review.date)
    );
    println!("  {}", review.comment);
    if let Some(reply) = &review.reply {
        println!("  Owner reply ({}): {}", format_date(&reply.date), reply.text);
    }
}

fn print_suggestions(catalog: &Catalog, query: &str) {
    println!("Cuisines:");
    for cuisine in cuisine_suggestions(query) {
        println!("  {cuisine}");
    }
    println!("Locations:");
    let locations = catalog.location_options();
    for location in suggest(&locations, query, DEFAULT_SUGGESTION_LIMIT) {
        println!("  {location}");
    }
}

fn print_plans() {
    for plan in plans() {
        let badge = if plan.popular { " (most popular)" } else { "" };
        println!(
            "{} - {}/month{badge}",
            plan.tier,
            format_currency(plan.monthly_price)
        );
        println!("  {}", plan.description);
        for feature in plan.features {
            println!("  + {feature}");
        }
        for limitation in plan.limitations {
            println!("  - {limitation}");
        }
    }
    println!();
    println!("Prices as of {}", Local::now().date_naive().format("%b %-d, %Y"));
}

fn render_stars(breakdown: StarBreakdown) -> String {
    let mut stars = "★".repeat(usize::from(breakdown.full));
    stars.push_str(&"½".repeat(usize::from(breakdown.half)));
    stars.push_str(&"☆".repeat(usize::from(breakdown.empty)));
    stars
}
