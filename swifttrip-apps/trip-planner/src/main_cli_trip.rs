//!  SwiftTrip
//!
//!  Copyright (C) 2026  The SwiftTrip developers
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! CLI for a full trip search: flights, hotels and cars in one pass.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use std::cmp::max;
use swifttrip_trip_planner::{
    Airport, AppState, CabinClass, CriteriaUpdate, DateSuggestion, FlightItinerary,
    PreferencesFile, SearchOutcome, SystemUrlOpener, TravelApiClient, TripSelection, TripStep,
    DEFAULT_BASE_URL, dispatch_booking, fmt_duration, quick_date_suggestions, run_search,
    stops_label,
};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "swifttrip-trip")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Origin airport or city (free text, resolved via autocomplete)
    #[arg(short, long)]
    from: String,

    /// Destination airport or city (free text, resolved via autocomplete)
    #[arg(short, long)]
    to: String,

    /// Departure date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short, long, conflicts_with = "quick")]
    date: Option<String>,

    /// Return date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short = 'R', long, conflicts_with = "quick")]
    return_date: Option<String>,

    /// Quick date range: weekend, next-week, two-weeks
    #[arg(short, long)]
    quick: Option<String>,

    /// Cabin class: economy, premium_economy, business, first
    #[arg(short, long, default_value = "economy")]
    cabin: String,

    /// Number of adults
    #[arg(short, long, default_value = "1")]
    adults: u32,

    /// Skip the hotel search (included by default)
    #[arg(long)]
    skip_hotel: bool,

    /// Include a car rental search
    #[arg(long)]
    car: bool,

    /// Direct flights only
    #[arg(long)]
    direct_only: bool,

    /// Select the Nth flight result (1-based)
    #[arg(long)]
    pick_flight: Option<usize>,

    /// Select the Nth hotel result (1-based)
    #[arg(long)]
    pick_hotel: Option<usize>,

    /// Select the Nth car result (1-based)
    #[arg(long)]
    pick_car: Option<usize>,

    /// Open the booking page of every selected item
    #[arg(long)]
    book: bool,

    /// Preferences file (persists home airport, defaults and recent searches)
    #[arg(long, default_value = ".swifttrip-preferences.json")]
    prefs_file: String,

    /// Travel search API key (falls back to SWIFTTRIP_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Travel search API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Parse date string to NaiveDate
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .context(format!(
            "Invalid date format: {}. Use YYYY-MM-DD or YYYY/MM/DD",
            s
        ))
}

/// Resolve a quick range name to one of the generated suggestions
fn pick_quick_range(name: &str, today: NaiveDate) -> Result<DateSuggestion> {
    let suggestions = quick_date_suggestions(today);
    let index = match name.to_lowercase().as_str() {
        "weekend" | "this-weekend" => 0,
        "next-week" | "nextweek" => 1,
        "two-weeks" | "2-weeks" | "twoweeks" => 2,
        _ => bail!(
            "Invalid quick range: {}. Use: weekend, next-week, two-weeks",
            name
        ),
    };
    Ok(suggestions[index].clone())
}

/// First autocomplete candidate wins
async fn resolve_airport(client: &TravelApiClient, query: &str) -> Result<Airport> {
    use swifttrip_trip_planner::SearchGateway;
    let candidates = client
        .suggest_locations(query)
        .await
        .with_context(|| format!("Location lookup failed for '{}'", query))?;
    candidates
        .into_iter()
        .next()
        .with_context(|| format!("No airport found for '{}'", query))
}

/// Get terminal width for responsive tables
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(100))
}

/// Format departure/arrival times of the first outbound leg.
fn fmt_times(itin: &FlightItinerary) -> String {
    match (itin.outbound.first(), itin.outbound.last()) {
        (Some(first), Some(last)) => format!(
            "{} → {}",
            first.departure.format("%H:%M"),
            last.arrival.format("%H:%M")
        ),
        _ => "??:?? → ??:??".to_string(),
    }
}

fn fmt_route(itin: &FlightItinerary) -> String {
    match (itin.outbound.first(), itin.outbound.last()) {
        (Some(first), Some(last)) => format!("{} → {}", first.origin, last.destination),
        _ => "?? → ??".to_string(),
    }
}

fn fmt_badge(itin: &FlightItinerary) -> &'static str {
    match itin.badge {
        Some(swifttrip_trip_planner::Badge::Fastest) => " [fastest]",
        Some(swifttrip_trip_planner::Badge::Cheapest) => " [cheapest]",
        Some(swifttrip_trip_planner::Badge::Best) => " [best]",
        None => "",
    }
}

fn outbound_stops(itin: &FlightItinerary) -> u32 {
    itin.outbound.first().map(|leg| leg.stops).unwrap_or(0)
}

/// Terminal-aware column widths for the flights table
fn calc_flight_columns(flights: &[FlightItinerary]) -> (usize, usize, usize, usize) {
    let mut max_airline = 7;
    let mut max_route = 10;
    let mut max_times = 14;

    for itin in flights {
        max_airline = max(max_airline, itin.airlines.join(", ").len());
        max_route = max(max_route, fmt_route(itin).len());
        max_times = max(max_times, fmt_times(itin).len());
    }

    let available = get_terminal_width().saturating_sub(30);
    let total = max_airline + max_route + max_times;
    if total > available && available > 40 {
        let ratio = available as f64 / total as f64;
        max_airline = max((max_airline as f64 * ratio).floor() as usize, 6);
        max_route = max((max_route as f64 * ratio).floor() as usize, 8);
        max_times = max((max_times as f64 * ratio).floor() as usize, 10);
    }

    (4, max_airline, max_route, max_times)
}

fn render_flights(flights: &[FlightItinerary], step: usize) {
    println!(
        "\n✈️   Step {} — Choose Your Flight ({} found)",
        step,
        flights.len()
    );
    println!("{}", dash_bar());

    if flights.is_empty() {
        println!("  No flights found. Try adjusting your search.");
        return;
    }

    let (rw, aw, rtw, tw) = calc_flight_columns(flights);
    println!(
        "  {:>rw$}  {:<aw$}  {:<rtw$}  {:<tw$}  {:<9}  {:<9}  PRICE",
        "#", "AIRLINE", "ROUTE", "DEP → ARR", "DURATION", "STOPS"
    );

    for (i, itin) in flights.iter().enumerate() {
        let airline = itin.airlines.join(", ");
        println!(
            "  {:>rw$}  {:<aw$}  {:<rtw$}  {:<tw$}  {:<9}  {:<9}  {}{}",
            i + 1,
            airline,
            fmt_route(itin),
            fmt_times(itin),
            fmt_duration(itin.total_duration_minutes),
            stops_label(outbound_stops(itin)),
            itin.price.formatted,
            fmt_badge(itin),
        );
    }
}

fn render_hotels(hotels: &[swifttrip_trip_planner::Hotel], step: usize) {
    println!("\n🏨  Step {} — Choose Your Hotel ({} found)", step, hotels.len());
    println!("{}", dash_bar());

    if hotels.is_empty() {
        println!("  No hotels found. Try adjusting your search.");
        return;
    }

    let name_width = hotels
        .iter()
        .map(|h| h.name.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 40);
    println!(
        "  {:>4}  {:<name_width$}  {:<6}  {:<7}  {:<20}  PRICE/NIGHT",
        "#", "NAME", "STARS", "RATING", "DISTANCE"
    );

    for (i, hotel) in hotels.iter().enumerate() {
        let mut name = hotel.name.clone();
        if name.len() > name_width {
            name.truncate(name_width);
        }
        println!(
            "  {:>4}  {:<name_width$}  {:<6}  {:<7.1}  {:<20}  {}",
            i + 1,
            name,
            "★".repeat(hotel.stars as usize),
            hotel.rating,
            hotel.distance,
            hotel.price.formatted,
        );
    }
}

fn render_cars(cars: &[swifttrip_trip_planner::CarRental], step: usize) {
    println!("\n🚗  Step {} — Choose Your Car ({} found)", step, cars.len());
    println!("{}", dash_bar());

    if cars.is_empty() {
        println!("  No cars found. Try adjusting your search.");
        return;
    }

    println!(
        "  {:>4}  {:<20}  {:<16}  {:<10}  {:<10}  {:<12}  PRICE",
        "#", "COMPANY", "TYPE", "CATEGORY", "TRANS", "SEATS/DOORS"
    );

    for (i, car) in cars.iter().enumerate() {
        println!(
            "  {:>4}  {:<20}  {:<16}  {:<10}  {:<10}  {:<12}  {}",
            i + 1,
            car.company,
            car.car_type,
            car.category,
            car.transmission.label(),
            format!("{}/{}", car.passengers, car.doors),
            car.price.formatted,
        );
    }
}

fn render_summary(selection: &TripSelection) {
    if !selection.summary_visible() {
        return;
    }

    println!("\n{}", "=".repeat(get_terminal_width().min(100)));
    let mut parts = Vec::new();
    if let Some(flight) = &selection.flight {
        parts.push(format!("✈️  Flight {}", flight.price.formatted));
    }
    if let Some(hotel) = &selection.hotel {
        parts.push(format!("🏨 Hotel {}", hotel.price.formatted));
    }
    if let Some(car) = &selection.car {
        parts.push(format!("🚗 Car {}", car.price.formatted));
    }
    println!("  {}", parts.join("   "));
    println!("  💰 Total Trip Cost: {}", selection.trip_total_display());
    println!("{}", "=".repeat(get_terminal_width().min(100)));
}

fn pick<T: Clone>(items: &[T], rank: usize, what: &str) -> Result<Option<T>> {
    if rank == 0 || rank > items.len() {
        bail!(
            "Cannot pick {} #{}: only {} available",
            what,
            rank,
            items.len()
        );
    }
    Ok(items.get(rank - 1).cloned())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting swifttrip-trip CLI");
    tracing::debug!("Args: {:?}", args);

    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("SWIFTTRIP_API_KEY").ok())
        .context("An API key is required (--api-key or SWIFTTRIP_API_KEY)")?;
    let client = TravelApiClient::new(&args.base_url, api_key)?;

    let prefs_file = PreferencesFile::new(&args.prefs_file);
    let preferences = prefs_file.load().context("Failed to load preferences")?;
    let mut state = AppState::with_preferences(preferences);

    // Dates: explicit or one of the quick suggestions
    let (departure, return_date) = match (&args.quick, &args.date) {
        (Some(name), _) => {
            let today = chrono::Local::now().date_naive();
            let suggestion = pick_quick_range(name, today)?;
            tracing::info!(
                "Quick range '{}': {} - {}",
                suggestion.label,
                suggestion.departure,
                suggestion.return_date
            );
            (suggestion.departure, Some(suggestion.return_date))
        }
        (None, Some(date)) => {
            let departure = parse_date(date)?;
            let return_date = args.return_date.as_deref().map(parse_date).transpose()?;
            (departure, return_date)
        }
        (None, None) => bail!("Provide --date or --quick"),
    };

    let cabin: CabinClass = args
        .cabin
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let origin = resolve_airport(&client, &args.from).await?;
    let destination = resolve_airport(&client, &args.to).await?;
    tracing::info!(
        "Resolved: {} ({}) -> {} ({})",
        origin.name,
        origin.iata,
        destination.name,
        destination.iata
    );

    state.criteria.apply(CriteriaUpdate {
        origin: Some(origin),
        destination: Some(destination),
        departure_date: Some(departure),
        return_date,
        adults: Some(args.adults),
        cabin_class: Some(cabin),
        direct_only: args.direct_only.then_some(true),
        include_hotel: args.skip_hotel.then_some(false),
        include_car: args.car.then_some(true),
    });

    let outcome = run_search(&client, &mut state).await;
    match &outcome {
        SearchOutcome::NotReady => bail!("Origin, destination and departure date are required"),
        SearchOutcome::Completed { failures } => {
            for failure in failures {
                eprintln!("⚠️   {} search failed: {}", failure.category, failure.error);
            }
        }
    }

    for (index, step) in state.criteria.enabled_steps().iter().enumerate() {
        match step {
            TripStep::Flight => render_flights(&state.flights, index + 1),
            TripStep::Hotel => render_hotels(&state.hotels, index + 1),
            TripStep::Car => render_cars(&state.cars, index + 1),
        }
    }

    if let Some(rank) = args.pick_flight {
        state.selection.select_flight(pick(&state.flights, rank, "flight")?);
    }
    if let Some(rank) = args.pick_hotel {
        state.selection.select_hotel(pick(&state.hotels, rank, "hotel")?);
    }
    if let Some(rank) = args.pick_car {
        state.selection.select_car(pick(&state.cars, rank, "car")?);
    }

    render_summary(&state.selection);

    if args.book {
        let dispatched = dispatch_booking(&state.selection, &SystemUrlOpener);
        if dispatched.is_empty() {
            println!("\nNothing selected to book.");
        } else {
            println!("\n🔗 Booking handoff:");
            for booking in &dispatched {
                let marker = if booking.opened { "✓" } else { "✗" };
                println!("  {} {}: {}", marker, booking.category, booking.url);
            }
        }
    }

    prefs_file
        .save(&state.preferences)
        .context("Failed to save preferences")?;

    Ok(())
}
