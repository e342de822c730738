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

//! CLI for airport and city autocomplete lookups.

use anyhow::{Context, Result, bail};
use clap::Parser;
use swifttrip_trip_planner::{
    Airport, DEFAULT_BASE_URL, MIN_QUERY_CHARS, SearchGateway, TravelApiClient,
    popular_destinations,
};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "swifttrip-airports")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Free-text query (e.g. "lond", "new york")
    #[arg(short, long, required_unless_present = "popular")]
    query: Option<String>,

    /// List the popular quick-access destinations instead of searching
    #[arg(short, long)]
    popular: bool,

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

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn render_airports(airports: &[Airport]) {
    if airports.is_empty() {
        println!("No matching locations.");
        return;
    }

    let name_width = airports
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(10)
        .clamp(10, 40);
    println!("  {:<name_width$}  {:<18}  {:<8}  IATA", "NAME", "CITY", "COUNTRY");
    for airport in airports {
        println!(
            "  {:<name_width$}  {:<18}  {:<8}  {}",
            airport.name, airport.city, airport.country, airport.iata
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    if args.popular {
        println!("🌍 Popular destinations:\n");
        render_airports(&popular_destinations());
        return Ok(());
    }

    let query = args.query.as_deref().unwrap_or_default();
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        bail!("Query needs at least {} characters", MIN_QUERY_CHARS);
    }

    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("SWIFTTRIP_API_KEY").ok())
        .context("An API key is required (--api-key or SWIFTTRIP_API_KEY)")?;
    let client = TravelApiClient::new(&args.base_url, api_key)?;

    tracing::info!("Looking up locations for '{}'", query);
    let airports = client
        .suggest_locations(query)
        .await
        .context("Location lookup failed")?;

    println!("🔎 {} match(es) for '{}':\n", airports.len(), query);
    render_airports(&airports);

    Ok(())
}
