// Walks through one search and booking against the seed catalog.
//
// Usage: booking_demo [destination] [sort-mode]
// LOG_LEVEL selects the tracing filter (trace, debug, info, warn, error).
use anyhow::{anyhow, Context, Result};
use hotel_booking_engine::{
    check_in_instructions, compute_nights, filter_and_sort, format_money, BookingBuilder,
    CatalogSource, Clock, DiscountInfo, EngineConfig, GuestInfo, RandomIdGenerator,
    SearchCriteria, SortMode, StaticCatalog, SystemClock,
};
use std::sync::Arc;
use tracing::info;

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(log_level.as_str())
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let destination = args.next().unwrap_or_default();
    let sort_mode: SortMode = args
        .next()
        .map(|s| s.parse::<SortMode>())
        .transpose()
        .context("parsing sort mode")?
        .unwrap_or_default();

    let config = match std::env::var("ENGINE_CONFIG") {
        Ok(json) => EngineConfig::from_json(&json).context("loading ENGINE_CONFIG")?,
        Err(_) => EngineConfig::default(),
    };

    let clock = Arc::new(SystemClock);
    let catalog = StaticCatalog::seeded();
    let criteria = SearchCriteria::defaults(clock.today(), &config)
        .with_destination(destination)
        .with_sort_mode(sort_mode);

    info!("Searching {} hotels", catalog.hotels().len());
    let results = filter_and_sort(catalog.hotels(), &criteria);
    if results.is_empty() {
        println!("No hotels match your search.");
        return Ok(());
    }

    let nights = compute_nights(criteria.check_in, criteria.check_out);
    for hotel in &results {
        let discount = DiscountInfo::for_stay(hotel, nights)
            .and_then(|d| d.label)
            .map(|label| format!(" [{}]", label))
            .unwrap_or_default();
        println!(
            "{:<26} {:<12} {:>4.1}* {:>10}/night{}",
            hotel.name,
            hotel.location,
            hotel.rating,
            format_money(hotel.price),
            discount
        );
    }

    let hotel = &results[0];
    let room = hotel
        .default_room()
        .ok_or_else(|| anyhow!("hotel {} has no rooms", hotel.id))?;

    let builder = BookingBuilder::new(
        config.clone(),
        Arc::new(RandomIdGenerator::from_config(&config)?),
        clock,
    )?;
    let guest = GuestInfo::new("Demo Guest", "guest@example.com", "+1 555 0100");
    let booking = builder.build(hotel, &room.room_type, &criteria, &guest)?;

    println!();
    println!("{}", booking.price);
    println!();
    println!("{}", booking.summary_text());

    let instructions = check_in_instructions(&booking);
    println!();
    println!("Check-in: {}", instructions.time);
    for step in &instructions.process {
        println!("  - {}", step);
    }
    println!("Parking: {}", instructions.parking);

    println!();
    println!("{}", booking.share_text());

    Ok(())
}
