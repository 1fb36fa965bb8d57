use housing_filter::config::AppConfig;
use housing_filter::coordinator::FilterCoordinator;
use housing_filter::dialogs::DialogEvent;
use housing_filter::filter::{options_for, FilterState, SetField};
use housing_filter::script;
use housing_filter::search::{HttpPropertySearch, PropertySearch, SampleListings};
use housing_filter::session::SessionContext;
use housing_filter::tabs::TabStrip;
use housing_filter::theme::Palette;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Housing Filter - scripted search session");

    // Usage: housing-filter [config.json] [script.json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => AppConfig::load(Path::new(path))?,
        None => AppConfig::default(),
    }
    .from_env()?;

    let mut session = SessionContext::anonymous();
    if let Ok(token) = std::env::var("HOUSING_FILTER_TOKEN") {
        session.login(token, None);
    }

    let mut coordinator = FilterCoordinator::new(FilterState::seeded(), config.transition());

    // Log every committed snapshot
    let mut updates = coordinator.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let active = updates.borrow_and_update().active_count();
            info!("Filter changed, {} active criteria", active);
        }
    });

    let steps = match args.get(1) {
        Some(path) => script::load(Path::new(path))?,
        None => script::demo(),
    };
    info!("Replaying {} steps", steps.len());

    for event in script::run(&mut coordinator, &steps) {
        if let DialogEvent::Closed { kind } = event {
            info!("{} dialog closed", kind.title());
        }
    }
    tokio::task::yield_now().await;

    let filter = coordinator.filter().clone();
    if filter.price_range_inverted() {
        warn!("Minimum price is above maximum price");
    }

    let palette = Palette::for_scheme(config.color_scheme);
    println!();
    for chip in TabStrip::chips(&filter, coordinator.active_kind(), palette) {
        let marker = if chip.selected { "●" } else { "○" };
        println!("{} {}", marker, chip.label);
    }
    let amenities: Vec<_> = options_for(SetField::Amenities, &filter)
        .into_iter()
        .filter(|o| o.active)
        .map(|o| o.label)
        .collect();
    if !amenities.is_empty() {
        println!("  Amenities: {}", amenities.join(", "));
    }
    println!();

    // Run the search
    let search: Box<dyn PropertySearch> = match &config.api_base_url {
        Some(url) => Box::new(HttpPropertySearch::new(url, &session)?),
        None => Box::new(SampleListings::new()),
    };
    info!("Searching {} listings...", search.source_name());
    let properties = search.search(&filter).await?;

    info!("\n✅ Found {} properties\n", properties.len());
    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({} {:?})", i + 1, property.title, property.price, property.price_period);
        println!(
            "   {} · {} beds · {} baths · {} sqft",
            property.property_type, property.bedrooms, property.bathrooms, property.size_sqft
        );
        if let Some(area) = &property.location.area {
            println!("   Area: {}", area);
        }
        println!("   Amenities: {}", property.amenities.join(", "));
        println!("   URL: {}", property.url);
        println!();
    }

    // Save the final filter snapshot
    let json = serde_json::to_string_pretty(&filter)?;
    tokio::fs::write(&config.output_path, json).await?;
    info!("💾 Saved filter to {}", config.output_path.display());

    drop(coordinator);
    watcher.await?;

    Ok(())
}
