use crate::filter::{FilterState, ListingType, PricePeriod};
use crate::models::{Location, Property, Source};
use crate::search::traits::PropertySearch;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::info;

/// Offline search over a bundled set of listings
pub struct SampleListings {
    properties: Vec<Property>,
}

impl SampleListings {
    /// Sample listings dated relative to now
    pub fn new() -> Self {
        Self::dated(Utc::now())
    }

    /// Sample listings dated relative to `now`
    pub fn dated(now: DateTime<Utc>) -> Self {
        Self {
            properties: sample_properties(now),
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl Default for SampleListings {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySearch for SampleListings {
    async fn search(&self, filter: &FilterState) -> Result<Vec<Property>> {
        let now = Utc::now();
        let found: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| filter.matches(p, now))
            .cloned()
            .collect();
        info!("{} of {} sample listings match", found.len(), self.properties.len());
        Ok(found)
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

struct Seed {
    id: &'static str,
    area: &'static str,
    title: &'static str,
    listing_type: ListingType,
    commercial: bool,
    price: i64,
    price_period: PricePeriod,
    property_type: &'static str,
    bedrooms: &'static str,
    bathrooms: &'static str,
    furnishing: Option<&'static str>,
    amenities: &'static [&'static str],
    size_sqft: i32,
    days_listed: i64,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "sample_marina_1",
        area: "Dubai Marina",
        title: "Marina view two bedroom",
        listing_type: ListingType::Rent,
        commercial: false,
        price: 8_500,
        price_period: PricePeriod::Monthly,
        property_type: "Apartment",
        bedrooms: "2",
        bathrooms: "2",
        furnishing: Some("Furnished"),
        amenities: &["pool", "gym", "balcony", "parking"],
        size_sqft: 1_150,
        days_listed: 2,
    },
    Seed {
        id: "sample_jvc_2",
        area: "Jumeirah Village Circle",
        title: "Bright studio near park",
        listing_type: ListingType::Rent,
        commercial: false,
        price: 3_900,
        price_period: PricePeriod::Monthly,
        property_type: "Apartment",
        bedrooms: "Studio",
        bathrooms: "1",
        furnishing: Some("Unfurnished"),
        amenities: &["gym", "security"],
        size_sqft: 420,
        days_listed: 10,
    },
    Seed {
        id: "sample_springs_3",
        area: "The Springs",
        title: "Family townhouse on the lake",
        listing_type: ListingType::Buy,
        commercial: false,
        price: 3_450_000,
        price_period: PricePeriod::Monthly,
        property_type: "Townhouse",
        bedrooms: "3",
        bathrooms: "4",
        furnishing: Some("Unfurnished"),
        amenities: &["pool", "kids_play", "maid_room", "parking"],
        size_sqft: 2_400,
        days_listed: 21,
    },
    Seed {
        id: "sample_palm_4",
        area: "Palm Jumeirah",
        title: "Beachfront villa with private pool",
        listing_type: ListingType::Buy,
        commercial: false,
        price: 28_000_000,
        price_period: PricePeriod::Monthly,
        property_type: "Villa",
        bedrooms: "6",
        bathrooms: "7+",
        furnishing: Some("Partly furnished"),
        amenities: &["pool", "gym", "water_view", "maid_room", "security", "study"],
        size_sqft: 9_800,
        days_listed: 45,
    },
    Seed {
        id: "sample_downtown_5",
        area: "Downtown Dubai",
        title: "Serviced hotel apartment, burj view",
        listing_type: ListingType::Rent,
        commercial: false,
        price: 650,
        price_period: PricePeriod::Daily,
        property_type: "Hotel Apartment",
        bedrooms: "1",
        bathrooms: "1",
        furnishing: Some("Furnished"),
        amenities: &["pool", "gym", "central_ac"],
        size_sqft: 780,
        days_listed: 1,
    },
    Seed {
        id: "sample_bay_6",
        area: "Business Bay",
        title: "Full floor office, canal view",
        listing_type: ListingType::Rent,
        commercial: true,
        price: 95_000,
        price_period: PricePeriod::Monthly,
        property_type: "Full Floor",
        bedrooms: "Studio",
        bathrooms: "4",
        furnishing: None,
        amenities: &["parking", "central_ac", "security", "water_view"],
        size_sqft: 12_500,
        days_listed: 5,
    },
];

fn sample_properties(now: DateTime<Utc>) -> Vec<Property> {
    SEEDS
        .iter()
        .map(|s| Property {
            id: s.id.to_string(),
            source: Source::Sample,
            location: Location {
                city: "Dubai".to_string(),
                area: Some(s.area.to_string()),
                latitude: None,
                longitude: None,
            },
            title: s.title.to_string(),
            listing_type: s.listing_type,
            commercial: s.commercial,
            price: s.price,
            price_period: s.price_period,
            property_type: s.property_type.to_string(),
            bedrooms: s.bedrooms.to_string(),
            bathrooms: s.bathrooms.to_string(),
            furnishing: s.furnishing.map(str::to_string),
            amenities: s.amenities.iter().map(|a| a.to_string()).collect(),
            size_sqft: s.size_sqft,
            description: format!("{} in {}.", s.title, s.area),
            images: vec![],
            url: format!("https://listings.example.com/{}", s.id),
            listed_at: now - Duration::days(s.days_listed),
            raw_data: json!({ "sample": true }),
        })
        .collect()
}
