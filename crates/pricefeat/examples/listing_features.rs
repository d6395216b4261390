//! Example: Fit, Persist and Serve Listing Features
//!
//! This example fits a feature learner on a small training partition, writes
//! the learned state to disk, restores it into a fresh learner and enriches
//! an unseen partition with it:
//! - Brand and category statistics come from the training rows only
//! - The restored learner produces the same table as the original
//!
//! Set `RUST_LOG=info` to see the fit/save/load events.

use polars::prelude::*;
use pricefeat::engineer::{Estimator, FeatureConfig, FeatureEngineer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("=== Listing Features ===\n");

    // =========================================================================
    // TRAINING PARTITION
    // =========================================================================

    let train = df! {
        "name" => &[
            "Nike Air Max 90", "Nike running shorts", "Levis 501 jeans",
            "Vintage Levis jacket 1994", "Acme candle set", "Nike hoodie NWT",
        ],
        "item_description" => &[
            Some("Brand new with tags, never worn"), Some("worn twice"), None,
            Some("retro denim, great condition"), Some("sealed"), Some("new with tags"),
        ],
        "brand_name" => &[
            Some("Nike"), Some("nike"), Some("Levis"), Some("Levis"), None, Some("NIKE"),
        ],
        "category_name" => &[
            Some("Men/Shoes/Athletic"), Some("Men/Athletic Apparel/Shorts"),
            Some("Women/Jeans/Slim"), Some("Women/Coats & Jackets/Denim"),
            Some("Home/Home Décor/Candles"), None,
        ],
        "item_condition_id" => &[1_i64, 3, 2, 3, 1, 1],
        "price" => &[Some(85.0), Some(12.0), Some(30.0), Some(48.0), None, Some(40.0)],
    }?;

    let config = FeatureConfig {
        min_brand_low: 2,
        min_brand_mid: 3,
        min_cat3: 1,
        replace_rare_brands: true,
        top_n_popular_brands: 1,
        ..FeatureConfig::default()
    };
    let mut engineer = FeatureEngineer::try_with_config(config)?;
    engineer.fit(&train)?;

    if let Some(artifacts) = engineer.artifacts() {
        println!("Brand counts:        {:?}", artifacts.brand_counts);
        println!("Rare (low) brands:   {:?}", artifacts.rare_low_brands);
        println!("Rare (mid) brands:   {:?}", artifacts.rare_mid_brands);
        println!("Popular brands:      {:?}", artifacts.top_brands);
        println!("cat1 median prices:  {:?}", artifacts.cat1_median_price);
        println!("Global median price: {}\n", artifacts.global_median_price);
    }

    // =========================================================================
    // PERSIST AND RESTORE
    // =========================================================================

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("listing_features.json");
    engineer.save(&path)?;
    println!("Saved learned state to {}\n", path.display());

    let served = FeatureEngineer::load(&path)?;

    // =========================================================================
    // UNSEEN PARTITION
    // =========================================================================

    let test = df! {
        "name" => &["Nike Air Force 1", "Y2K butterfly top", "Phone case"],
        "item_description" => &["brand new", "vintage 2003 piece", "unworn"],
        "brand_name" => &[Some("Nike"), Some("Levis"), Some("Otterbox")],
        "category_name" => &["Men/Shoes/Athletic", "Women/Tops & Blouses/Tank", "Electronics"],
        "item_condition_id" => &["1", "2", "?"],
        "price" => &[Some("90"), None, Some("15.5")],
    }?;

    let features = served.transform(&test)?;
    assert!(features.equals_missing(&engineer.transform(&test)?));

    println!(
        "{}",
        features.select([
            "brand_name",
            "brand_bucket",
            "is_popular_brand",
            "cat1_brand_bucket",
            "is_new",
            "is_vintage",
            "year_present",
            "cat1_median_price",
            "log_price",
        ])?
    );

    Ok(())
}
