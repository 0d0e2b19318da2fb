//! Calorie Tracker (caltrack)
//!
//! Daily report CLI: fetches a user's intakes and the food catalog from the
//! backend, then computes per-intake and per-day nutrient totals locally.
//!
//! Usage: caltrack <email> [YYYY-MM-DD]

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

mod api;
mod build_info;
mod models;
mod nutrition;

use api::ApiClient;
use models::Food;
use nutrition::{aggregate, aggregate_day, scale_nutrients};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so report output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("caltrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().collect();
    let email = match args.get(1) {
        Some(email) => email.clone(),
        None => {
            eprintln!("Usage: caltrack <email> [YYYY-MM-DD]");
            std::process::exit(2);
        }
    };
    let date = match args.get(2) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let client = ApiClient::from_env();
    eprintln!("Backend: {}", client.base_url());

    let profiles = Food::index_by_id(client.list_foods()?);
    tracing::info!("Loaded {} foods from catalog", profiles.len());

    let intakes = client.intakes_for_user(&email, Some(date))?;
    if intakes.is_empty() {
        println!("No intakes for {} on {}", email, date);
        return Ok(());
    }

    println!("Daily report for {} on {}", email, date);
    for intake in &intakes {
        println!("\nIntake #{}", intake.id);
        let entries = intake.entries();
        for entry in &entries {
            let profile = profiles
                .get(&entry.food_id)
                .ok_or(nutrition::AggregationError::MissingFoodProfile(entry.food_id))?;
            let scaled = scale_nutrients(profile, entry.weight)?;
            println!(
                "  {:<24} {:>7.1} g  {:>7.1} kcal",
                profile.name, entry.weight, scaled.calories
            );
        }

        let totals = aggregate(&entries, &profiles)?;
        println!(
            "  total: {:.1} kcal, {:.1} g protein, {:.1} g fats, {:.1} g carbs",
            totals.calories, totals.protein, totals.fats, totals.carbs
        );
    }

    let day = aggregate_day(&intakes, &profiles)?;
    println!(
        "\nDay totals: {:.1} kcal, {:.1} g protein, {:.1} g fats, {:.1} g carbs",
        day.calories, day.protein, day.fats, day.carbs
    );

    Ok(())
}
