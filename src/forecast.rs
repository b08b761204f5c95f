use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

/// Number of days returned by the list endpoint.
pub const FORECAST_DAYS: usize = 5;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn celsius_to_fahrenheit(temperature_c: i32) -> i32 {
    32 + (temperature_c as f64 / 0.5556) as i32
}

/// Builds `count` records for the days following `today`, one per day.
/// The sequence stops early at `NaiveDate::MAX`.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
    description: Option<&str>,
) -> Vec<ForecastRecord> {
    (1..=count as u64)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let temperature_c = rng.random_range(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            ForecastRecord {
                date,
                temperature_c,
                temperature_f: celsius_to_fahrenheit(temperature_c),
                summary: SUMMARIES[rng.random_range(0..SUMMARIES.len())].to_string(),
                description: description.map(str::to_string),
            }
        })
        .collect()
}

pub fn generate_forecast(count: usize, description: Option<&str>) -> Vec<ForecastRecord> {
    let mut rng = rand::rng();
    generate(&mut rng, Local::now().date_naive(), count, description)
}
