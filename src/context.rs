use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Languages a day can be scaffolded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Rs,
    Ts,
    Go,
}

impl Lang {
    /// Directory name the language's day packages live under.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Rs => "rs",
            Self::Ts => "ts",
            Self::Go => "go",
        }
    }
}

impl Display for Lang {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.dir_name())
    }
}

/// Rendering context for one scaffolded day.
///
/// Every template of an invocation is rendered against the same context, so
/// the generated module name is consistent across the test, benchmark and
/// entry-point files.
#[derive(Debug, Clone, Serialize)]
pub struct DayContext {
    pub day: u32,
    pub year: u32,
    /// Package/module name, e.g. `day_05`.
    pub package_name: String,
    /// Human-readable name, e.g. `Day 05`.
    pub display_name: String,
    /// File name of the puzzle input under the data directory.
    pub data_file: String,
}

impl DayContext {
    pub fn new(day: u32, year: u32) -> Self {
        let package_name = format!("day_{day:02}");
        let display_name = format!("Day {day:02}");
        let data_file = format!("{package_name}.txt");

        Self { day, year, package_name, display_name, data_file }
    }

    /// The context as answers for the template renderer.
    pub fn to_answers(&self) -> serde_json::Value {
        json!(self)
    }

    /// URL of the day's puzzle page.
    pub fn day_url(&self, base_url: &str) -> String {
        format!("{}/{}/day/{}", base_url, self.year, self.day)
    }
}
