// 👑 Monarch Record - One entry of the kings list
// Short JSON keys (nm, cty, hse, yrs) are mapped to readable field names

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

// ============================================================================
// MONARCH
// ============================================================================

/// Monarch - a single parsed record from the source payload
///
/// Every text field is optional: the source uses `null` freely.
/// Consumers apply the empty-string default at the point of use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monarch {
    /// Informational only, never used in computations
    #[serde(default)]
    pub id: i64,

    #[serde(rename = "nm", default)]
    pub name: Option<String>,

    #[serde(rename = "cty", default)]
    pub city: Option<String>,

    #[serde(rename = "hse", default)]
    pub house: Option<String>,

    /// "<start>-<end>", "<start>-" (still reigning), "<start>" or nothing
    #[serde(rename = "yrs", default)]
    pub reign_years: Option<String>,
}

impl Monarch {
    pub fn new(id: i64, name: &str) -> Self {
        Monarch {
            id,
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Builder pattern: add house
    pub fn with_house(mut self, house: &str) -> Self {
        self.house = Some(house.to_string());
        self
    }

    /// Builder pattern: add city
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Builder pattern: add reign years string
    pub fn with_reign_years(mut self, years: &str) -> Self {
        self.reign_years = Some(years.to_string());
        self
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn house_or_empty(&self) -> &str {
        self.house.as_deref().unwrap_or("")
    }

    /// Reign length in years, using today's year for open-ended reigns
    pub fn reign_length(&self) -> i32 {
        self.reign_length_as_of(current_year())
    }

    /// Reign length in years
    ///
    /// # Rules:
    /// 1. Missing or empty → 0
    /// 2. No dash ("1500") → 0
    /// 3. Non-numeric start year → 0
    /// 4. Missing or non-numeric end year → `current_year` is the end
    /// 5. Otherwise `end - start`, negatives included
    ///
    /// # Examples:
    /// ```
    /// use monarch_stats::Monarch;
    ///
    /// let m = Monarch::new(1, "Edward I").with_reign_years("1272-1307");
    /// assert_eq!(m.reign_length_as_of(2024), 35);
    ///
    /// let m = Monarch::new(2, "Elizabeth II").with_reign_years("1952-");
    /// assert_eq!(m.reign_length_as_of(2000), 48);
    /// ```
    pub fn reign_length_as_of(&self, current_year: i32) -> i32 {
        let years = match self.reign_years.as_deref() {
            Some(y) if !y.is_empty() => y,
            _ => return 0,
        };

        let mut parts = years.split('-');
        let start = parts.next().unwrap_or("");

        // Only the starting year is known
        let end = match parts.next() {
            Some(end) => end,
            None => return 0,
        };

        let start_year = match parse_year(start) {
            Some(year) => year,
            None => return 0,
        };

        // No ending year means the monarch is still reigning
        let end_year = parse_year(end).unwrap_or(current_year);

        end_year - start_year
    }

    /// First token of the name, split on the first space
    ///
    /// Returns None only when the name itself is absent.
    pub fn first_name(&self) -> Option<&str> {
        let name = self.name.as_deref()?;
        if name.contains(' ') {
            name.split(' ').next()
        } else {
            Some(name)
        }
    }
}

/// Parse a year token, tolerating surrounding whitespace
pub fn parse_year(token: &str) -> Option<i32> {
    token.trim().parse::<i32>().ok()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

// ============================================================================
// TESTS
// ============================================================================
