//! Forecast panel for the city step.
//!
//! Forecasts arrive embedded in the page as a JSON array per city. They are
//! re-parsed on every city change and never persisted.
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

const GOOD_BELOW: f64 = 45.0;
const ACCEPTABLE_UP_TO: f64 = 65.0;

/// One day of forecast as embedded in the city markup.
///
/// Numeric fields are loose: a missing or `null` temperature reads as zero
/// and the weather code may be written as a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<f64>,
    #[serde(default)]
    pub picto: String,
    #[serde(default)]
    pub precipitation_sum: Option<f64>,
    #[serde(default)]
    pub wind_speed_max: Option<f64>,
}

/// Parse the serialized forecast array carried by a city option.
///
/// `null`, an empty string or malformed JSON all yield an empty list. Records
/// are read one by one and an unreadable record only drops that day.
#[must_use]
pub fn parse_forecast(raw: &str) -> Vec<ForecastDay> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw) {
        Ok(records) => readable_days(records.unwrap_or_default()),
        Err(err) => {
            log::warn!("unreadable forecast data: {err}");
            Vec::new()
        }
    }
}

fn readable_days(records: Vec<serde_json::Value>) -> Vec<ForecastDay> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(day) => Some(day),
            Err(err) => {
                log::warn!("skipping forecast day {i}: {err}");
                None
            }
        })
        .collect()
}

/// `deserialize_with` helper for embedded forecast lists.
///
/// # Errors
///
/// Fails only when the value is not an array; bad records are skipped.
pub fn deserialize_forecast<'de, D>(deserializer: D) -> Result<Vec<ForecastDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(readable_days(records.unwrap_or_default()))
}

/// Like [`deserialize_forecast`], keeping an absent list apart from an empty one.
///
/// # Errors
///
/// Fails only when the value is neither `null` nor an array.
pub fn deserialize_optional_forecast<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<ForecastDay>>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(records.map(readable_days))
}

/// Severity bucket derived from the numeric weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherSeverity {
    Good,
    Acceptable,
    Bad,
}

impl WeatherSeverity {
    #[must_use]
    pub const fn classify(code: f64) -> Self {
        if code < GOOD_BELOW {
            Self::Good
        } else if code <= ACCEPTABLE_UP_TO {
            Self::Acceptable
        } else {
            Self::Bad
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Good => "good-weather",
            Self::Acceptable => "acceptable-weather",
            Self::Bad => "bad-weather",
        }
    }
}

/// Coarse weather category used to pick an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pictogram {
    Sun,
    Storm,
    Rain,
    Snow,
    Fog,
    Cloud,
    Unavailable,
}

impl Pictogram {
    pub const ALL: [Self; 7] = [
        Self::Sun,
        Self::Storm,
        Self::Rain,
        Self::Snow,
        Self::Fog,
        Self::Cloud,
        Self::Unavailable,
    ];

    /// Unknown keys map to [`Pictogram::Unavailable`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "sun" => Self::Sun,
            "storm" => Self::Storm,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "fog" => Self::Fog,
            "cloud" => Self::Cloud,
            _ => Self::Unavailable,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Storm => "storm",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Cloud => "cloud",
            Self::Unavailable => "indisponible",
        }
    }

    #[must_use]
    pub const fn advisory(self) -> Advisory {
        match self {
            Self::Sun => Advisory::new("fa-check-circle", "Parfait pour randonner", self),
            Self::Storm => Advisory::new("fa-exclamation-triangle", "Éviter les randos", self),
            Self::Rain | Self::Snow => {
                Advisory::new("fa-info-circle", "Équipements conseillés", self)
            }
            Self::Fog => Advisory::new("fa-eye-slash", "Avec prudence", self),
            Self::Cloud => Advisory::new("fa-cloud", "Conditions correctes", self),
            Self::Unavailable => {
                Advisory::new("fa-question-circle", "Météo indisponible", self)
            }
        }
    }
}

/// Icon and hiking advice shown under a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub pictogram: Pictogram,
    /// Font Awesome icon class.
    pub icon_class: &'static str,
    /// Default (French) advice text.
    pub message: &'static str,
}

impl Advisory {
    const fn new(icon_class: &'static str, message: &'static str, pictogram: Pictogram) -> Self {
        Self {
            pictogram,
            icon_class,
            message,
        }
    }

    /// Translation key for the advice text.
    #[must_use]
    pub fn i18n_key(&self) -> String {
        format!("weather.advice.{}", self.pictogram.key())
    }
}

#[must_use]
pub fn advice_for(picto: &str) -> Advisory {
    Pictogram::from_key(picto).advisory()
}

/// Weekday and month names used to label forecast days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarNames {
    pub today: &'static str,
    /// Sunday first.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

impl CalendarNames {
    pub const FRENCH: Self = Self {
        today: "Aujourd'hui",
        weekdays: [
            "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
        ],
        months: [
            "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov",
            "déc",
        ],
    };

    pub const ENGLISH: Self = Self {
        today: "Today",
        weekdays: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    };

    #[must_use]
    pub fn for_lang(lang: &str) -> Self {
        if lang == "fr" {
            Self::FRENCH
        } else {
            Self::ENGLISH
        }
    }
}

/// Heading of a forecast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Dated {
        /// 0 = Sunday.
        weekday: u32,
        day: u32,
        /// 0 = January.
        month: u32,
    },
}

impl DayLabel {
    #[must_use]
    pub fn for_index(index: usize, date: NaiveDate) -> Self {
        if index == 0 {
            Self::Today
        } else {
            Self::Dated {
                weekday: date.weekday().num_days_from_sunday(),
                day: date.day(),
                month: date.month0(),
            }
        }
    }

    #[must_use]
    pub fn render(&self, names: &CalendarNames) -> String {
        match *self {
            Self::Today => names.today.to_string(),
            Self::Dated {
                weekday,
                day,
                month,
            } => {
                let weekday = names.weekdays.get(weekday as usize).copied().unwrap_or("");
                let month = names.months.get(month as usize).copied().unwrap_or("");
                format!("{weekday} {day} {month}")
            }
        }
    }
}

/// Rounds half up, like the browser's `Math.round`.
fn round_half_up(value: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (value + 0.5).floor() as i64;
    rounded
}

/// One decimal place with ties rounded up, like the browser's `toFixed(1)`.
fn one_decimal(value: f64) -> String {
    let tenths = round_half_up(value * 10.0);
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.abs();
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

/// Everything needed to draw one forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub label: DayLabel,
    pub severity: WeatherSeverity,
    pub advisory: Advisory,
    pub picto: String,
    pub temp_max: i64,
    pub temp_min: i64,
    /// One decimal place, present only when precipitation is above zero.
    pub precipitation_mm: Option<String>,
    /// Present only when wind is above zero.
    pub wind_kmh: Option<i64>,
}

impl WeatherCard {
    #[must_use]
    pub fn from_forecast(index: usize, day: &ForecastDay) -> Self {
        let precipitation = day.precipitation_sum.unwrap_or(0.0);
        let wind = day.wind_speed_max.unwrap_or(0.0);
        Self {
            label: DayLabel::for_index(index, day.date),
            severity: WeatherSeverity::classify(day.weather_code.unwrap_or(0.0)),
            advisory: advice_for(&day.picto),
            picto: day.picto.clone(),
            temp_max: round_half_up(day.temp_max.unwrap_or(0.0)),
            temp_min: round_half_up(day.temp_min.unwrap_or(0.0)),
            precipitation_mm: (precipitation > 0.0).then(|| one_decimal(precipitation)),
            wind_kmh: (wind > 0.0).then(|| round_half_up(wind)),
        }
    }

    /// Relative path of the pictogram image.
    #[must_use]
    pub fn image_path(&self) -> String {
        format!("static/images/wheather/{}.png", self.picto)
    }
}

/// The rendered forecast grid.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPanel {
    NoData,
    Days(Vec<WeatherCard>),
}

impl WeatherPanel {
    #[must_use]
    pub fn build(days: &[ForecastDay]) -> Self {
        if days.is_empty() {
            log::warn!("no forecast data available");
            return Self::NoData;
        }
        log::debug!("rendering {} forecast days", days.len());
        Self::Days(
            days.iter()
                .enumerate()
                .map(|(i, day)| WeatherCard::from_forecast(i, day))
                .collect(),
        )
    }

    #[must_use]
    pub fn cards(&self) -> &[WeatherCard] {
        match self {
            Self::NoData => &[],
            Self::Days(cards) => cards,
        }
    }
}
