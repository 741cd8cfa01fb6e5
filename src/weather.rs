use clap::ValueEnum;
use serde::Deserialize;

/// The condition codes reported in the `icon` field of a Dark Sky style forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Hail,
    Thunderstorm,
}

const CODES: [(&str, Condition); 12] = [
    ("clear-day", Condition::ClearDay),
    ("clear-night", Condition::ClearNight),
    ("rain", Condition::Rain),
    ("snow", Condition::Snow),
    ("sleet", Condition::Sleet),
    ("wind", Condition::Wind),
    ("fog", Condition::Fog),
    ("cloudy", Condition::Cloudy),
    ("partly-cloudy-day", Condition::PartlyCloudyDay),
    ("partly-cloudy-night", Condition::PartlyCloudyNight),
    ("hail", Condition::Hail),
    ("thunderstorm", Condition::Thunderstorm),
];

impl Condition {
    pub fn from_code(code: &str) -> Option<Self> {
        CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|&(_, condition)| condition)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Condition::ClearDay => "☀",
            Condition::ClearNight => "🌙",
            Condition::Rain => "☔",
            Condition::Snow => "☃",
            Condition::Sleet => "❄",
            Condition::Wind => "🍃",
            Condition::Fog => "🌁",
            Condition::Cloudy => "☁",
            Condition::PartlyCloudyDay => "☀/☁",
            Condition::PartlyCloudyNight => "🌙/☁",
            Condition::Hail => "❅",
            Condition::Thunderstorm => "☇",
        }
    }
}

/// Glyph for a raw condition code. Codes outside the known set render blank.
pub fn icon(code: &str) -> &'static str {
    Condition::from_code(code).map_or("", Condition::glyph)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the `units` query parameter understood by the forecast API.
    pub fn query_value(self) -> &'static str {
        match self {
            Units::Metric => "si",
            Units::Imperial => "us",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for (code, condition) in CODES {
            assert_eq!(Condition::from_code(code), Some(condition));
            assert_eq!(icon(code), condition.glyph());
            assert!(!condition.glyph().is_empty());
        }
        assert_eq!(icon("rain"), "☔");
        assert_eq!(icon("partly-cloudy-night"), "🌙/☁");
    }

    #[test]
    fn test_unknown_code_is_blank() {
        assert_eq!(icon("tornado"), "");
        assert_eq!(icon(""), "");
        assert_eq!(icon("Rain"), "");
    }

    #[test]
    fn test_units_query_value() {
        assert_eq!(Units::default(), Units::Metric);
        assert_eq!(Units::Metric.query_value(), "si");
        assert_eq!(Units::Imperial.query_value(), "us");
    }
}
