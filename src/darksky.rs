use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::error::Error;
use crate::weather::Units;

const USER_AGENT: &str = "jpweather";
const EXCLUDE: &str = "currently,minutely,daily,alerts,flags";

#[derive(Deserialize, Debug, Default)]
pub struct Forecast {
    #[serde(default)]
    pub hourly: Hourly,
}

#[derive(Deserialize, Debug, Default)]
pub struct Hourly {
    #[serde(default)]
    pub data: Vec<HourlySample>,
}

/// One hour of forecast data. Fields the API leaves out default to zero.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HourlySample {
    /// Unix timestamp, seconds
    pub time: i64,
    pub icon: String,
    pub temperature: f64,
    /// Fraction, 0 to 1
    pub precip_probability: f64,
    /// Degrees
    pub wind_bearing: f64,
    /// m/s for metric requests, mph for imperial ones
    pub wind_speed: f64,
}

/// Anything that can produce an hourly forecast for the configured location.
pub trait ForecastSource {
    fn fetch(&self, config: &Config, units: Units) -> Result<Forecast, Error>;
}

/// Client for Dark Sky compatible APIs (Pirate Weather and friends).
pub struct DarkSky;

impl DarkSky {
    pub fn url(config: &Config) -> String {
        format!(
            "{}/{}/{},{}",
            config.base_url.trim_end_matches('/'),
            config.forecast_api_key,
            config.home.lat,
            config.home.lng
        )
    }
}

impl ForecastSource for DarkSky {
    fn fetch(&self, config: &Config, units: Units) -> Result<Forecast, Error> {
        let url = Self::url(config);
        log::debug!(
            "requesting {} forecast for {},{}",
            units.query_value(),
            config.home.lat,
            config.home.lng
        );
        let forecast: Forecast = get_web_json(&url, units)
            .and_then(Response::error_for_status)
            .and_then(Response::json)
            .map_err(|err| Error::Fetch(err.without_url().into()))?;
        log::debug!("received {} hourly samples", forecast.hourly.data.len());
        Ok(forecast)
    }
}

fn get_web_json(url: &str, units: Units) -> Result<Response, reqwest::Error> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    client
        .get(url)
        .query(&[("units", units.query_value()), ("exclude", EXCLUDE)])
        .send()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_forecast() {
        let json = r#"{
            "latitude": 35.6895,
            "longitude": 139.6917,
            "timezone": "Asia/Tokyo",
            "hourly": {
                "summary": "Rain",
                "icon": "rain",
                "data": [
                    {"time": 1700000000, "icon": "rain", "temperature": 12.34,
                     "precipProbability": 0.35, "windBearing": 200, "windSpeed": 3.2,
                     "humidity": 0.8},
                    {"time": 1700003600, "temperature": 11.0}
                ]
            }
        }"#;
        let forecast: Forecast = serde_json::from_str(json).unwrap();
        let data = &forecast.hourly.data;
        assert_eq!(data.len(), 2);
        assert_eq!(
            data[0],
            HourlySample {
                time: 1_700_000_000,
                icon: "rain".to_string(),
                temperature: 12.34,
                precip_probability: 0.35,
                wind_bearing: 200.0,
                wind_speed: 3.2,
            }
        );
        assert_eq!(data[1].icon, "");
        assert_eq!(data[1].wind_speed, 0.0);
    }

    #[test]
    fn test_deserialize_without_hourly() {
        let forecast: Forecast = serde_json::from_str(r#"{"latitude": 0}"#).unwrap();
        assert!(forecast.hourly.data.is_empty());
    }

    #[test]
    fn test_url() {
        let config = Config::parse(
            "forecastApiKey: abc\nhome: {lat: '35.1', lng: '139.2'}\nbaseUrl: http://host/forecast/\n",
        )
        .unwrap();
        assert_eq!(DarkSky::url(&config), "http://host/forecast/abc/35.1,139.2");
    }
}
