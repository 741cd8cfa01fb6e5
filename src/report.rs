use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

use crate::darksky::HourlySample;
use crate::units::{direction, speed};
use crate::weather::{icon, Units};

pub const ROW_LABELS: [&str; 6] = ["時間", "天気", "気温", "降水確率(%)", "風向", "風速(m/s)"];

/// The local hour whose sample closes a day.
pub const LAST_HOUR: u32 = 23;

/// One day of hourly samples laid out as table rows.
///
/// Each row starts with its label from [`ROW_LABELS`] followed by one cell per sample,
/// so every row always has the same length.
#[derive(Debug, Clone)]
pub struct DayReport<Tz: TimeZone> {
    tz: Tz,
    units: Units,
    date: Option<NaiveDate>,
    rows: [Vec<String>; 6],
}

impl<Tz: TimeZone> DayReport<Tz> {
    pub fn new(tz: Tz, units: Units) -> Self {
        Self {
            tz,
            units,
            date: None,
            rows: ROW_LABELS.map(|label| vec![label.to_string()]),
        }
    }

    pub fn reset(&mut self) {
        self.date = None;
        for (row, label) in self.rows.iter_mut().zip(ROW_LABELS) {
            row.clear();
            row.push(label.to_string());
        }
    }

    /// Appends one column for `sample` and returns its local hour, or `None` if the
    /// timestamp is out of range, in which case nothing is added.
    pub fn add_sample(&mut self, sample: &HourlySample) -> Option<u32> {
        let time = DateTime::from_timestamp(sample.time, 0)?.with_timezone(&self.tz);
        let hour = time.hour();
        self.date.get_or_insert(time.date_naive());

        let wind_speed = match self.units {
            Units::Metric => sample.wind_speed,
            Units::Imperial => speed::mph2ms(sample.wind_speed),
        };
        let cells = [
            format!("{hour:02}"),
            icon(&sample.icon).to_string(),
            format!("{:.1}", sample.temperature as f32),
            format!("{}", sample.precip_probability as f32 * 1000.0),
            direction::degree_to_compass(sample.wind_bearing).to_string(),
            format!("{wind_speed:.1}"),
        ];
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
        Some(hour)
    }

    /// Date of the first sample added since the last reset.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn rows(&self) -> &[Vec<String>; 6] {
        &self.rows
    }

    /// Number of samples added since the last reset.
    pub fn len(&self) -> usize {
        self.rows[0].len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2024-03-10T00:00:00Z
    const MIDNIGHT: i64 = 1_710_028_800;

    fn sample(time: i64) -> HourlySample {
        HourlySample {
            time,
            icon: "rain".to_string(),
            temperature: 12.34,
            precip_probability: 0.35,
            wind_bearing: 180.0,
            wind_speed: 10.0,
        }
    }

    fn column(report: &DayReport<impl TimeZone>, index: usize) -> Vec<&str> {
        report.rows().iter().map(|row| row[index].as_str()).collect()
    }

    #[test]
    fn test_new_report_has_labels_only() {
        let report = DayReport::new(Utc, Units::Metric);
        assert!(report.is_empty());
        assert_eq!(report.date(), None);
        assert_eq!(column(&report, 0), ROW_LABELS.to_vec());
    }

    #[test]
    fn test_add_sample_metric() {
        let mut report = DayReport::new(Utc, Units::Metric);
        assert_eq!(report.add_sample(&sample(MIDNIGHT + 5 * 3600)), Some(5));
        assert_eq!(
            column(&report, 1),
            vec!["05", "☔", "12.3", "350", "南", "10.0"]
        );
        assert_eq!(report.date(), NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn test_add_sample_imperial_converts_wind() {
        let mut report = DayReport::new(Utc, Units::Imperial);
        report.add_sample(&sample(MIDNIGHT));
        assert_eq!(report.rows()[5][1], "4.5");
    }

    #[test]
    fn test_unknown_icon_is_blank() {
        let mut report = DayReport::new(Utc, Units::Metric);
        let mut unknown = sample(MIDNIGHT);
        unknown.icon = "tornado".to_string();
        report.add_sample(&unknown);
        assert_eq!(report.rows()[1][1], "");
    }

    #[test]
    fn test_hour_uses_time_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let mut report = DayReport::new(tokyo, Units::Metric);
        assert_eq!(report.add_sample(&sample(MIDNIGHT + 14 * 3600)), Some(23));
        assert_eq!(report.date(), NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(report.add_sample(&sample(MIDNIGHT + 15 * 3600)), Some(0));
        // the header keeps the first sample's date
        assert_eq!(report.date(), NaiveDate::from_ymd_opt(2024, 3, 10));
    }

    #[test]
    fn test_rows_stay_aligned() {
        let mut report = DayReport::new(Utc, Units::Metric);
        for i in 0..30 {
            report.add_sample(&sample(MIDNIGHT + i * 3600));
            assert!(report.rows().iter().all(|row| row.len() == i as usize + 2));
        }
        assert_eq!(report.len(), 30);
    }

    #[test]
    fn test_out_of_range_timestamp_is_skipped() {
        let mut report = DayReport::new(Utc, Units::Metric);
        assert_eq!(report.add_sample(&sample(i64::MAX)), None);
        assert!(report.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut report = DayReport::new(Utc, Units::Metric);
        report.add_sample(&sample(MIDNIGHT));
        report.add_sample(&sample(MIDNIGHT + 3600));
        report.reset();
        assert!(report.is_empty());
        assert_eq!(report.date(), None);
        assert_eq!(column(&report, 0), ROW_LABELS.to_vec());
    }
}
