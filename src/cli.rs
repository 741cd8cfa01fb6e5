use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::weather::Units;

const ABOUT: &str = "Hourly weather forecast in the terminal";

const LONG_ABOUT: &str = "
Prints the hourly forecast for your home location as one table per day: weather, temperature,
chance of rain, wind direction and wind speed.

The API key and location are read from ~/.config/jpweather/config.yml:

    forecastApiKey: <your key>
    home:
      lat: \"35.6895\"
      lng: \"139.6917\"

Any Dark Sky compatible API works; set `baseUrl` in the same file to switch providers.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(short, long, help = "Configuration file (default: ~/.config/jpweather/config.yml)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 2, help = "Number of days to show")]
    pub days: usize,

    #[arg(short, long, value_enum, help = "Unit system to request, overrides the config file")]
    pub units: Option<Units>,
}
