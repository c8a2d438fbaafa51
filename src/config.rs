use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("CINELIST_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml (optional: every knob has a default)
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of CINELIST)
            .add_source(config::Environment::with_prefix("CINELIST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(unused)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file sink, written alongside the console stream.
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_file() -> String {
    String::from("scraper.log")
}

// ===============================================================================
// Scrape
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct ScrapeConfig {
    /// Locally saved chart page to read movie entries from.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
    /// Upper bound on concurrently processed entries.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// When true, fetch each movie's detail page to resolve its country.
    #[serde(default)]
    pub fetch_details: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_path: default_listing_path(),
            workers: default_workers(),
            fetch_details: false,
        }
    }
}

fn default_listing_path() -> String {
    String::from("IMDb.html")
}

fn default_workers() -> usize {
    10
}

// ===============================================================================
// Http
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct HttpConfig {
    /// Origin prepended to relative detail-page links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Desktop browser User-Agent; IMDb serves 403 to the reqwest default.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    String::from("https://www.imdb.com")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36",
    )
}

// ===============================================================================
// Export
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct ExportConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Also write a spreadsheet copy next to the CSV.
    #[serde(default = "default_true")]
    pub write_xlsx: bool,
    #[serde(default = "default_xlsx_path")]
    pub xlsx_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            write_xlsx: true,
            xlsx_path: default_xlsx_path(),
        }
    }
}

fn default_true() -> bool { true }

fn default_csv_path() -> String {
    String::from("imdb_movies.csv")
}

fn default_xlsx_path() -> String {
    String::from("imdb_movies.xlsx")
}
