use std::ffi::OsStr;
use std::fs::File;

use anyhow::anyhow;
use justconfig::item::ValueExtractor;
use justconfig::processors::Trim;
use justconfig::sources::env::Env;
use justconfig::sources::text::ConfigText;
use justconfig::ConfPath;
use justconfig::Config;

use crate::config_processors::Unquote;

// Set some default values
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_PRODUCTS_PATH: &str = "data/products.csv";
const DEFAULT_NUM_ITEMS_TO_RECOMMEND: usize = 5;

pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub data: DataConfig,
    pub model: ModelConfig,
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub num_workers: usize,
}

pub struct LogConfig {
    pub level: String,
}

pub struct DataConfig {
    pub products_path: String,
}

pub struct ModelConfig {
    pub num_items_to_recommend: usize,
}

impl AppConfig {
    /// Reads the optional config file at `config_path`, lets a few environment
    /// variables override it and falls back to defaults for everything else.
    /// An empty or non-existing path means "defaults and environment only".
    pub fn new(config_path: &str) -> anyhow::Result<AppConfig> {
        let mut conf = Config::default();

        if let Ok(config_file) = File::open(config_path) {
            let config_text = ConfigText::new(config_file, config_path)
                .map_err(|e| anyhow!("Loading configuration file {} failed: {}", config_path, e))?;
            conf.add_source(config_text);
        }

        let config_env = Env::new(&[
            (
                ConfPath::from(&["data", "products_path"]),
                OsStr::new("PRODUCTS_DATA"),
            ),
            (ConfPath::from(&["server", "port"]), OsStr::new("PORT")),
            (
                ConfPath::from(&["server", "num_workers"]),
                OsStr::new("NUM_WORKERS"),
            ),
            (ConfPath::from(&["log", "level"]), OsStr::new("LOG_LEVEL")),
        ]);
        conf.add_source(config_env);

        Ok(AppConfig::parse(&conf))
    }

    fn parse(conf: &Config) -> AppConfig {
        AppConfig {
            server: ServerConfig::parse(conf, ConfPath::from(&["server"])),
            log: LogConfig::parse(conf, ConfPath::from(&["log"])),
            data: DataConfig::parse(conf, ConfPath::from(&["data"])),
            model: ModelConfig::parse(conf, ConfPath::from(&["model"])),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn parse(conf: &Config, path: ConfPath) -> ServerConfig {
        ServerConfig {
            host: conf
                .get(path.push("host"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_HOST)),
            port: conf
                .get(path.push("port"))
                .trim()
                .value()
                .unwrap_or(DEFAULT_PORT),
            // actix refuses to start with zero workers
            num_workers: conf
                .get(path.push("num_workers"))
                .trim()
                .value()
                .ok()
                .filter(|&qty: &usize| qty > 0)
                .unwrap_or_else(detected_cpus),
        }
    }
}

impl LogConfig {
    fn parse(conf: &Config, path: ConfPath) -> LogConfig {
        LogConfig {
            level: conf
                .get(path.push("level"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL)),
        }
    }
}

impl DataConfig {
    fn parse(conf: &Config, path: ConfPath) -> DataConfig {
        DataConfig {
            products_path: conf
                .get(path.push("products_path"))
                .unquote()
                .value()
                .unwrap_or_else(|_| String::from(DEFAULT_PRODUCTS_PATH)),
        }
    }
}

impl ModelConfig {
    fn parse(conf: &Config, path: ConfPath) -> ModelConfig {
        ModelConfig {
            num_items_to_recommend: conf
                .get(path.push("num_items_to_recommend"))
                .trim()
                .value()
                .unwrap_or(DEFAULT_NUM_ITEMS_TO_RECOMMEND),
        }
    }
}

fn detected_cpus() -> usize {
    sys_info::cpu_num()
        .ok()
        .and_then(|qty| usize::try_from(qty).ok())
        .filter(|&qty| qty > 0)
        .unwrap_or(1)
}
