//! 配置
//!
//! 优先级：命令行参数 > 配置文件 > 内置默认值

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;
use crate::error::{Result, TaproomError};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "taproom")]
#[command(about = "Browse a beer catalog and keep a list of favourites")]
pub struct CliArgs {
    #[arg(long, help = "Catalog endpoint returning a JSON array of beers")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// 合并后的运行配置
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

/// 默认配置文件路径 (~/.config/taproom/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taproom").join("config.toml"))
}

/// 从 TOML 文件加载配置，文件不存在时返回默认值
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

impl Settings {
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) if !path.exists() => {
                return Err(TaproomError::Config {
                    message: format!("config file {} does not exist", path.display()),
                });
            }
            Some(path) => load_file_config(path)?,
            None => match default_config_path() {
                Some(path) => load_file_config(&path)?,
                None => FileConfig::default(),
            },
        };

        let settings = Self::merge(args, file);
        settings.validate()?;
        Ok(settings)
    }

    pub fn merge(args: &CliArgs, file: FileConfig) -> Self {
        Self {
            endpoint: args
                .endpoint
                .clone()
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            log_file: args.log_file.clone().or(file.log_file),
            verbose: args.verbose,
        }
    }

    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| TaproomError::Config {
            message: format!("invalid endpoint {:?}: {}", self.endpoint, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TaproomError::Config {
                message: format!("endpoint must use http or https, got {}", scheme),
            }),
        }
    }
}
