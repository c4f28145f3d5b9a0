pub mod toml_config;

use crate::core::{ConfigProvider, ContainerBinding, ItemLabels};
use crate::domain::model::default_bindings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

/// 頁面來源允許的 scheme；file 會通過驗證，但抓取時必定失敗
pub const ORIGIN_SCHEMES: [&str; 3] = ["http", "https", "file"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "biz-directory"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render business directory listings from data.json into a page")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "http://127.0.0.1:5500/"))]
    pub origin: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "data.json"))]
    pub resource: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "index.html"))]
    pub page: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "public/index.html"))]
    pub output: String,

    #[cfg_attr(feature = "cli", arg(long, help = "TOML config file; overrides the other options"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub timeout_seconds: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(skip = default_bindings()))]
    #[serde(default = "default_bindings")]
    pub bindings: Vec<ContainerBinding>,

    #[cfg_attr(feature = "cli", arg(skip))]
    #[serde(default)]
    pub labels: ItemLabels,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:5500/".to_string(),
            resource: crate::core::orchestrator::DEFAULT_DATA_RESOURCE.to_string(),
            page: "index.html".to_string(),
            output: "public/index.html".to_string(),
            config: None,
            timeout_seconds: None,
            verbose: false,
            json_logs: false,
            bindings: default_bindings(),
            labels: ItemLabels::default(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn data_resource(&self) -> &str {
        &self.resource
    }

    fn page_template(&self) -> &str {
        &self.page
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn bindings(&self) -> &[ContainerBinding] {
        &self.bindings
    }

    fn labels(&self) -> &ItemLabels {
        &self.labels
    }
}

/// 兩種配置共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_url("origin", config.origin(), &ORIGIN_SCHEMES)?;
    validation::validate_non_empty_string("resource", config.data_resource())?;
    validation::validate_path("page", config.page_template())?;
    validation::validate_path("output", config.output_path())?;
    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_positive_number("timeout_seconds", timeout, 1)?;
    }
    validation::validate_bindings("bindings", config.bindings())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
