pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{alert::ConsoleAlert, http::HttpDataSource, page::HtmlPage, storage::LocalStorage};
pub use config::{CliConfig, TomlConfig};
pub use core::orchestrator::{LoadOrchestrator, LoadPhase, LoadState, LOAD_FAILURE_ALERT};
pub use core::renderer::{render_list, RenderOutcome};
pub use domain::model::{default_bindings, BusinessRecord, ContainerBinding, DirectoryDocument};
pub use utils::error::{DirectoryError, Result};
