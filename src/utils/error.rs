use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Cannot find list container with ID: {id}")]
    ContainerNotFound { id: String },

    #[error("HTTP error! status: {status}")]
    FetchStatus { status: u16 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page template error: {message}")]
    Template { message: String },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FetchStatus { .. } | Self::Network { .. } => ErrorCategory::Network,
            Self::Parse { .. } => ErrorCategory::Data,
            Self::Config { .. } | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Io,
            Self::ContainerNotFound { .. } | Self::Template { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一分類缺容器只影響該分類
            Self::ContainerNotFound { .. } => ErrorSeverity::Low,
            Self::FetchStatus { .. } | Self::Network { .. } => ErrorSeverity::Medium,
            Self::Parse { .. } | Self::Template { .. } => ErrorSeverity::High,
            Self::Config { .. } | Self::InvalidConfigValue { .. } | Self::Io(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 載入階段的失敗（狀態碼、網路、解析）對使用者顯示同一個提示
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchStatus { .. } | Self::Network { .. } | Self::Parse { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ContainerNotFound { id } => format!("頁面缺少列表容器 #{}", id),
            Self::FetchStatus { .. } | Self::Network { .. } | Self::Parse { .. } => {
                "無法讀取目錄資料檔".to_string()
            }
            Self::Io(e) => format!("檔案讀寫失敗: {}", e),
            Self::Config { message } => format!("配置錯誤: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("配置欄位 '{}' 無效: {}", field, reason)
            }
            Self::Template { message } => format!("頁面模板錯誤: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ContainerNotFound { id } => {
                format!("在頁面模板中加入 id=\"{}\" 的元素", id)
            }
            Self::FetchStatus { status } if *status == 404 => {
                "確認 data.json 位於頁面來源的根目錄".to_string()
            }
            Self::FetchStatus { .. } | Self::Network { .. } => {
                "請通過 Live Server 或部署到服務器環境運行".to_string()
            }
            Self::Parse { .. } => "檢查 data.json 是否為合法的 JSON 物件".to_string(),
            Self::Io(_) => "檢查檔案路徑與權限".to_string(),
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "檢查命令列參數或 TOML 配置檔".to_string()
            }
            Self::Template { .. } => "檢查頁面模板的 HTML 結構".to_string(),
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) if !status.is_success() => Self::FetchStatus {
                status: status.as_u16(),
            },
            _ => Self::Network {
                message: e.to_string(),
            },
        }
    }
}
