use crate::core::renderer::{render_list, RenderOutcome};
use crate::domain::model::{ContainerBinding, DirectoryDocument, ItemLabels};
use crate::domain::ports::{Alert, DataSource, Document};
use crate::utils::error::{DirectoryError, Result};

pub const DEFAULT_DATA_RESOURCE: &str = "data.json";

/// 載入失敗時顯示給使用者的固定訊息
pub const LOAD_FAILURE_ALERT: &str =
    "错误：请通过 Live Server 或部署到服务器环境运行，否则无法读取本地数据。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub binding: ContainerBinding,
    pub outcome: RenderOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    pub categories: Vec<CategoryReport>,
}

impl RenderReport {
    pub fn rendered_items(&self) -> usize {
        self.categories
            .iter()
            .map(|c| match c.outcome {
                RenderOutcome::Rendered { items } => items,
                RenderOutcome::MissingContainer => 0,
            })
            .sum()
    }

    pub fn missing_containers(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.outcome == RenderOutcome::MissingContainer)
            .map(|c| c.binding.container.as_str())
            .collect()
    }
}

/// 終止狀態
#[derive(Debug)]
pub enum LoadState {
    Rendered(RenderReport),
    Failed(DirectoryError),
}

impl LoadState {
    pub fn phase(&self) -> LoadPhase {
        match self {
            Self::Rendered(_) => LoadPhase::Rendered,
            Self::Failed(_) => LoadPhase::Failed,
        }
    }
}

/// 一次性的「抓取 → 解析 → 逐分類渲染」流程。`run` 會消耗自身，所以同一個實例只能執行一次。
pub struct LoadOrchestrator<S: DataSource, A: Alert> {
    source: S,
    alert: A,
    resource: String,
    bindings: Vec<ContainerBinding>,
    labels: ItemLabels,
}

impl<S: DataSource, A: Alert> LoadOrchestrator<S, A> {
    pub fn new(source: S, alert: A, bindings: Vec<ContainerBinding>) -> Self {
        Self {
            source,
            alert,
            resource: DEFAULT_DATA_RESOURCE.to_string(),
            bindings,
            labels: ItemLabels::default(),
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn with_labels(mut self, labels: ItemLabels) -> Self {
        self.labels = labels;
        self
    }

    async fn load_document(&self) -> Result<DirectoryDocument> {
        tracing::debug!("Fetching {}", self.resource);
        let body = self.source.fetch(&self.resource).await?;
        tracing::debug!("Received {} bytes", body.len());
        let document = DirectoryDocument::parse(&body, &self.bindings)?;
        tracing::debug!("Parsed {} records", document.total_records());
        Ok(document)
    }

    pub async fn run<D: Document + ?Sized>(self, page: &mut D) -> LoadState {
        log_transition(LoadPhase::Idle, LoadPhase::Loading);

        let document = match self.load_document().await {
            Ok(document) => document,
            Err(e) => {
                match &e {
                    DirectoryError::FetchStatus { status } => {
                        tracing::error!("无法读取本地 JSON 文件: HTTP error! status: {}", status)
                    }
                    DirectoryError::Network { message } => {
                        tracing::error!("无法读取本地 JSON 文件: network failure: {}", message)
                    }
                    DirectoryError::Parse { message } => {
                        tracing::error!("无法读取本地 JSON 文件: parse failure: {}", message)
                    }
                    other => tracing::error!("无法读取本地 JSON 文件: {}", other),
                }
                self.alert.alert(LOAD_FAILURE_ALERT);
                log_transition(LoadPhase::Loading, LoadPhase::Failed);
                return LoadState::Failed(e);
            }
        };

        tracing::info!("成功读取本地数据文件。开始渲染所有列表...");

        let mut report = RenderReport::default();
        for binding in &self.bindings {
            let records = document.records(&binding.key);
            let outcome = render_list(page, records, &binding.container, &self.labels);
            report.categories.push(CategoryReport {
                binding: binding.clone(),
                outcome,
            });
        }

        tracing::info!(
            "✅ Rendered {} records across {} categories",
            report.rendered_items(),
            report.categories.len()
        );
        log_transition(LoadPhase::Loading, LoadPhase::Rendered);
        LoadState::Rendered(report)
    }
}

fn log_transition(from: LoadPhase, to: LoadPhase) {
    tracing::debug!("Load phase: {:?} -> {:?}", from, to);
}
