use crate::adapters::http::HttpDataSource;
use crate::adapters::page::HtmlPage;
use crate::core::orchestrator::{LoadOrchestrator, LoadState};
use crate::core::{Alert, ConfigProvider, Storage};
use crate::utils::error::Result;

/// 啟動時呼叫一次：讀取頁面模板、載入資料並渲染，成功時寫出頁面。
///
/// 模板讀寫失敗以 `Err` 回傳；資料載入失敗屬於流程本身的結果，以 [`LoadState::Failed`] 回傳。
pub async fn init<C, S, A>(config: &C, storage: &S, alert: A) -> Result<LoadState>
where
    C: ConfigProvider + ?Sized,
    S: Storage,
    A: Alert,
{
    tracing::debug!("Reading page template: {}", config.page_template());
    let template = storage.read_file(config.page_template()).await?;
    let mut page = HtmlPage::from_bytes(&template)?;

    let source = HttpDataSource::new(config.origin())?.with_timeout(config.timeout_seconds());
    let orchestrator = LoadOrchestrator::new(source, alert, config.bindings().to_vec())
        .with_resource(config.data_resource())
        .with_labels(config.labels().clone());

    let state = orchestrator.run(&mut page).await;

    if let LoadState::Rendered(report) = &state {
        for id in report.missing_containers() {
            tracing::warn!("Page template has no container #{}", id);
        }
        storage
            .write_file(config.output_path(), page.to_html().as_bytes())
            .await?;
        tracing::info!("📁 Page written to: {}", config.output_path());
    }

    Ok(state)
}
