use crate::domain::model::{ContainerBinding, ItemLabels};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn origin(&self) -> &str;
    fn data_resource(&self) -> &str;
    fn page_template(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn bindings(&self) -> &[ContainerBinding];
    fn labels(&self) -> &ItemLabels;
}

/// 取得頁面來源下的資源
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>>;
}

/// 渲染器需要的頁面操作：依 id 找元素、整段替換元素內容
pub trait Document {
    /// 找不到時回傳 None；找到時回傳元素的標籤名稱（小寫）
    fn container_tag(&self, id: &str) -> Option<String>;
    fn replace_content(&mut self, id: &str, markup: &str) -> Result<()>;
}

/// 阻斷式的使用者提示
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}
