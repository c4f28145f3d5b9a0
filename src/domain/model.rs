use crate::utils::error::{DirectoryError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// 目錄中的一筆商家資料
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "mapsLink")]
    pub maps_link: String,
    #[serde(default, deserialize_with = "phone_text")]
    pub phone: String,
}

// 電話可能以數字形式寫在 JSON 裡
fn phone_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Phone::deserialize(deserializer)? {
        Phone::Text(s) => s,
        Phone::Number(n) => n.to_string(),
        Phone::Missing(()) => String::new(),
    })
}

/// 分類鍵與頁面容器 id 的對應
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerBinding {
    pub key: String,
    pub container: String,
}

impl ContainerBinding {
    pub fn new(key: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            container: container.into(),
        }
    }
}

/// 預設的六個分類，依渲染順序排列
pub const DEFAULT_BINDINGS: [(&str, &str); 6] = [
    ("foodBusinesses", "food-list"),
    ("hardwareBusinesses", "hardware-list"),
    ("emergencyBusinesses", "emergency-list"),
    ("policeBusinesses", "police-list"),
    ("fireBusinesses", "fire-list"),
    ("governmentBusinesses", "government-list"),
];

pub fn default_bindings() -> Vec<ContainerBinding> {
    DEFAULT_BINDINGS
        .iter()
        .map(|(key, container)| ContainerBinding::new(*key, *container))
        .collect()
}

/// 列表項目中的固定文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemLabels {
    pub separator: String,
    pub address: String,
    pub phone: String,
    pub tel_prefix: String,
}

impl Default for ItemLabels {
    fn default() -> Self {
        Self {
            separator: "，".to_string(),
            address: "地址：".to_string(),
            phone: "电话：".to_string(),
            tel_prefix: "tel:+60".to_string(),
        }
    }
}

/// 解析後的 data.json，只保留有綁定的分類
#[derive(Debug, Clone, Default)]
pub struct DirectoryDocument {
    categories: HashMap<String, Vec<BusinessRecord>>,
}

impl DirectoryDocument {
    /// 解析回應內容。頂層必須是物件；綁定的鍵缺少或為 null 時視為空陣列。
    pub fn parse(body: &[u8], bindings: &[ContainerBinding]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;

        let serde_json::Value::Object(mut root) = value else {
            return Err(DirectoryError::Parse {
                message: "top-level value is not an object".to_string(),
            });
        };

        let mut categories = HashMap::new();
        for binding in bindings {
            let records = match root.remove(&binding.key) {
                None | Some(serde_json::Value::Null) => Vec::new(),
                Some(raw) => serde_json::from_value::<Vec<BusinessRecord>>(raw).map_err(|e| {
                    DirectoryError::Parse {
                        message: format!("category '{}': {}", binding.key, e),
                    }
                })?,
            };
            categories.insert(binding.key.clone(), records);
        }

        Ok(Self { categories })
    }

    pub fn records(&self, key: &str) -> &[BusinessRecord] {
        self.categories.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_records(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
