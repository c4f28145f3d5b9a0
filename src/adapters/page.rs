use crate::domain::ports::Document;
use crate::utils::error::{DirectoryError, Result};
use ego_tree::{NodeMut, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};

/// 解析後的 HTML 頁面，支援依 id 找元素並替換其內容
#[derive(Debug, Clone)]
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn new(html: impl AsRef<str>) -> Self {
        Self {
            document: Html::parse_document(html.as_ref()),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let html = std::str::from_utf8(bytes).map_err(|e| DirectoryError::Template {
            message: format!("page is not valid UTF-8: {}", e),
        })?;
        Ok(Self::new(html))
    }

    /// 序列化整份頁面
    pub fn to_html(&self) -> String {
        self.document.html()
    }

    /// 取得元素目前的內容
    pub fn content_of(&self, id: &str) -> Option<String> {
        self.find(id).map(|el| el.inner_html())
    }

    // 第一個符合的元素，與 querySelector 相同
    fn find(&self, id: &str) -> Option<ElementRef<'_>> {
        let selector = match id_selector(id) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::error!("Failed to look up #{}: {}", id, e);
                return None;
            }
        };
        self.document.select(&selector).next()
    }
}

fn id_selector(id: &str) -> Result<Selector> {
    let quoted = id.replace('\\', "\\\\").replace('"', "\\\"");
    Selector::parse(&format!("[id=\"{}\"]", quoted)).map_err(|e| DirectoryError::Template {
        message: format!("invalid container id '{}': {}", id, e),
    })
}

// 將另一棵樹的節點連同子孫複製到 parent 底下
fn graft(parent: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    let mut copy = parent.append(source.value().clone());
    for child in source.children() {
        graft(&mut copy, child);
    }
}

impl Document for HtmlPage {
    fn container_tag(&self, id: &str) -> Option<String> {
        self.find(id)
            .map(|el| el.value().name().to_ascii_lowercase())
    }

    fn replace_content(&mut self, id: &str, markup: &str) -> Result<()> {
        let not_found = || DirectoryError::ContainerNotFound { id: id.to_string() };
        let node_id = self.find(id).map(|el| el.id()).ok_or_else(not_found)?;

        let fragment = Html::parse_fragment(markup);
        let mut container = self.document.tree.get_mut(node_id).ok_or_else(not_found)?;

        while let Some(mut child) = container.first_child() {
            child.detach();
        }
        for child in fragment.root_element().children() {
            graft(&mut container, child);
        }
        Ok(())
    }
}
