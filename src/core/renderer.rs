use crate::core::markup::Element;
use crate::domain::model::{BusinessRecord, ItemLabels};
use crate::domain::ports::Document;
use crate::utils::error::DirectoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { items: usize },
    MissingContainer,
}

/// 單筆商家的列表項目
pub fn build_item(record: &BusinessRecord, labels: &ItemLabels) -> Element {
    Element::new("li")
        .text(format!("{}{}", record.name, labels.separator))
        .text(labels.address.clone())
        .child(
            Element::new("a")
                .attr("href", record.maps_link.clone())
                .text(record.address.clone()),
        )
        .text(format!("{}{}", labels.separator, labels.phone))
        .child(
            Element::new("a")
                .attr("href", format!("{}{}", labels.tel_prefix, record.phone))
                .text(record.phone.clone()),
        )
}

/// 將整組資料渲染到指定容器，容器原有內容會被整段替換。
///
/// 找不到容器時只記錄錯誤並回傳 [`RenderOutcome::MissingContainer`]，頁面不做任何變動。
pub fn render_list<D: Document + ?Sized>(
    page: &mut D,
    records: &[BusinessRecord],
    container_id: &str,
    labels: &ItemLabels,
) -> RenderOutcome {
    let Some(tag) = page.container_tag(container_id) else {
        let e = DirectoryError::ContainerNotFound {
            id: container_id.to_string(),
        };
        tracing::error!("Error: {}", e);
        return RenderOutcome::MissingContainer;
    };

    let items: Vec<Element> = records.iter().map(|r| build_item(r, labels)).collect();
    let count = items.len();

    // 容器本身是列表就直接放 <li>，否則包一層 <ul>
    let markup = if matches!(tag.as_str(), "ul" | "ol") {
        items.iter().map(Element::to_html).collect::<String>()
    } else {
        let mut list = Element::new("ul");
        for item in items {
            list.push(item);
        }
        list.to_html()
    };

    if let Err(e) = page.replace_content(container_id, &markup) {
        tracing::error!("Failed to update #{}: {}", container_id, e);
        return RenderOutcome::MissingContainer;
    }

    tracing::debug!("Rendered {} items into #{}", count, container_id);
    RenderOutcome::Rendered { items: count }
}
