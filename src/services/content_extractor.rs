//! 正文提取服务 - 业务能力层
//!
//! 按文档顺序遍历正文容器中的结构化元素，归类为文本 / 代码 / 列表

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::ContentPart;
use crate::services::markup;

static STRUCTURAL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p, li, td, h1, h2, h3, h4, pre, code, ul, ol").expect("静态选择器")
});
static LIST_ITEMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("静态选择器"));
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("静态选择器"));

/// 内容必须超过的字符数
const MIN_CONTENT_CHARS: usize = 10;
/// 含有版权符号的文本视为页脚
const COPYRIGHT: char = '©';

/// 已作为整体提取的容器，内部元素默认不再单独输出
const CAPTURING_TAGS: &[&str] = &["ul", "ol", "pre"];

/// 正文提取器
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    container: Option<Selector>,
    emit_nested: bool,
}

impl ContentExtractor {
    /// `container_id` 无法构成合法选择器时直接使用 body
    pub fn new(container_id: &str, emit_nested: bool) -> Self {
        Self {
            container: Selector::parse(&format!(r#"div[id="{}"]"#, container_id)).ok(),
            emit_nested,
        }
    }

    /// 提取一篇文章的内容；没有合格元素时返回空列表
    pub fn extract(&self, source: &str) -> Vec<ContentPart> {
        let document = markup::parse(source);
        let container = self.container_of(&document);

        container
            .select(&STRUCTURAL)
            .filter(|element| self.emit_nested || !nested_in_capture(element, &container))
            .filter_map(classify)
            .collect()
    }

    fn container_of<'a>(&self, document: &'a Html) -> ElementRef<'a> {
        self.container
            .as_ref()
            .and_then(|selector| document.select(selector).next())
            .or_else(|| document.select(&BODY).next())
            .unwrap_or_else(|| document.root_element())
    }
}

/// 元素是否位于容器内的 ul / ol / pre 之中
fn nested_in_capture(element: &ElementRef, container: &ElementRef) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != container.id())
        .filter_map(|node| node.value().as_element())
        .any(|ancestor| CAPTURING_TAGS.contains(&ancestor.name()))
}

fn qualifies(text: &str) -> bool {
    markup::char_len(text) > MIN_CONTENT_CHARS && !text.contains(COPYRIGHT)
}

fn classify(element: ElementRef) -> Option<ContentPart> {
    let text = markup::visible_text(&element);
    if !qualifies(&text) {
        return None;
    }

    match element.value().name() {
        "pre" | "code" => Some(ContentPart::Code(markup::raw_text(&element))),
        "ul" | "ol" => {
            let items: Vec<String> = element
                .select(&LIST_ITEMS)
                .map(|li| markup::visible_text(&li))
                .filter(|item| markup::char_len(item) > MIN_CONTENT_CHARS)
                .collect();
            (!items.is_empty()).then_some(ContentPart::List(items))
        }
        _ => Some(ContentPart::Text(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContentExtractor {
        ContentExtractor::new("DeltaPlaceHolderMain", false)
    }

    #[test]
    fn paragraph_list_and_code_in_document_order() {
        let source = r#"<html><body>
            <nav><p>Navigation menu entry</p></nav>
            <div id="DeltaPlaceHolderMain">
                <p>Fifteen chars!!</p>
                <ul>
                    <li>First list item text</li>
                    <li>Second list item text</li>
                    <li>Third list item text</li>
                </ul>
                <pre><code>ipmitool lan print 1</code></pre>
            </div>
        </body></html>"#;

        let parts = extractor().extract(source);
        assert_eq!(
            parts,
            vec![
                ContentPart::Text("Fifteen chars!!".into()),
                ContentPart::List(vec![
                    "First list item text".into(),
                    "Second list item text".into(),
                    "Third list item text".into(),
                ]),
                ContentPart::Code("ipmitool lan print 1".into()),
            ]
        );
    }

    #[test]
    fn short_and_copyright_text_is_dropped() {
        let source = r#"<body>
            <p>Ten chars!</p>
            <p>© 2025 Example Computer, Inc.</p>
            <h2>Troubleshooting steps</h2>
        </body>"#;
        let parts = extractor().extract(source);
        assert_eq!(parts, vec![ContentPart::Text("Troubleshooting steps".into())]);
    }

    #[test]
    fn falls_back_to_body_without_container() {
        let parts = extractor().extract("<body><table><tr><td>Firmware version 3.2</td></tr></table></body>");
        assert_eq!(parts, vec![ContentPart::Text("Firmware version 3.2".into())]);
    }

    #[test]
    fn no_qualifying_elements_gives_empty_list() {
        let parts = extractor().extract(r#"<body><div id="DeltaPlaceHolderMain"><span>Just a span with text</span></div></body>"#);
        assert!(parts.is_empty());
    }

    #[test]
    fn nested_items_repeat_when_enabled() {
        let source = "<body><ol><li>Open the BMC web console</li><li>Sign in as admin user</li></ol></body>";
        let parts = ContentExtractor::new("DeltaPlaceHolderMain", true).extract(source);
        let kinds: Vec<_> = parts.iter().map(ContentPart::kind).collect();
        assert_eq!(kinds, ["list", "text", "text"]);
    }

    #[test]
    fn list_without_long_items_is_skipped() {
        let source = "<body><ul><li>short one</li><li>short two</li></ul></body>";
        assert!(extractor().extract(source).is_empty());
    }
}
