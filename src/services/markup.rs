//! 标记解析能力 - 业务能力层
//!
//! 对渲染后 HTML 快照的只读扫描，不接触浏览器

use scraper::{ElementRef, Html, Selector};

/// 解析一份 HTML 快照
pub fn parse(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// 在文档中按选择器找出满足条件的元素，保持文档顺序
pub fn locate_matching_elements<'a, P>(
    document: &'a Html,
    selector: &Selector,
    mut predicate: P,
) -> Vec<ElementRef<'a>>
where
    P: FnMut(&ElementRef<'a>) -> bool,
{
    document
        .select(selector)
        .filter(|element| predicate(element))
        .collect()
}

/// 元素的可见文本：每段文本节点去掉首尾空白后直接拼接
pub fn visible_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// 元素的原始文本，只去掉整体首尾空白，保留内部换行
pub fn raw_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 元素的第一个直接文本子节点
pub fn own_text(element: &ElementRef) -> Option<String> {
    element
        .children()
        .find_map(|child| child.value().as_text().map(|text| text.text.to_string()))
}

/// 字符数（不是字节数）
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn visible_text_strips_each_piece_and_joins() {
        let document = parse("<p>  Reset the <b> BMC </b>\n password </p>");
        assert_eq!(visible_text(&first(&document, "p")), "Reset theBMCpassword");
    }

    #[test]
    fn raw_text_keeps_inner_newlines() {
        let document = parse("<pre>\n  ipmitool lan print\n  ipmitool user list\n</pre>");
        assert_eq!(
            raw_text(&first(&document, "pre")),
            "ipmitool lan print\n  ipmitool user list"
        );
    }

    #[test]
    fn own_text_only_reads_first_direct_text_node() {
        let document = parse("<a href='#'><span>icon</span>View all items</a>");
        assert_eq!(own_text(&first(&document, "a")).as_deref(), Some("View all items"));

        let document = parse("<button><span>Load</span></button>");
        assert_eq!(own_text(&first(&document, "button")), None);
    }

    #[test]
    fn locate_keeps_document_order() {
        let document = parse("<a href='/1'>one</a><a>two</a><a href='/3'>three</a>");
        let selector = Selector::parse("a").unwrap();
        let found = locate_matching_elements(&document, &selector, |el| el.value().attr("href").is_some());
        let texts: Vec<_> = found.iter().map(visible_text).collect();
        assert_eq!(texts, ["one", "three"]);
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(char_len("©2024 Inc"), 9);
    }
}
