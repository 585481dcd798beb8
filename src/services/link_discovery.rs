//! 链接发现服务 - 业务能力层
//!
//! 在首页源码中找分类链接，在分类页源码中找文章链接

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::models::{ArticleLink, Category};
use crate::services::markup;

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("静态选择器"));

/// 分类名的长度开区间 (MIN, MAX)
const CATEGORY_NAME_MIN: usize = 4;
const CATEGORY_NAME_MAX: usize = 90;
/// 文章标题必须超过的长度
const ARTICLE_TITLE_MIN: usize = 8;

/// 链接发现器
#[derive(Debug, Clone)]
pub struct LinkDiscoverer {
    base: Url,
    category_marker: String,
    article_markers: Vec<String>,
}

impl LinkDiscoverer {
    pub fn new(base: Url, category_marker: impl Into<String>, article_markers: Vec<String>) -> Self {
        Self {
            base,
            category_marker: category_marker.into(),
            article_markers,
        }
    }

    /// 分类模式：保留文本长度在 (4, 90) 之间、绝对地址包含分类前缀的链接，
    /// 按 URL 去重并保持首次出现的顺序
    pub fn discover_categories(&self, source: &str) -> Vec<Category> {
        let document = markup::parse(source);
        let mut categories: Vec<Category> = Vec::new();

        for anchor in document.select(&ANCHORS) {
            let name = markup::visible_text(&anchor);
            let len = markup::char_len(&name);
            if len <= CATEGORY_NAME_MIN || len >= CATEGORY_NAME_MAX {
                continue;
            }
            let Some(url) = anchor.value().attr("href").and_then(|href| self.resolve(href)) else {
                continue;
            };
            if !url.contains(&self.category_marker) {
                continue;
            }
            if categories.iter().any(|c| c.url == url) {
                continue;
            }
            categories.push(Category { name, url });
        }

        categories
    }

    /// 文章模式：href 命中任一文章标记且标题长度超过 8 的链接，
    /// 以 (标题, 绝对地址) 去重
    pub fn discover_articles(&self, source: &str) -> BTreeSet<ArticleLink> {
        let document = markup::parse(source);
        let mut links = BTreeSet::new();

        let anchors = markup::locate_matching_elements(&document, &ANCHORS, |anchor| {
            anchor
                .value()
                .attr("href")
                .is_some_and(|href| self.is_article_href(href))
        });

        for anchor in anchors {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let title = markup::visible_text(&anchor);
            if markup::char_len(&title) <= ARTICLE_TITLE_MIN {
                continue;
            }
            if let Some(url) = self.resolve(href) {
                links.insert(ArticleLink { title, url });
            }
        }

        links
    }

    fn is_article_href(&self, href: &str) -> bool {
        !href.is_empty() && self.article_markers.iter().any(|m| href.contains(m.as_str()))
    }

    /// 相对地址按站点根地址补全，无法解析的 href 直接忽略
    fn resolve(&self, href: &str) -> Option<String> {
        self.base.join(href).ok().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discoverer() -> LinkDiscoverer {
        LinkDiscoverer::new(
            Url::parse("https://portal.example.com").unwrap(),
            "/sites/IT/ITKnowledgeBase/",
            vec!["DispForm.aspx?ID=".into(), "/SitePages/".into()],
        )
    }

    const HOME: &str = r#"<html><body>
        <a href="/sites/IT/ITKnowledgeBase/Networking.aspx">Networking</a>
        <a href="/sites/IT/ITKnowledgeBase/Networking.aspx">Networking again</a>
        <a href="/sites/IT/ITKnowledgeBase/BIOS.aspx">BIOS</a>
        <a href="/sites/HR/Benefits.aspx">Employee benefits</a>
        <a href="https://portal.example.com/sites/IT/ITKnowledgeBase/Storage.aspx">Storage arrays</a>
    </body></html>"#;

    #[test]
    fn categories_are_filtered_and_deduplicated_by_url() {
        let categories = discoverer().discover_categories(HOME);
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        // "BIOS" 只有 4 个字符，不满足下限
        assert_eq!(names, ["Networking", "Storage arrays"]);
        assert_eq!(
            categories[0].url,
            "https://portal.example.com/sites/IT/ITKnowledgeBase/Networking.aspx"
        );
    }

    #[test]
    fn category_discovery_is_idempotent() {
        let d = discoverer();
        assert_eq!(d.discover_categories(HOME), d.discover_categories(HOME));
    }

    #[test]
    fn articles_keyed_by_title_and_url() {
        let source = r#"<body>
            <a href="/Lists/KB/DispForm.aspx?ID=1">Reset IPMI password</a>
            <a href="/Lists/KB/DispForm.aspx?ID=1">Reset IPMI password</a>
            <a href="/Lists/KB/DispForm.aspx?ID=2">Reset IPMI password</a>
            <a href="/Lists/KB/DispForm.aspx?ID=1">Recover IPMI account</a>
            <a href="/sites/IT/SitePages/Vpn.aspx">Short</a>
            <a href="/sites/IT/Other.aspx">Configure VPN client</a>
        </body>"#;
        let links = discoverer().discover_articles(source);
        assert_eq!(links.len(), 3);
        assert!(links.contains(&ArticleLink {
            title: "Reset IPMI password".into(),
            url: "https://portal.example.com/Lists/KB/DispForm.aspx?ID=2".into(),
        }));
        assert!(links.iter().all(|l| l.title != "Short"));
    }

    #[test]
    fn category_name_length_is_exclusive_at_both_ends() {
        let anchor = |path: &str, name: &str| {
            format!(r#"<a href="/sites/IT/ITKnowledgeBase/{}.aspx">{}</a>"#, path, name)
        };
        let source = format!(
            "<body>{}{}{}{}</body>",
            anchor("four", "Bios"),
            anchor("five", "BIOS2"),
            anchor("long", &"x".repeat(89)),
            anchor("longer", &"y".repeat(90)),
        );

        let names: Vec<_> = discoverer()
            .discover_categories(&source)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["BIOS2".to_string(), "x".repeat(89)]);
    }

    #[test]
    fn article_title_must_exceed_eight_characters() {
        let source = r#"<body>
            <a href="/Lists/KB/DispForm.aspx?ID=8">IPMI tip</a>
            <a href="/Lists/KB/DispForm.aspx?ID=9">IPMI tips</a>
        </body>"#;

        let titles: Vec<_> = discoverer()
            .discover_articles(source)
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, ["IPMI tips"]);
    }
}
