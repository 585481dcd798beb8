//! 知识库数据模型
//!
//! 所有数据只在一次运行期间存在于内存中

/// 首页上发现的分类，以 URL 区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub url: String,
}

/// 分类页上发现的文章链接
///
/// 以 (title, url) 整体作为唯一键，字段顺序决定排序结果
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleLink {
    pub title: String,
    pub url: String,
}

/// 文章中的一段内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// 普通段落文本
    Text(String),
    /// 代码块（pre / code）
    Code(String),
    /// 列表项文本
    List(Vec<String>),
}

impl ContentPart {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentPart::Text(_) => "text",
            ContentPart::Code(_) => "code",
            ContentPart::List(_) => "list",
        }
    }
}

/// 一篇提取完成的文章
///
/// 只能通过 [`Article::new`] 创建，保证至少含有一段内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    category: String,
    title: String,
    content_parts: Vec<ContentPart>,
}

impl Article {
    /// 内容为空时返回 None，调用方直接丢弃该文章
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        content_parts: Vec<ContentPart>,
    ) -> Option<Self> {
        if content_parts.is_empty() {
            return None;
        }
        Some(Self {
            category: category.into(),
            title: title.into(),
            content_parts,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content_parts(&self) -> &[ContentPart] {
        &self.content_parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_without_content_is_rejected() {
        assert!(Article::new("BIOS", "Empty article", Vec::new()).is_none());
    }

    #[test]
    fn article_keeps_part_order() {
        let article = Article::new(
            "BIOS",
            "Update firmware",
            vec![
                ContentPart::Text("Download the package".into()),
                ContentPart::Code("flash.sh --force".into()),
            ],
        )
        .unwrap();
        let kinds: Vec<_> = article.content_parts().iter().map(ContentPart::kind).collect();
        assert_eq!(kinds, ["text", "code"]);
    }
}
