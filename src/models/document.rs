//! 渲染用的只读视图：按分类分组、按标题排序

use std::collections::BTreeMap;

use super::article::Article;

/// 分类名 → 按标题排序的文章列表
///
/// BTreeMap 保证分类按字典序遍历
#[derive(Debug, Default)]
pub struct Document<'a> {
    categories: BTreeMap<&'a str, Vec<&'a Article>>,
    article_count: usize,
}

impl<'a> Document<'a> {
    pub fn from_articles(articles: &'a [Article]) -> Self {
        let mut categories: BTreeMap<&'a str, Vec<&'a Article>> = BTreeMap::new();
        for article in articles {
            categories.entry(article.category()).or_default().push(article);
        }
        for list in categories.values_mut() {
            list.sort_by(|a, b| a.title().cmp(b.title()));
        }
        Self {
            categories,
            article_count: articles.len(),
        }
    }

    /// 按分类顺序遍历
    pub fn categories(&self) -> impl Iterator<Item = (&'a str, &[&'a Article])> + '_ {
        self.categories
            .iter()
            .map(|(name, articles)| (*name, articles.as_slice()))
    }

    pub fn category_names(&self) -> Vec<&'a str> {
        self.categories.keys().copied().collect()
    }

    pub fn article_count(&self) -> usize {
        self.article_count
    }

    pub fn is_empty(&self) -> bool {
        self.article_count == 0
    }
}
