//! 知识库爬取 - 编排层
//!
//! 严格顺序执行：一次只打开一个页面，分类与文章之间没有并发

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{SkipReason, Skipped};
use crate::infrastructure::PageSession;
use crate::models::{Article, ArticleLink, Category};
use crate::services::{expand_all, ContentExtractor, LinkDiscoverer};
use crate::utils::logging;

/// 一次爬取的全部结果
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub skipped: Vec<Skipped>,
}

/// 知识库爬虫
pub struct KnowledgeBaseCrawler<'a> {
    config: &'a Config,
    discoverer: LinkDiscoverer,
    extractor: ContentExtractor,
}

impl<'a> KnowledgeBaseCrawler<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        let base = config
            .base()
            .with_context(|| format!("无法解析站点地址: {}", config.base_url))?;
        Ok(Self {
            config,
            discoverer: LinkDiscoverer::new(
                base,
                config.category_marker.as_str(),
                config.article_markers.clone(),
            ),
            extractor: ContentExtractor::new(&config.main_container_id, config.emit_nested_list_items),
        })
    }

    /// 完整爬取
    ///
    /// 首页打不开或读不到源码时直接返回错误；分类和文章级别的失败
    /// 只记录到 `skipped` 中。
    pub async fn crawl<S>(&self, session: &mut S) -> Result<CrawlOutcome>
    where
        S: PageSession + ?Sized,
    {
        let home_url = self.config.home_url()?;
        info!("🌐 正在打开知识库首页: {}", home_url);

        session
            .open(home_url.as_str(), self.config.home_settle)
            .await
            .context("打开知识库首页失败")?;
        expand_all(&*session, &self.config.expand)
            .await
            .context("展开首页内容失败")?;
        let home = session.current_markup().await.context("读取首页源码失败")?;

        let mut outcome = CrawlOutcome {
            categories: self.discoverer.discover_categories(&home),
            ..Default::default()
        };
        logging::log_categories_found(outcome.categories.len());

        let total = outcome.categories.len();
        for (index, category) in outcome.categories.iter().enumerate() {
            logging::log_category_start(index + 1, total, &category.name);

            let links = match self.load(session, &category.url, self.config.category_settle).await {
                Ok(source) => self.discoverer.discover_articles(&source),
                Err(reason) => {
                    warn!("⚠️ 跳过分类 {}: {}", category.name, reason);
                    outcome.skipped.push(Skipped {
                        category: category.name.clone(),
                        title: None,
                        url: category.url.clone(),
                        reason,
                    });
                    continue;
                }
            };
            logging::log_category_articles(links.len());

            for link in &links {
                match self.fetch_article(session, category, link).await {
                    Ok(article) => outcome.articles.push(article),
                    Err(reason) => {
                        debug!("跳过文章 {}: {}", link.title, reason);
                        outcome.skipped.push(Skipped {
                            category: category.name.clone(),
                            title: Some(link.title.clone()),
                            url: link.url.clone(),
                            reason,
                        });
                    }
                }
            }

            logging::log_running_total(outcome.articles.len());
        }

        Ok(outcome)
    }

    /// 打开一篇文章并提取正文，没有内容时视为跳过
    async fn fetch_article<S>(
        &self,
        session: &mut S,
        category: &Category,
        link: &ArticleLink,
    ) -> Result<Article, SkipReason>
    where
        S: PageSession + ?Sized,
    {
        let source = self.load(session, &link.url, self.config.article_settle).await?;
        let parts = self.extractor.extract(&source);
        Article::new(category.name.as_str(), link.title.as_str(), parts).ok_or(SkipReason::NoContent)
    }

    /// 导航、等待、展开，返回最终源码
    async fn load<S>(&self, session: &mut S, url: &str, settle: Duration) -> Result<String, SkipReason>
    where
        S: PageSession + ?Sized,
    {
        session
            .open(url, settle)
            .await
            .map_err(|e| SkipReason::Unreachable { error: e.to_string() })?;
        expand_all(&*session, &self.config.expand)
            .await
            .map_err(|e| SkipReason::ExpansionFailed { error: e.to_string() })?;
        session
            .current_markup()
            .await
            .map_err(|e| SkipReason::Unreachable { error: e.to_string() })
    }
}
