//! 文档装配层
//!
//! 分组排序 → 可流动元素 → 排版 → PDF

pub mod layout;
pub mod pdf;
pub mod story;
pub mod style;
pub mod text;

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::RenderError;
use crate::models::{Article, Document};

pub use layout::{layout, Flowable, LaidOutPage, PlacedLine};
pub use style::{Align, DocumentStyle, Face, PageGeometry, ParagraphStyle, Rgb};

/// 写出结果统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: usize,
    pub categories: usize,
    pub articles: usize,
}

/// 文档装配器
pub struct DocumentAssembler {
    style: DocumentStyle,
}

impl DocumentAssembler {
    pub fn new(style: DocumentStyle) -> Self {
        Self { style }
    }

    /// 分组、排序并排版
    pub fn assemble(&self, articles: &[Article], generated_at: DateTime<Local>) -> Vec<LaidOutPage> {
        let document = Document::from_articles(articles);
        self.lay_out(&document, generated_at)
    }

    fn lay_out(&self, document: &Document, generated_at: DateTime<Local>) -> Vec<LaidOutPage> {
        let story = story::build_story(document, &self.style, generated_at);
        layout::layout(&story, &self.style)
    }

    /// 生成 PDF 字节
    pub fn render(&self, articles: &[Article], generated_at: DateTime<Local>) -> (Vec<u8>, RenderSummary) {
        let document = Document::from_articles(articles);
        if document.is_empty() {
            warn!("⚠️ 没有可写入的文章，只生成封面和目录");
        }

        let pages = self.lay_out(&document, generated_at);
        let summary = RenderSummary {
            pages: pages.len(),
            categories: document.categories().count(),
            articles: document.article_count(),
        };
        (pdf::render_pdf(&pages, &self.style), summary)
    }

    /// 生成 PDF 并写入文件
    pub async fn write_to(
        &self,
        articles: &[Article],
        path: &Path,
        generated_at: DateTime<Local>,
    ) -> Result<RenderSummary, RenderError> {
        let (bytes, summary) = self.render(articles, generated_at);
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| RenderError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        info!(
            "📄 已写出 {} ({} 页, {} 个分类)",
            path.display(),
            summary.pages,
            summary.categories
        );
        Ok(summary)
    }
}
