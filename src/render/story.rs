//! 文档装配：封面、目录、按分类的正文

use chrono::{DateTime, Local};

use super::layout::Flowable;
use super::style::DocumentStyle;
use crate::models::{Article, ContentPart, Document};

/// 生成完整的可流动元素序列
pub fn build_story(
    document: &Document,
    style: &DocumentStyle,
    generated_at: DateTime<Local>,
) -> Vec<Flowable> {
    let mut story = cover(document, style, generated_at);
    story.extend(table_of_contents(document, style));
    story.push(Flowable::PageBreak);

    for (category, articles) in document.categories() {
        story.push(Flowable::paragraph(category, style.category_header));
        story.push(Flowable::Spacer(style.category_gap));
        for article in articles {
            story.push(Flowable::KeepTogether(article_block(article, style)));
            story.push(Flowable::Spacer(style.article_gap));
        }
        story.push(Flowable::PageBreak);
    }

    story
}

fn cover(document: &Document, style: &DocumentStyle, generated_at: DateTime<Local>) -> Vec<Flowable> {
    vec![
        Flowable::paragraph(style.title.as_str(), style.cover_title),
        Flowable::paragraph(
            format!(
                "Generated: {} | {} articles",
                generated_at.format("%Y-%m-%d %H:%M"),
                document.article_count()
            ),
            style.cover_meta,
        ),
        Flowable::PageBreak,
    ]
}

fn table_of_contents(document: &Document, style: &DocumentStyle) -> Vec<Flowable> {
    let mut toc = vec![
        Flowable::paragraph("Table of Contents", style.category_header),
        Flowable::Spacer(style.toc_heading_gap),
    ];
    for (category, articles) in document.categories() {
        toc.push(Flowable::paragraph(category, style.article_title));
        toc.extend(
            articles
                .iter()
                .map(|article| Flowable::paragraph(article.title(), style.article_body)),
        );
        toc.push(Flowable::Spacer(style.toc_category_gap));
    }
    toc
}

fn article_block(article: &Article, style: &DocumentStyle) -> Vec<Flowable> {
    let mut block = vec![Flowable::paragraph(article.title(), style.article_title)];
    for part in article.content_parts() {
        match part {
            ContentPart::Text(text) => block.push(Flowable::paragraph(text.as_str(), style.article_body)),
            ContentPart::Code(code) => block.push(Flowable::paragraph(code.as_str(), style.code_block)),
            ContentPart::List(items) => block.extend(items.iter().map(|item| Flowable::Bullet {
                text: item.clone(),
                style: style.article_body,
            })),
        }
    }
    block
}
