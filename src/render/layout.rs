//! 排版：把可流动元素序列排到固定大小的页面上
//!
//! 坐标原点在页面左下角（PDF 坐标系），单位 pt

use super::style::{Align, DocumentStyle, Face, PageGeometry, ParagraphStyle, Rgb};
use super::text;

/// 可流动元素
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    Paragraph { text: String, style: ParagraphStyle },
    /// 带项目符号的列表项
    Bullet { text: String, style: ParagraphStyle },
    Spacer(f32),
    PageBreak,
    /// 整块放不下当前页剩余空间时整体移到下一页
    KeepTogether(Vec<Flowable>),
}

impl Flowable {
    pub fn paragraph(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Flowable::Paragraph {
            text: text.into(),
            style,
        }
    }
}

/// 已定位的一行文字
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub face: Face,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}

/// 对整个故事排版，至少返回一页
pub fn layout(story: &[Flowable], style: &DocumentStyle) -> Vec<LaidOutPage> {
    let mut frame = Frame::new(style);
    for flowable in story {
        frame.place(flowable);
    }
    frame.finish()
}

struct Frame<'a> {
    style: &'a DocumentStyle,
    page: PageGeometry,
    pages: Vec<LaidOutPage>,
    /// 当前页已占用的高度（从版心顶部量起）
    used: f32,
}

impl<'a> Frame<'a> {
    fn new(style: &'a DocumentStyle) -> Self {
        Self {
            style,
            page: style.page,
            pages: vec![LaidOutPage::default()],
            used: 0.0,
        }
    }

    fn current_is_empty(&self) -> bool {
        self.pages.last().map_or(true, |page| page.lines.is_empty())
    }

    fn remaining(&self) -> f32 {
        self.page.frame_height() - self.used
    }

    fn new_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.used = 0.0;
    }

    fn place(&mut self, flowable: &Flowable) {
        match flowable {
            Flowable::Paragraph { text, style } => self.place_paragraph(text, style, None),
            Flowable::Bullet { text, style } => {
                let bullet = self.style.bullet.clone();
                self.place_paragraph(text, style, Some(bullet.as_str()));
            }
            Flowable::Spacer(height) => {
                self.used += *height;
                if self.remaining() <= 0.0 {
                    self.new_page();
                }
            }
            Flowable::PageBreak => {
                if !self.current_is_empty() {
                    self.new_page();
                }
            }
            Flowable::KeepTogether(children) => {
                let height: f32 = children.iter().map(|child| self.measure(child)).sum();
                if height > self.remaining()
                    && height <= self.page.frame_height()
                    && !self.current_is_empty()
                {
                    self.new_page();
                }
                for child in children {
                    self.place(child);
                }
            }
        }
    }

    fn text_indent(&self, style: &ParagraphStyle, bullet: Option<&str>) -> f32 {
        style.left_indent + if bullet.is_some() { self.style.bullet_indent } else { 0.0 }
    }

    fn wrap(&self, text: &str, style: &ParagraphStyle, bullet: Option<&str>) -> Vec<String> {
        let clean = text::sanitize(text);
        let max_width = (self.page.frame_width() - self.text_indent(style, bullet)).max(style.size);
        match style.face {
            Face::Courier => text::wrap_monospace(&clean, style.face, style.size, max_width),
            _ => text::wrap_words(&clean, style.face, style.size, max_width),
        }
    }

    fn measure(&self, flowable: &Flowable) -> f32 {
        match flowable {
            Flowable::Paragraph { text, style } => {
                let lines = self.wrap(text, style, None).len() as f32;
                style.space_before + lines * style.leading + style.space_after
            }
            Flowable::Bullet { text, style } => {
                let lines = self.wrap(text, style, Some(self.style.bullet.as_str())).len() as f32;
                style.space_before + lines * style.leading + style.space_after
            }
            Flowable::Spacer(height) => *height,
            Flowable::PageBreak => 0.0,
            Flowable::KeepTogether(children) => children.iter().map(|c| self.measure(c)).sum(),
        }
    }

    fn place_paragraph(&mut self, text: &str, style: &ParagraphStyle, bullet: Option<&str>) {
        let lines = self.wrap(text, style, bullet);
        let indent = self.text_indent(style, bullet);

        // 页顶不留段前距
        if !self.current_is_empty() {
            self.used += style.space_before;
        }

        for (index, line) in lines.into_iter().enumerate() {
            if self.used + style.leading > self.page.frame_height() && !self.current_is_empty() {
                self.new_page();
            }

            let top = self.page.height - self.page.top - self.used;
            let baseline = top - style.size;

            if index == 0 {
                if let Some(bullet) = bullet {
                    self.push_line(bullet.to_string(), self.page.left + style.left_indent, baseline, style);
                }
            }

            let x = match style.align {
                Align::Left => self.page.left + indent,
                Align::Center => {
                    let line_width = text::width(&line, style.face, style.size);
                    self.page.left + indent + ((self.page.frame_width() - indent - line_width) / 2.0).max(0.0)
                }
            };
            self.push_line(line, x, baseline, style);
            self.used += style.leading;
        }

        self.used += style.space_after;
    }

    fn push_line(&mut self, text: String, x: f32, baseline: f32, style: &ParagraphStyle) {
        if text.is_empty() {
            return;
        }
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text,
                x,
                baseline,
                face: style.face,
                size: style.size,
                color: style.color,
            });
        }
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        while self.pages.len() > 1 && self.current_is_empty() {
            self.pages.pop();
        }
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> ParagraphStyle {
        DocumentStyle::default().article_body
    }

    #[test]
    fn page_break_starts_new_page_only_after_content() {
        let style = DocumentStyle::default();
        let story = vec![
            Flowable::PageBreak,
            Flowable::paragraph("first page text", body()),
            Flowable::PageBreak,
            Flowable::PageBreak,
            Flowable::paragraph("second page text", body()),
            Flowable::PageBreak,
        ];
        let pages = layout(&story, &style);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].texts().collect::<Vec<_>>(), ["second page text"]);
    }

    #[test]
    fn keep_together_moves_whole_block() {
        let style = DocumentStyle::default();
        let frame = style.page.frame_height();
        let line = body();
        let story = vec![
            Flowable::paragraph("filler", line),
            // 只剩不到两行的空间
            Flowable::Spacer(frame - line.leading * 3.0),
            Flowable::KeepTogether(vec![
                Flowable::paragraph("block title", style.article_title),
                Flowable::paragraph("block body", line),
            ]),
        ];
        let pages = layout(&story, &style);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].texts().collect::<Vec<_>>(), ["filler"]);
        assert_eq!(pages[1].texts().collect::<Vec<_>>(), ["block title", "block body"]);
    }

    #[test]
    fn long_paragraph_flows_across_pages() {
        let style = DocumentStyle::default();
        let text = vec!["line"; 120].join("\n");
        let pages = layout(&[Flowable::paragraph(text, body())], &style);
        assert!(pages.len() > 1);
        let total: usize = pages.iter().map(|p| p.lines.len()).sum();
        assert_eq!(total, 120);
        for page in &pages {
            for line in &page.lines {
                assert!(line.baseline >= style.page.bottom - 1.0);
            }
        }
    }

    #[test]
    fn centered_line_is_centered() {
        let style = DocumentStyle::default();
        let pages = layout(&[Flowable::paragraph("Title", style.category_header)], &style);
        let line = &pages[0].lines[0];
        let width = text::width("Title", Face::HelveticaBold, 24.0);
        let center = line.x + width / 2.0;
        assert!((center - style.page.width / 2.0).abs() < 0.5);
    }

    #[test]
    fn bullet_is_placed_left_of_item() {
        let style = DocumentStyle::default();
        let pages = layout(
            &[Flowable::Bullet {
                text: "List entry text".into(),
                style: body(),
            }],
            &style,
        );
        let lines = &pages[0].lines;
        assert_eq!(lines[0].text, "-");
        assert_eq!(lines[1].text, "List entry text");
        assert!(lines[0].x < lines[1].x);
        assert_eq!(lines[0].baseline, lines[1].baseline);
    }
}
