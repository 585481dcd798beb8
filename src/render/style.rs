//! 文档版式配置
//!
//! 所有样式集中在 [`DocumentStyle`] 中，由调用方显式传入装配器

/// 内置字体
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Helvetica,
    HelveticaBold,
    Courier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// 0-255 的 RGB 颜色
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// #1e40af
    pub const HEADER_BLUE: Rgb = Rgb(0x1e, 0x40, 0xaf);
}

/// 段落样式，长度单位均为 pt
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    pub face: Face,
    pub size: f32,
    pub leading: f32,
    pub left_indent: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub align: Align,
    pub color: Rgb,
}

impl ParagraphStyle {
    /// 行距默认取字号的 1.2 倍
    pub fn new(face: Face, size: f32) -> Self {
        Self {
            face,
            size,
            leading: size * 1.2,
            left_indent: 0.0,
            space_before: 0.0,
            space_after: 0.0,
            align: Align::Left,
            color: Rgb::BLACK,
        }
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn indent(mut self, left_indent: f32) -> Self {
        self.left_indent = left_indent;
        self
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// 页面尺寸与页边距
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PageGeometry {
    /// US Letter
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            top: 80.0,
            bottom: 72.0,
            left: 50.0,
            right: 50.0,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.left - self.right
    }

    pub fn frame_height(&self) -> f32 {
        self.height - self.top - self.bottom
    }
}

/// 整份文档的版式
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentStyle {
    pub page: PageGeometry,
    /// 封面标题，同时作为 PDF 元数据标题
    pub title: String,
    pub cover_title: ParagraphStyle,
    pub cover_meta: ParagraphStyle,
    pub category_header: ParagraphStyle,
    pub article_title: ParagraphStyle,
    pub article_body: ParagraphStyle,
    pub code_block: ParagraphStyle,
    /// 项目符号与列表文本之间的距离
    pub bullet_indent: f32,
    pub bullet: String,
    pub toc_heading_gap: f32,
    pub toc_category_gap: f32,
    pub category_gap: f32,
    pub article_gap: f32,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            page: PageGeometry::letter(),
            title: "Supermicro IT Knowledge Base - COMPLETE OFFLINE ARCHIVE".to_string(),
            cover_title: ParagraphStyle::new(Face::Helvetica, 30.0)
                .spacing(0.0, 50.0)
                .centered()
                .color(Rgb::HEADER_BLUE),
            cover_meta: ParagraphStyle::new(Face::Helvetica, 10.0).leading(12.0),
            category_header: ParagraphStyle::new(Face::HelveticaBold, 24.0)
                .spacing(0.0, 40.0)
                .centered()
                .color(Rgb::HEADER_BLUE),
            article_title: ParagraphStyle::new(Face::HelveticaBold, 15.0)
                .spacing(16.0, 8.0)
                .indent(20.0),
            article_body: ParagraphStyle::new(Face::Helvetica, 10.5)
                .leading(13.0)
                .spacing(0.0, 10.0)
                .indent(40.0),
            code_block: ParagraphStyle::new(Face::Courier, 9.0)
                .spacing(5.0, 5.0)
                .indent(50.0),
            bullet_indent: 12.0,
            bullet: "-".to_string(),
            toc_heading_gap: 20.0,
            toc_category_gap: 10.0,
            category_gap: 30.0,
            article_gap: 16.0,
        }
    }
}
