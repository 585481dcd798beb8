//! PDF 输出（printpdf 内置字体，无需字体文件）

use printpdf::{
    BuiltinFont, Color, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, Rgb as PdfRgb,
    TextItem,
};
use tracing::debug;

use super::layout::{LaidOutPage, PlacedLine};
use super::style::{DocumentStyle, Face, Rgb};

fn builtin(face: Face) -> BuiltinFont {
    match face {
        Face::Helvetica => BuiltinFont::Helvetica,
        Face::HelveticaBold => BuiltinFont::HelveticaBold,
        Face::Courier => BuiltinFont::Courier,
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(PdfRgb {
        r: f32::from(rgb.0) / 255.0,
        g: f32::from(rgb.1) / 255.0,
        b: f32::from(rgb.2) / 255.0,
        icc_profile: None,
    })
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn line_ops(line: &PlacedLine, ops: &mut Vec<Op>) {
    let font = builtin(line.face);
    ops.push(Op::StartTextSection);
    ops.push(Op::SetFillColor { col: color(line.color) });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(line.size),
        font,
    });
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(line.x),
            y: Pt(line.baseline),
        },
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(line.text.clone())],
        font,
    });
    ops.push(Op::EndTextSection);
}

/// 把排好版的页面序列化为 PDF 字节
pub fn render_pdf(pages: &[LaidOutPage], style: &DocumentStyle) -> Vec<u8> {
    let width = pt_to_mm(style.page.width);
    let height = pt_to_mm(style.page.height);

    let pdf_pages: Vec<PdfPage> = pages
        .iter()
        .map(|page| {
            let mut ops = Vec::with_capacity(page.lines.len() * 6);
            for line in &page.lines {
                line_ops(line, &mut ops);
            }
            PdfPage::new(width, height, ops)
        })
        .collect();

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = PdfDocument::new(&style.title)
        .with_pages(pdf_pages)
        .save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        debug!("PDF 生成警告 {} 条", warnings.len());
    }
    bytes
}
