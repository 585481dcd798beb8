//! 文本度量与折行
//!
//! 宽度使用标准 Type1 字体的 AFM 字宽（千分之一 em）

use super::style::Face;

/// Helvetica，ASCII 0x20..=0x7E
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica-Bold，ASCII 0x20..=0x7E
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

/// Helvetica，Latin-1 0xA0..=0xFF（WinAnsi 与 Latin-1 在此区间一致）
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Helvetica-Bold，Latin-1 0xA0..=0xFF
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

const COURIER: u16 = 600;

/// 浮点累加误差的容差
const TOLERANCE: f32 = 0.01;

fn glyph_width(face: Face, c: char) -> u16 {
    let (ascii, latin1, fallback) = match face {
        Face::Courier => return COURIER,
        Face::Helvetica => (&HELVETICA[..], &HELVETICA_LATIN1[..], 556),
        Face::HelveticaBold => (&HELVETICA_BOLD[..], &HELVETICA_BOLD_LATIN1[..], 611),
    };
    let table = match c {
        ' '..='~' => ascii.get(c as usize - 0x20),
        '\u{00a0}'..='\u{00ff}' => latin1.get(c as usize - 0xa0),
        _ => None,
    };
    table.copied().unwrap_or(fallback)
}

/// 文本在给定字号下的宽度（pt）
pub fn width(text: &str, face: Face, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(face, c))).sum();
    units as f32 * size / 1000.0
}

/// 把文本折算为内置字体可显示的字符
///
/// ASCII 与 Latin-1 (U+00A1..=U+00FF) 原样保留，内置字体按 WinAnsi 编码输出；
/// 常见排版标点转换为 ASCII，其余无法显示的字符替换为 '?'，保留换行
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | ' '..='~' | '\u{00a1}'..='\u{00ff}' => out.push(c),
            '\t' | '\u{00a0}' | '\u{2002}'..='\u{200a}' => out.push(' '),
            '\r' | '\u{200b}' | '\u{feff}' => {}
            '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => out.push('\''),
            '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2122}' => out.push_str("(TM)"),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

/// 按词折行，`\n` 视为强制换行，超长单词按字符拆开
pub fn wrap_words(text: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    let space = width(" ", face, size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0.0;

        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, face, size, max_width) {
                let piece_width = width(&piece, face, size);
                if !line.is_empty() && line_width + space + piece_width > max_width + TOLERANCE {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0.0;
                }
                if !line.is_empty() {
                    line.push(' ');
                    line_width += space;
                }
                line.push_str(&piece);
                line_width += piece_width;
            }
        }
        lines.push(line);
    }

    lines
}

/// 等宽折行：保留行首缩进和空格，按可容纳的字符数截断
pub fn wrap_monospace(text: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    let per_char = width("M", face, size).max(f32::EPSILON);
    let capacity = (((max_width + TOLERANCE) / per_char).floor() as usize).max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let chars: Vec<char> = raw_line.trim_end().chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(capacity) {
            lines.push(chunk.iter().collect());
        }
    }

    lines
}

fn split_long_word(word: &str, face: Face, size: f32, max_width: f32) -> Vec<String> {
    if width(word, face, size) <= max_width + TOLERANCE {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        let mut candidate = piece.clone();
        candidate.push(c);
        if !piece.is_empty() && width(&candidate, face, size) > max_width + TOLERANCE {
            pieces.push(std::mem::replace(&mut piece, c.to_string()));
        } else {
            piece = candidate;
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
