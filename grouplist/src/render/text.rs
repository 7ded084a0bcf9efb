//! Lays an element tree out as lines of text.
//!
//! Columns stack children vertically, rows place them side by side with
//! one cell between. Every element that produced output gets a rect in
//! the returned [`LayoutResult`], which is what hit testing runs against.

use unicode_width::UnicodeWidthStr;

use crate::attrs::*;
use crate::element::{Content, Direction, Element};
use crate::layout::{LayoutResult, Rect};

/// Minimum rendered width of a text input, brackets included.
const INPUT_MIN_WIDTH: usize = 24;

/// Cell counts past `u16::MAX` are clamped; rects never wrap around.
fn clamp(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    pub lines: Vec<String>,
    pub layout: LayoutResult,
}

impl TextFrame {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Line index of the first row covered by an element.
    pub fn line_of(&self, id: &str) -> Option<usize> {
        self.layout.get(id).map(|rect| rect.y as usize)
    }
}

pub fn render_text(root: &Element) -> TextFrame {
    let mut frame = TextFrame::default();
    if let Some(block) = layout_block(root, false) {
        frame.lines = block
            .lines
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect();
        for (id, rect) in block.rects {
            frame.layout.insert(id, rect);
        }
    }
    frame
}

#[derive(Debug, Default)]
struct Block {
    width: u16,
    lines: Vec<String>,
    rects: Vec<(String, Rect)>,
}

impl Block {
    fn leaf(id: &str, text: String) -> Self {
        let width = clamp(text.width());
        Self {
            width,
            lines: vec![text],
            rects: vec![(id.to_string(), Rect::new(0, 0, width, 1))],
        }
    }

    fn height(&self) -> u16 {
        clamp(self.lines.len())
    }

    /// Copy `child` into this block with its top-left corner at (x, y).
    fn place(&mut self, child: Block, x: u16, y: u16) {
        for (row, line) in child.lines.into_iter().enumerate() {
            let row = y as usize + row;
            if self.lines.len() <= row {
                self.lines.resize(row + 1, String::new());
            }
            let target = &mut self.lines[row];
            let pad = (x as usize).saturating_sub(target.width());
            target.extend(std::iter::repeat_n(' ', pad));
            target.push_str(&line);
        }
        self.width = self.width.max(x.saturating_add(child.width));
        self.rects.extend(child.rects.into_iter().map(|(id, rect)| {
            let (x, y) = (rect.x.saturating_add(x), rect.y.saturating_add(y));
            (id, Rect::new(x, y, rect.width, rect.height))
        }));
    }
}

fn layout_block(el: &Element, parent_active: bool) -> Option<Block> {
    if !el.visible {
        return None;
    }

    match &el.content {
        Content::None => None,
        Content::Text(text) => Some(Block::leaf(&el.id, decorate(el, text, parent_active))),
        Content::Input { value, placeholder } => {
            Some(Block::leaf(&el.id, input_line(el, value, placeholder.as_deref())))
        }
        Content::Children(children) => {
            let active = el.has_class(CLASS_ACTIVE);
            let mut block = Block::default();
            let mut placed = 0usize;

            for child in children {
                let Some(child_block) = layout_block(child, active) else {
                    continue;
                };
                match el.direction {
                    Direction::Column => {
                        let x = if placed == 0 { 0 } else { el.indent };
                        let y = block.height();
                        block.place(child_block, x, y);
                    }
                    Direction::Row => {
                        let x = if placed == 0 { 0 } else { block.width.saturating_add(1) };
                        block.place(child_block, x, 0);
                    }
                }
                placed += 1;
            }

            if block.lines.is_empty() {
                return None;
            }
            let rect = Rect::new(0, 0, block.width, block.height());
            block.rects.push((el.id.clone(), rect));
            Some(block)
        }
    }
}

/// Text decorations standing in for the stylesheet.
fn decorate(el: &Element, text: &str, parent_active: bool) -> String {
    if el.has_class(CLASS_CHECKBOX) {
        let glyph = if parent_active { "[x]" } else { "[ ]" };
        return glyph.to_string();
    }
    if el.has_class(CLASS_SUB_GROUP_TOGGLE) {
        let arrow = if el.get_data(DATA_VISIBEL) == Some(VISIBEL) {
            '▾'
        } else {
            '▸'
        };
        return format!("{arrow} {text}");
    }
    if el.has_class(CLASS_BADGE) {
        return format!("[{text}]");
    }
    if el.has_class(CLASS_ACTIVE) {
        return format!("› {text}");
    }
    text.to_string()
}

fn input_line(el: &Element, value: &str, placeholder: Option<&str>) -> String {
    let shown = if value.is_empty() {
        placeholder.unwrap_or_default()
    } else {
        value
    };
    let marker = if el.has_class(CLASS_ACTIVE) { '▾' } else { ' ' };
    let inner = INPUT_MIN_WIDTH.saturating_sub(3);
    let pad = inner.saturating_sub(shown.width());
    format!("[{shown}{}{marker}]", " ".repeat(pad))
}
