//! Window frame decoration: the boxed border with its embedded title and
//! the `───[ label ]───` section headings.

use super::text::char_len;

/// Which style a frame glyph is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Box lines, brackets and the spaces inside them.
    Border,
    /// Letters of the window title.
    Title,
}

/// One positioned character of the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Column.
    pub x: u16,
    /// Character to draw.
    pub ch: char,
    /// Style selector.
    pub ink: Ink,
}

/// Box-drawing characters of the frame.
pub mod glyphs {
    /// Top-left corner.
    pub const TOP_LEFT: char = '┌';
    /// Top-right corner.
    pub const TOP_RIGHT: char = '┐';
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: char = '└';
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: char = '┘';
    /// Bottom edge.
    pub const HORIZONTAL: char = '─';
    /// Side edges.
    pub const VERTICAL: char = '│';
    /// Top edge filler around the title.
    pub const DOUBLE_HORIZONTAL: char = '═';
}

/// Run of `─` on each side of a section heading.
const SECTION_RULE: &str = "───";

/// Floor-centered start column for text `len` columns wide, never left of
/// `min_x`.
pub fn centered_x(len: usize, width: u16, min_x: i32) -> i32 {
    let len = i32::try_from(len).unwrap_or(i32::MAX);
    ((i32::from(width) - len).div_euclid(2)).max(min_x)
}

/// Lay out the top edge of the frame with `title` centered in it.
///
/// The result covers every column `0..width`. Corners sit at both ends; in
/// between, the `[ TITLE ]` tag replaces the `═` filler wherever it overlaps
/// the interior. Parts of the tag falling on a corner or outside the grid
/// are dropped.
pub fn top_edge(title: &str, width: u16) -> Vec<Glyph> {
    let mut edge = Vec::with_capacity(usize::from(width));
    if width == 0 {
        return edge;
    }

    let tag = format!("[ {title} ]");
    let tag: Vec<char> = tag.chars().collect();
    let start = centered_x(tag.len(), width, i32::MIN);

    edge.push(Glyph {
        x: 0,
        ch: glyphs::TOP_LEFT,
        ink: Ink::Border,
    });
    for x in 1..width.saturating_sub(1) {
        let offset = i32::from(x) - start;
        let tag_char = usize::try_from(offset).ok().and_then(|i| tag.get(i).copied());
        let glyph = match tag_char {
            Some(ch @ ('[' | ']' | ' ')) => Glyph {
                x,
                ch,
                ink: Ink::Border,
            },
            Some(ch) => Glyph {
                x,
                ch,
                ink: Ink::Title,
            },
            None => Glyph {
                x,
                ch: glyphs::DOUBLE_HORIZONTAL,
                ink: Ink::Border,
            },
        };
        edge.push(glyph);
    }
    if width > 1 {
        edge.push(Glyph {
            x: width - 1,
            ch: glyphs::TOP_RIGHT,
            ink: Ink::Border,
        });
    }
    edge
}

/// Text of a section heading: `───[ label ]───`.
pub fn section_title(label: &str) -> String {
    format!("{SECTION_RULE}[ {label} ]{SECTION_RULE}")
}

/// Width of [`section_title`] for `label`, in characters.
pub fn section_title_len(label: &str) -> usize {
    char_len(label) + 2 * SECTION_RULE.chars().count() + 4
}
