/// Sizing for the faux-terminal screenshot.
///
/// Text is drawn with a fixed-width 8x8 bitmap font scaled up, so every
/// character occupies the same cell and the canvas size follows directly from
/// the line count and the longest line.

/// Bitmap glyph size in font pixels
pub const GLYPH_SIZE: u32 = 8;
/// Integer upscale applied to each glyph
pub const GLYPH_SCALE: u32 = 2;
/// Extra pixels between consecutive lines
pub const LINE_SPACING: u32 = 6;
/// Title bar height
pub const HEADER_HEIGHT: u32 = 28;
/// Total horizontal padding added to the widest line
pub const HORIZONTAL_PADDING: u32 = 40;
/// Left edge of the text column
pub const TEXT_LEFT: u32 = 20;
/// Gap between the title bar and the first line
pub const TOP_GAP: u32 = 10;
/// Gap below the last line
pub const BOTTOM_GAP: u32 = 10;
/// Narrowest canvas that still fits the window buttons
pub const MIN_WIDTH: u32 = 60;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalLayout {
    pub lines: Vec<String>,
    pub line_height: u32,
    pub width: u32,
    pub height: u32,
}

impl TerminalLayout {
    /// Measure `text` and compute the canvas that fits it without wrapping.
    pub fn measure(text: &str) -> Self {
        // split never yields zero items, so empty text is one empty line
        let lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).replace('\t', &" ".repeat(TAB_WIDTH)))
            .collect();

        let cell = GLYPH_SIZE * GLYPH_SCALE;
        let line_height = cell + LINE_SPACING;
        let widest = lines.iter().map(|l| l.chars().count() as u32).max().unwrap_or(0);
        let width = (widest * cell + HORIZONTAL_PADDING).max(MIN_WIDTH);
        let height = Self::text_top() + line_height * lines.len() as u32 + BOTTOM_GAP;

        Self {
            lines,
            line_height,
            width,
            height,
        }
    }

    /// Y coordinate of the first text line
    pub fn text_top() -> u32 {
        HEADER_HEIGHT + TOP_GAP
    }

    /// Y coordinate of line `idx`
    pub fn line_y(&self, idx: usize) -> u32 {
        Self::text_top() + idx as u32 * self.line_height
    }
}
