/// Top-to-bottom flow of cells onto fixed-size pages.
///
/// Coordinates are in points with the origin at the top-left of the page.
/// Before anything is placed the flow checks whether it would cross the
/// bottom margin and, if so, starts a new page.

use super::metrics::{break_chars, text_width, to_winansi, wrap_words};
use super::{Font, Page, PageFormat, PageItem, TextRun};

/// Baseline offset inside a cell, as a fraction of the font size
const BASELINE_RATIO: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug)]
pub struct Flow {
    format: PageFormat,
    pages: Vec<Page>,
    y: f32,
}

impl Flow {
    pub fn new(format: PageFormat) -> Self {
        Self {
            format,
            pages: Vec::new(),
            y: format.margin_top,
        }
    }

    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.format.margin_top;
    }

    /// Start a new page if `height` more points would cross the bottom margin.
    fn reserve(&mut self, height: f32) {
        if self.pages.is_empty() || self.y + height > self.format.break_limit() {
            self.add_page();
        }
    }

    fn push(&mut self, item: PageItem) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    /// A single-line cell spanning the usable width.
    ///
    /// Characters the builtin fonts cannot encode are shown as `?`.
    pub fn cell(&mut self, text: &str, font: Font, size: f32, height: f32, align: Align) {
        let text = to_winansi(text);
        let text = text.as_ref();
        self.reserve(height);
        let x = match align {
            Align::Left => self.format.margin_left,
            Align::Center => {
                let free = self.format.usable_width() - text_width(font, size, text);
                self.format.margin_left + (free / 2.0).max(0.0)
            }
        };
        let baseline = self.y + height / 2.0 + BASELINE_RATIO * size;
        if !text.is_empty() {
            self.push(PageItem::Text(TextRun {
                text: text.to_string(),
                font,
                size,
                x,
                baseline,
            }));
        }
        self.y += height;
    }

    /// Word-wrapped paragraph, one cell of `line_height` per line.
    pub fn paragraph(&mut self, text: &str, font: Font, size: f32, line_height: f32) {
        for line in wrap_words(font, size, &to_winansi(text), self.format.usable_width()) {
            self.cell(&line, font, size, line_height, Align::Left);
        }
    }

    /// Verbatim line: whitespace kept, continued on the next line when too wide.
    pub fn verbatim(&mut self, text: &str, font: Font, size: f32, line_height: f32) {
        for piece in break_chars(font, size, &to_winansi(text), self.format.usable_width()) {
            self.cell(&piece, font, size, line_height, Align::Left);
        }
    }

    /// Place an image scaled to the usable width, shrunk further when that
    /// would make it taller than the content area of a page.
    pub fn image(&mut self, image: usize, pixel_width: u32, pixel_height: u32) {
        let max_width = self.format.usable_width();
        let max_height = self.format.break_limit() - self.format.margin_top;
        let scale = if pixel_width == 0 || pixel_height == 0 {
            0.0
        } else {
            (max_width / pixel_width as f32).min(max_height / pixel_height as f32)
        };
        let width = pixel_width as f32 * scale;
        let height = pixel_height as f32 * scale;
        self.reserve(height);
        let y = self.y;
        self.push(PageItem::Image {
            image,
            x: self.format.margin_left,
            y,
            width,
            height,
        });
        self.y += height;
    }

    /// Vertical gap; never breaks the page on its own.
    pub fn gap(&mut self, height: f32) {
        self.y += height;
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(page: &Page) -> Vec<&TextRun> {
        page.items
            .iter()
            .filter_map(|i| match i {
                PageItem::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cells_stack_down_the_page() {
        let mut flow = Flow::new(PageFormat::default());
        flow.add_page();
        flow.cell("one", Font::Helvetica, 12.0, 18.0, Align::Left);
        flow.cell("two", Font::Helvetica, 12.0, 18.0, Align::Left);
        let pages = flow.finish();
        let r = runs(&pages[0]);
        assert_eq!(r.len(), 2);
        assert!((r[1].baseline - r[0].baseline - 18.0).abs() < 1e-3);
    }

    #[test]
    fn crossing_bottom_margin_starts_new_page() {
        let format = PageFormat::default();
        let mut flow = Flow::new(format);
        flow.add_page();
        let per_page = ((format.break_limit() - format.margin_top) / 16.0).floor() as usize;
        for i in 0..per_page + 1 {
            flow.cell(&format!("line {i}"), Font::Courier, 11.0, 16.0, Align::Left);
        }
        let pages = flow.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(runs(&pages[1]).len(), 1);
        assert_eq!(runs(&pages[1])[0].text, format!("line {per_page}"));
    }

    #[test]
    fn centered_cell_is_symmetric() {
        let format = PageFormat::default();
        let mut flow = Flow::new(format);
        flow.cell("Title", Font::HelveticaBold, 28.0, 60.0, Align::Center);
        let pages = flow.finish();
        let run = runs(&pages[0])[0];
        let w = text_width(Font::HelveticaBold, 28.0, "Title");
        let right = format.page_width - format.margin_right - (run.x + w);
        assert!((right - (run.x - format.margin_left)).abs() < 1e-2);
    }

    #[test]
    fn image_is_scaled_to_usable_width() {
        let format = PageFormat::default();
        let mut flow = Flow::new(format);
        flow.add_page();
        flow.image(0, 200, 100);
        let pages = flow.finish();
        match &pages[0].items[0] {
            PageItem::Image { width, height, .. } => {
                assert!((width - format.usable_width()).abs() < 1e-3);
                assert!((height - format.usable_width() / 2.0).abs() < 1e-3);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }

    #[test]
    fn empty_line_takes_space_without_a_run() {
        let mut flow = Flow::new(PageFormat::default());
        flow.add_page();
        flow.cell("before", Font::Courier, 11.0, 16.0, Align::Left);
        flow.verbatim("", Font::Courier, 11.0, 16.0);
        flow.cell("after", Font::Courier, 11.0, 16.0, Align::Left);
        let pages = flow.finish();
        let r = runs(&pages[0]);
        assert_eq!(r.len(), 2);
        assert!((r[1].baseline - r[0].baseline - 32.0).abs() < 1e-3);
    }

    #[test]
    fn tall_image_is_shrunk_to_fit_one_page() {
        let format = PageFormat::default();
        let mut flow = Flow::new(format);
        flow.add_page();
        flow.image(0, 60, 1000);
        let pages = flow.finish();
        assert_eq!(pages.len(), 1);
        match &pages[0].items[0] {
            PageItem::Image { y, width, height, .. } => {
                assert!(y + height <= format.break_limit() + 1e-3);
                assert!(*width < format.usable_width());
                // aspect ratio kept
                assert!((width / height - 0.06).abs() < 1e-4);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }
}
