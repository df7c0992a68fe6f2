//! Faux-terminal screenshots of captured program output

pub mod layout;
pub mod paint;
pub mod raster;

use crate::{Error, Result};
use image::{DynamicImage, ImageOutputFormat};
use log::debug;
use std::io::Cursor;
use std::path::Path;

pub use layout::TerminalLayout;

/// An encoded PNG together with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Decode the PNG back into pixels (used when embedding into the document)
    pub fn decode(&self) -> Result<DynamicImage> {
        Ok(image::load_from_memory(&self.png_data)?)
    }

    /// Write the PNG to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(path, &self.png_data).map_err(|e| Error::io(path, e))
    }
}

/// Render `text` as a terminal window and encode it as PNG.
pub fn render_terminal(text: &str) -> Result<Screenshot> {
    let layout = TerminalLayout::measure(text);
    debug!(
        "terminal layout: {} line(s), {}x{}",
        layout.lines.len(),
        layout.width,
        layout.height
    );
    let commands = paint::paint_terminal(&layout);
    let canvas = raster::rasterize(layout.width, layout.height, &commands);

    let mut png_data = Vec::new();
    DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut png_data), ImageOutputFormat::Png)?;

    Ok(Screenshot {
        width: layout.width,
        height: layout.height,
        png_data,
    })
}
