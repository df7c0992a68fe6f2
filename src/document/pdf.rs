//! PDF serialization of a laid-out [`Document`] via `printpdf`.

use super::{Document, Font, PageItem};
use crate::{Error, Result};
use printpdf::{BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument};

const LAYER: &str = "Layer 1";
/// Points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;
/// Embed screenshots at one pixel per point before scaling
const IMAGE_DPI: f32 = 72.0;

fn mm(pt: f32) -> Mm {
    Mm(pt / PT_PER_MM)
}

fn pdf_error(err: impl std::fmt::Debug) -> Error {
    Error::PdfError(format!("{:?}", err))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    mono: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.regular,
            Font::HelveticaBold => &self.bold,
            Font::Courier => &self.mono,
        }
    }
}

/// Encode `doc` as PDF bytes.
pub fn write_pdf(doc: &Document) -> Result<Vec<u8>> {
    let width = mm(doc.format.page_width);
    let height = mm(doc.format.page_height);
    let (pdf, first_page, first_layer) = PdfDocument::new(doc.title.as_str(), width, height, LAYER);

    let fonts = Fonts {
        regular: pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
        mono: pdf.add_builtin_font(BuiltinFont::Courier).map_err(pdf_error)?,
    };

    let decoded = doc
        .images
        .iter()
        .map(|shot| shot.decode())
        .collect::<Result<Vec<_>>>()?;

    for (idx, page) in doc.pages.iter().enumerate() {
        let (page_idx, layer_idx) = if idx == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, LAYER)
        };
        let layer = pdf.get_page(page_idx).get_layer(layer_idx);

        for item in &page.items {
            match item {
                PageItem::Text(run) => {
                    layer.use_text(
                        run.text.as_str(),
                        run.size,
                        mm(run.x),
                        mm(doc.format.page_height - run.baseline),
                        fonts.get(run.font),
                    );
                }
                PageItem::Image {
                    image,
                    x,
                    y,
                    width,
                    height,
                } => {
                    let (source, shot) = decoded
                        .get(*image)
                        .zip(doc.images.get(*image))
                        .ok_or_else(|| Error::PdfError(format!("no image at index {}", image)))?;
                    let px_w = shot.width.max(1) as f32;
                    let px_h = shot.height.max(1) as f32;
                    Image::from_dynamic_image(source).add_to_layer(
                        layer.clone(),
                        ImageTransform {
                            translate_x: Some(mm(*x)),
                            // PDF images are anchored at their bottom-left corner
                            translate_y: Some(mm(doc.format.page_height - y - height)),
                            scale_x: Some(width / px_w),
                            scale_y: Some(height / px_h),
                            dpi: Some(IMAGE_DPI),
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }

    pdf.save_to_bytes().map_err(pdf_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentBuilder, ReportSection, TitlePage};
    use crate::rendering::render_terminal;
    use crate::task::builtin_tasks;

    #[test]
    fn writes_pdf_header_and_trailer() {
        let task = builtin_tasks().remove(1);
        let sections = vec![ReportSection {
            image: render_terminal("Original: hello\nReversed: olleh").unwrap(),
            task,
            source: "<?php\necho strrev('hello');\n".to_string(),
            output: "Original: hello\nReversed: olleh".to_string(),
        }];
        let doc = DocumentBuilder::default().build(&TitlePage::default(), &sections);
        let bytes = write_pdf(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn save_replaces_existing_file_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web").join("public").join("task-report.pdf");
        let doc = DocumentBuilder::default().build(&TitlePage::default(), &[]);

        doc.save(&path).unwrap();
        std::fs::write(&path, b"stale").unwrap();
        doc.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(!path.with_extension("pdf.partial").exists());
    }
}
