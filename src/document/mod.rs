//! Report document: a pure page model built from tasks and their captured
//! output, serialized to PDF as the last step of a run.
//!
//! [`DocumentBuilder::build`] never touches the filesystem. Everything it
//! lays out (program sources included) is handed to it by the caller, so the
//! same inputs always produce the same pages.

pub mod layout;
pub mod metrics;
pub mod pdf;

use crate::rendering::Screenshot;
use crate::task::Task;
use crate::{Error, Result};
use layout::{Align, Flow};
use log::debug;
use std::path::Path;

/// Builtin PDF fonts used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
}

/// Page size and margins, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    /// Content never extends below `page_height - margin_bottom`
    pub margin_bottom: f32,
}

impl PageFormat {
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn break_limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }
}

impl Default for PageFormat {
    /// A4 portrait, 1 cm side margins, 40 pt bottom margin
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin_left: 28.35,
            margin_right: 28.35,
            margin_top: 28.35,
            margin_bottom: 40.0,
        }
    }
}

/// Fixed front-page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePage {
    pub title: String,
    pub prepared_for: String,
    pub prepared_by: String,
    pub introduction: String,
}

impl Default for TitlePage {
    fn default() -> Self {
        Self {
            title: "PHP Programming Tasks Report".to_string(),
            prepared_for: "Prepared for: PHP Practice Assignment".to_string(),
            prepared_by: "Prepared by: Codex Automation".to_string(),
            introduction: "This document presents solutions to the assigned PHP exercises, \
                including their objectives, constraints, detailed procedures, program listings, \
                captured outputs, and final conclusions for each task."
                .to_string(),
        }
    }
}

/// Everything the builder needs for one task page
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub task: Task,
    /// Program source, verbatim
    pub source: String,
    /// Captured stdout
    pub output: String,
    pub image: Screenshot,
}

/// A positioned line of text; `baseline` is measured from the top of the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub baseline: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Text(TextRun),
    /// `image` indexes [`Document::images`]; `y` is the top edge
    Image {
        image: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<PageItem>,
}

impl Page {
    /// Text runs on this page joined by newlines
    pub fn text(&self) -> String {
        self.items
            .iter()
            .filter_map(|i| match i {
                PageItem::Text(run) => Some(run.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub format: PageFormat,
    pub pages: Vec<Page>,
    pub images: Vec<Screenshot>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text in reading order, pages separated by newlines
    pub fn text(&self) -> String {
        self.pages.iter().map(Page::text).collect::<Vec<_>>().join("\n")
    }

    /// Serialize to PDF and write it to `path`.
    ///
    /// Missing parent directories are created. The bytes go to a sibling
    /// temporary file that is then renamed over `path`, so an existing report
    /// is either replaced whole or left untouched.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = pdf::write_pdf(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".partial");
        let tmp = std::path::PathBuf::from(tmp);
        std::fs::write(&tmp, &bytes).map_err(|e| Error::io(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            Error::io(path, e)
        })?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Lays out the title page and one page per task
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    format: PageFormat,
}

impl DocumentBuilder {
    pub fn new(format: PageFormat) -> Self {
        Self { format }
    }

    pub fn build(&self, title: &TitlePage, sections: &[ReportSection]) -> Document {
        let mut flow = Flow::new(self.format);
        let mut images = Vec::with_capacity(sections.len());

        flow.add_page();
        flow.cell(&title.title, Font::HelveticaBold, 28.0, 60.0, Align::Center);
        flow.cell(&title.prepared_for, Font::Helvetica, 16.0, 30.0, Align::Center);
        flow.cell(&title.prepared_by, Font::Helvetica, 16.0, 30.0, Align::Center);
        flow.gap(40.0);
        flow.paragraph(&title.introduction, Font::Helvetica, 14.0, 20.0);

        for section in sections {
            images.push(section.image.clone());
            task_page(&mut flow, section, images.len() - 1);
        }

        Document {
            title: title.title.clone(),
            format: self.format,
            pages: flow.finish(),
            images,
        }
    }
}

fn heading(flow: &mut Flow, label: &str) {
    flow.cell(label, Font::HelveticaBold, 14.0, 20.0, Align::Left);
}

fn body(flow: &mut Flow, text: &str) {
    flow.paragraph(text, Font::Helvetica, 12.0, 18.0);
}

fn listing(flow: &mut Flow, text: &str) {
    for line in text.lines() {
        flow.verbatim(&line.replace('\t', "    "), Font::Courier, 11.0, 16.0);
    }
}

fn task_page(flow: &mut Flow, section: &ReportSection, image: usize) {
    let task = &section.task;
    flow.add_page();
    flow.cell(&task.name, Font::HelveticaBold, 20.0, 30.0, Align::Left);

    heading(flow, "Aim");
    body(flow, &task.aim);

    heading(flow, "Problem Statement");
    for entry in &task.problem {
        body(flow, &format!("- {}", entry));
    }

    heading(flow, "Constraints");
    for entry in &task.constraints {
        body(flow, &format!("- {}", entry));
    }

    heading(flow, "Procedure");
    for (idx, step) in task.procedure.iter().enumerate() {
        body(flow, &format!("{}. {}", idx + 1, step));
    }

    heading(flow, "Program");
    listing(flow, &section.source);

    heading(flow, "Output");
    flow.image(image, section.image.width, section.image.height);
    flow.gap(10.0);
    listing(flow, &section.output);

    heading(flow, "Conclusion");
    body(flow, &task.conclusion);
}
