/// Paint commands for the terminal screenshot

use super::layout::{TerminalLayout, HEADER_HEIGHT, TEXT_LEFT};

pub type Rgb = (u8, u8, u8);

pub const BACKGROUND: Rgb = (255, 255, 255);
pub const HEADER: Rgb = (0x2d, 0x2d, 0x2d);
pub const CLOSE: Rgb = (0xff, 0x5f, 0x56);
pub const MINIMIZE: Rgb = (0xff, 0xbd, 0x2e);
pub const MAXIMIZE: Rgb = (0x27, 0xc9, 0x3f);
pub const TEXT: Rgb = (0, 0, 0);

/// Window button diameter and placement
const BUTTON_SIZE: u32 = 8;
const BUTTON_TOP: i32 = 8;
const BUTTON_LEFTS: [i32; 3] = [12, 26, 40];

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgb: Rgb,
    },
    /// Filled ellipse inscribed in the given box
    Ellipse {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgb: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        rgb: Rgb,
    },
}

/// Display list for a laid-out terminal, back to front.
pub fn paint_terminal(layout: &TerminalLayout) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(5 + layout.lines.len());
    cmds.push(PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: layout.width,
        height: layout.height,
        rgb: BACKGROUND,
    });
    cmds.push(PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: layout.width,
        height: HEADER_HEIGHT,
        rgb: HEADER,
    });
    for (left, rgb) in BUTTON_LEFTS.iter().zip([CLOSE, MINIMIZE, MAXIMIZE]) {
        cmds.push(PaintCommand::Ellipse {
            x: *left,
            y: BUTTON_TOP,
            width: BUTTON_SIZE,
            height: BUTTON_SIZE,
            rgb,
        });
    }
    for (idx, line) in layout.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        cmds.push(PaintCommand::Text {
            x: TEXT_LEFT as i32,
            y: layout.line_y(idx) as i32,
            text: line.clone(),
            rgb: TEXT,
        });
    }
    cmds
}
