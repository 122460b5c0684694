use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::constants::ATTR_VALUE;
use crate::dom::{Document, ElementKind, NodeId};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// One terminal row for a document element, or `None` for bare containers.
///
/// Inputs show their `value` attribute with a visual cursor while focused.
pub fn element_line(doc: &Document, node: NodeId, focused: bool) -> Option<Line<'static>> {
    let element = doc.element(node)?;
    let label = element.text.clone();
    let mut style = Style::default().fg(Color::White);

    let content = match element.kind {
        ElementKind::Button => format!("[ {} ]", label),
        ElementKind::Input | ElementKind::TextArea => {
            let value = element.attribute(ATTR_VALUE).unwrap_or_default();
            let cursor = if focused { "█" } else { "" };
            format!("{}: {}{}", label, value, cursor)
        }
        ElementKind::Select => format!("{} ▾", label),
        ElementKind::Anchor => {
            style = style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
            label
        }
        ElementKind::Heading => {
            style = style.add_modifier(Modifier::BOLD);
            label
        }
        ElementKind::Paragraph => {
            style = style.fg(Color::Gray);
            label
        }
        ElementKind::Div | ElementKind::Body => {
            if label.is_empty() {
                return None;
            }
            label
        }
    };

    if doc.is_disabled(node) {
        style = style.fg(Color::DarkGray);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Some(Line::from(Span::styled(content, style)))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used by the overlay and the demo page
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next");
    pub const ENTER_ACTIVATE: InstructionShortcut = ("Enter", Color::Green, " Activate");
    pub const QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
    pub const LOGS: InstructionShortcut = ("l", Color::Magenta, " Logs");
}
