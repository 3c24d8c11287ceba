//! ANSI rendering of prompts and output lines.

use nu_ansi_term::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crtsh_core::{LineKind, TerminalLine};

/// Styles lines per kind; with color disabled every method returns plain
/// text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// `[user@~/path]$ `
    pub fn prompt(&self, user: &str, path: &str) -> String {
        let body = format!("[{user}@{path}]$");
        format!("{} ", self.paint(Color::Green.bold(), &body))
    }

    pub fn line(&self, user: &str, line: &TerminalLine) -> String {
        match line.kind {
            LineKind::Input => {
                let path = line.path.as_deref().unwrap_or("~");
                format!("{}{}", self.prompt(user, path), line.content)
            }
            LineKind::Output => line.content.clone(),
            LineKind::System => self.paint(Color::Cyan.normal(), &line.content),
            LineKind::Error => self.paint(Color::Red.bold(), &line.content),
            LineKind::Success => self.paint(Color::Green.normal(), &line.content),
        }
    }

    /// Dimmed inline suggestion.
    pub fn ghost(&self, text: &str) -> String {
        self.paint(Style::new().dimmed(), text)
    }

    /// Boxed banner, padded by display width so wide glyphs line up.
    pub fn banner(&self, lines: &[&str]) -> Vec<String> {
        let inner = lines.iter().map(|l| l.width()).max().unwrap_or(0) + 2;
        let edge = "═".repeat(inner);
        let mut out = vec![self.paint(Color::Cyan.bold(), &format!("╔{edge}╗"))];
        for line in lines {
            let pad = " ".repeat(inner - 1 - line.width());
            out.push(self.paint(Color::Cyan.bold(), &format!("║ {line}{pad}║")));
        }
        out.push(self.paint(Color::Cyan.bold(), &format!("╚{edge}╝")));
        out
    }
}
