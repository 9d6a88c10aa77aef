//! Terminal markdown rendering for assistant replies and the preview pane.
//!
//! Combines `termimad` for prose with `syntect` for fenced code blocks.
//! Assistant replies are rendered as formatted text, never executed or
//! passed to a shell; termimad escapes what the terminal would otherwise
//! interpret.

use crossterm::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style as SyntectStyle, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

use polished_core::preview::PreviewState;

/// Markdown renderer for the chat loop.
pub struct ReviewRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ReviewRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();

        // Product accent on headers and bold text.
        skin.bold.set_fg(Self::to_termimad(Color::Cyan));
        skin.headers[0].set_fg(Self::to_termimad(Color::Cyan));
        skin.headers[1].set_fg(Self::to_termimad(Color::Cyan));
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render a complete markdown reply with highlighted code fences.
    pub fn render(&self, markdown: &str) -> String {
        let mut output = String::new();
        let mut in_code_block = false;
        let mut code_lang = String::new();
        let mut code_buf = String::new();

        for line in markdown.lines() {
            if line.starts_with("```") && !in_code_block {
                in_code_block = true;
                code_lang = line.trim_start_matches('`').trim().to_string();
                code_buf.clear();
            } else if line.starts_with("```") && in_code_block {
                in_code_block = false;
                output.push_str(&self.highlight_code(&code_buf, &code_lang));
                output.push('\n');
            } else if in_code_block {
                code_buf.push_str(line);
                code_buf.push('\n');
            } else {
                let rendered = self.skin.term_text(line);
                output.push_str(&format!("{rendered}"));
            }
        }

        // Unclosed fence: render what accumulated.
        if in_code_block && !code_buf.is_empty() {
            output.push_str(&self.highlight_code(&code_buf, &code_lang));
        }

        output
    }

    /// Print the response footer after an assistant reply.
    pub fn print_latency_footer(&self, response_ms: u64) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "\n  {} {:.1}{}",
            console::style("|").dim(),
            console::style(seconds).dim(),
            console::style("s").dim(),
        );
    }

    /// Print the resume preview pane.
    ///
    /// Reflects whatever content the chat flow last pushed; shows an
    /// updating notice while a change is staged and a placeholder before
    /// the first rewrite arrives.
    pub fn print_preview(&self, preview: &PreviewState) {
        println!();
        println!(
            "  {} {}",
            console::style("Resume Preview").cyan().bold(),
            if preview.is_updating() {
                console::style("(updating...)").yellow().to_string()
            } else {
                String::new()
            }
        );
        println!("  {}", console::style("---").dim());

        if preview.has_content() {
            println!("{}", self.render(preview.content()));
        } else {
            println!(
                "  {}",
                console::style("No rewrite yet. Ask for one, e.g. \"Can you rewrite my experience section?\"")
                    .dim()
            );
        }
        println!();
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut h = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in code.lines() {
            let ranges: Vec<(SyntectStyle, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("  {escaped}\x1b[0m\n"));
        }

        output
    }

    fn to_termimad(color: Color) -> termimad::crossterm::style::Color {
        match color {
            Color::Cyan => termimad::crossterm::style::Color::Cyan,
            Color::Green => termimad::crossterm::style::Color::Green,
            Color::Yellow => termimad::crossterm::style::Color::Yellow,
            Color::Rgb { r, g, b } => termimad::crossterm::style::Color::Rgb { r, g, b },
            _ => termimad::crossterm::style::Color::Cyan,
        }
    }
}

impl Default for ReviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}
