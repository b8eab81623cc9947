//! Line-based prompt surface that paints styled labels with ANSI colors.

use colored::{Color, ColoredString, Colorize};
use faceplate_editor::{
    AttributeMap, Key, PromptSurface, RunStyle, StyledText, SurfaceError, Value,
};
use std::io::{BufRead, Write};

/// Typed at a text prompt to list the available completions
pub const HELP_INPUT: &str = "?";

pub struct TerminalSurface<R, W> {
    input: R,
    output: W,
    baseline: String,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, output: W, baseline: impl Into<String>) -> Self {
        Self {
            input,
            output,
            baseline: baseline.into(),
        }
    }

    fn read_line(&mut self, label: &StyledText) -> Result<String, SurfaceError> {
        write!(self.output, "{}", paint(label, &self.baseline))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SurfaceError::Closed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> PromptSurface for TerminalSurface<R, W> {
    fn prompt_text(
        &mut self,
        label: &StyledText,
        completions: &[String],
    ) -> Result<String, SurfaceError> {
        loop {
            let line = self.read_line(label)?;
            if line.trim() == HELP_INPUT && !completions.is_empty() {
                writeln!(self.output, "{}", completions.join(" ").dimmed())?;
                continue;
            }
            return Ok(line);
        }
    }

    fn prompt_choice(
        &mut self,
        label: &StyledText,
        choices: &[String],
    ) -> Result<String, SurfaceError> {
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {:>2}. {}", i + 1, choice)?;
        }

        loop {
            let line = self.read_line(label)?;
            let answer = line.trim();

            if let Ok(n) = answer.parse::<usize>() {
                if let Some(choice) = n.checked_sub(1).and_then(|i| choices.get(i)) {
                    return Ok(choice.clone());
                }
            }
            if let Some(choice) = choices.iter().find(|c| c.as_str() == answer) {
                return Ok(choice.clone());
            }

            writeln!(self.output, "{}", "Please pick one of the listed choices".yellow())?;
        }
    }

    fn confirm(&mut self, label: &StyledText) -> Result<bool, SurfaceError> {
        let mut question = label.clone();
        question.append(StyledText::plain("(y or n) "));

        loop {
            match self.read_line(&question)?.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer y or n".yellow())?,
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{}", message) {
            tracing::warn!("could not write notification: {}", err);
        }
    }
}

/// Render styled text as an ANSI string
pub fn paint(text: &StyledText, baseline: &str) -> String {
    text.segments()
        .into_iter()
        .map(|(segment, styles)| {
            styles
                .into_iter()
                .fold(segment.as_str().normal(), |s, style| apply_style(s, style, baseline))
                .to_string()
        })
        .collect()
}

fn apply_style(s: ColoredString, style: &RunStyle, baseline: &str) -> ColoredString {
    match style {
        RunStyle::Named(name) if name == baseline => s.cyan(),
        RunStyle::Named(name) => apply_named(s, name),
        RunStyle::Attributes(map) => apply_attributes(s, map),
    }
}

fn apply_named(s: ColoredString, name: &str) -> ColoredString {
    match name {
        "bold" => s.bold(),
        "italic" => s.italic(),
        "underline" => s.underline(),
        "highlight" => s.on_green(),
        "region" => s.on_blue(),
        _ => s,
    }
}

fn apply_attributes(mut s: ColoredString, map: &AttributeMap) -> ColoredString {
    let attr = |name: &str| map.get(&Key::new(name));

    if let Some(weight) = attr(":weight").and_then(Value::as_name) {
        if matches!(weight, "bold" | "semi-bold" | "extra-bold" | "ultra-bold" | "heavy" | "black") {
            s = s.bold();
        } else if matches!(weight, "light" | "semi-light" | "extra-light" | "ultra-light" | "thin") {
            s = s.dimmed();
        }
    }
    if let Some(slant) = attr(":slant").and_then(Value::as_name) {
        if matches!(slant, "italic" | "oblique") {
            s = s.italic();
        }
    }
    if attr(":underline").is_some_and(Value::is_truthy) {
        s = s.underline();
    }
    if attr(":strike-through").is_some_and(Value::is_truthy) {
        s = s.strikethrough();
    }
    if attr(":inverse-video").is_some_and(Value::is_truthy) {
        s = s.reversed();
    }
    if let Some(color) = attr(":foreground").and_then(parse_color) {
        s = s.color(color);
    }
    if let Some(color) = attr(":background").and_then(parse_color) {
        s = s.on_color(color);
    }
    s
}

fn parse_color(value: &Value) -> Option<Color> {
    let name = value.as_name()?;
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    name.parse::<Color>().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |i: usize, width: usize| -> Option<u8> {
        let digits = hex.get(i * width..(i + 1) * width)?;
        let v = u8::from_str_radix(digits, 16).ok()?;
        Some(if width == 1 { v * 17 } else { v })
    };
    let width = match hex.len() {
        3 => 1,
        6 => 2,
        _ => return None,
    };
    Some(Color::TrueColor {
        r: channel(0, width)?,
        g: channel(1, width)?,
        b: channel(2, width)?,
    })
}
