//! Writing resolved colors and notices to the user.

use std::io::{self, IsTerminal, Stdout, Write};

use serde::Serialize;
use swatch_palette::Color;
use tracing::{info, warn};

use crate::{ScreenError, region_sampler::PatchBounds};

/// The views the screen renders into.
pub trait ColorView {
    /// Fill the swatch view with the color.
    fn set_fill(&mut self, color: Color);

    /// Replace the label text.
    fn set_label(&mut self, label: &str);

    /// Show a short transient message.
    fn show_notice(&mut self, notice: &str);

    /// Called with the patch bounds of each sampled capture, before its color is rendered.
    fn sampled(&mut self, _bounds: PatchBounds) {}
}

/// Render a resolved color, or a notice if no color was found.
///
/// When no color was found the previous fill and label are kept.
pub fn render(view: &mut dyn ColorView, resolved: Option<Color>) {
    match resolved {
        Some(color) => {
            view.set_fill(color);
            view.set_label(&color.hex());
            info!("Presented {color}");
        }

        None => notify(view, &ScreenError::NoSuitableColor),
    }
}

/// Log an error and show its notice.
pub fn notify(view: &mut dyn ColorView, error: &ScreenError) {
    warn!("{error}");
    view.show_notice(error.notice());
}

/// Perceived brightness using BT.601 weights, in `[0, 255]`.
pub fn luminance(color: Color) -> f32 {
    0.299 * f32::from(color.red()) + 0.587 * f32::from(color.green()) + 0.114 * f32::from(color.blue())
}

/// If black text is more legible than white text on the color.
pub fn should_use_dark_text(color: Color) -> bool {
    luminance(color) > 128.0
}

/// Prints the label on a background of the fill color.
pub struct TerminalView<W> {
    out: W,
    fill: Option<Color>,
    ansi: bool,
}

impl TerminalView<Stdout> {
    /// A view printing to stdout, with true color escape codes when stdout is a terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let ansi = stdout.is_terminal();
        Self::new(stdout, ansi)
    }
}

impl<W: Write> TerminalView<W> {
    /// A view printing to a writer, `ansi` enables color escape codes.
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            fill: None,
            ansi,
        }
    }

    /// The current fill color.
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ColorView for TerminalView<W> {
    fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn set_label(&mut self, label: &str) {
        let result = match self.fill.filter(|_| self.ansi) {
            Some(fill) => {
                let text = if should_use_dark_text(fill) { "0;0;0" } else { "255;255;255" };
                writeln!(
                    self.out,
                    "\x1b[48;2;{};{};{}m\x1b[38;2;{text}m  {label}  \x1b[0m",
                    fill.red(),
                    fill.green(),
                    fill.blue(),
                )
            }
            None => writeln!(self.out, "{label}"),
        };

        if let Err(e) = result {
            warn!("Could not write the label: {e}");
        }
    }

    fn show_notice(&mut self, notice: &str) {
        if let Err(e) = writeln!(self.out, "{notice}") {
            warn!("Could not write the notice: {e}");
        }
    }
}

#[derive(Serialize)]
struct JsonColor<'a> {
    hex: &'a str,
    argb: u32,
    bounds: Option<PatchBounds>,
}

#[derive(Serialize)]
struct JsonNotice<'a> {
    notice: &'a str,
}

/// Prints one JSON object per line for each presented color or notice.
pub struct JsonView<W> {
    out: W,
    fill: Option<Color>,
    bounds: Option<PatchBounds>,
}

impl<W: Write> JsonView<W> {
    /// A view printing to a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            fill: None,
            bounds: None,
        }
    }

    /// Consume the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, value: &impl Serialize) {
        let result = serde_json::to_writer(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));

        if let Err(e) = result {
            warn!("Could not write the JSON output: {e}");
        }
    }
}

impl JsonView<Stdout> {
    /// A view printing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ColorView for JsonView<W> {
    fn set_fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn set_label(&mut self, label: &str) {
        let output = JsonColor {
            hex: label,
            argb: self.fill.map_or(0, Color::argb),
            bounds: self.bounds,
        };
        self.write_line(&output);
    }

    fn show_notice(&mut self, notice: &str) {
        self.write_line(&JsonNotice { notice });
    }

    fn sampled(&mut self, bounds: PatchBounds) {
        self.bounds = Some(bounds);
    }
}
