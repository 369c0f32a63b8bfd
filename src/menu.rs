use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use log::{debug, info, warn};

use crate::band::Band;
use crate::render::ChartRenderer;
use crate::sweep::Sweep;

pub const CHART_TITLE: &str = "Wavelength vs Frequency";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const EXIT_MESSAGE: &str = "Exiting program...";
pub const PROMPT: &str = "Enter your choice: ";

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Band(Band),
    Exit,
}

impl MenuChoice {
    /// Only the exact keys "1" to "4" are accepted; just the line terminator
    /// is stripped.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_end_matches(['\r', '\n']) {
            "1" => Some(MenuChoice::Band(Band::Hf)),
            "2" => Some(MenuChoice::Band(Band::Vhf)),
            "3" => Some(MenuChoice::Band(Band::Uhf)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub typewriter_delay: Duration,
    pub color: bool,
    pub clear_screen: bool,
    pub chart_title: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            typewriter_delay: Duration::from_millis(50),
            color: true,
            clear_screen: true,
            chart_title: CHART_TITLE.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn plain() -> Self {
        SessionConfig {
            typewriter_delay: Duration::ZERO,
            color: false,
            clear_screen: false,
            ..SessionConfig::default()
        }
    }
}

fn menu_entries() -> [(String, Color); 4] {
    [
        (format!("1: Frequencies covering the {}", Band::Hf), Color::Green),
        (format!("2: Frequencies covering the {}", Band::Vhf), Color::Yellow),
        (format!("3: Frequencies covering the {}", Band::Uhf), Color::Blue),
        ("4: Exit the program".to_string(), Color::White),
    ]
}

pub struct Menu<R, W, C> {
    input: R,
    output: W,
    renderer: C,
    config: SessionConfig,
}

impl<R: BufRead, W: Write, C: ChartRenderer> Menu<R, W, C> {
    pub fn new(input: R, output: W, renderer: C, config: SessionConfig) -> Self {
        Menu {
            input,
            output,
            renderer,
            config,
        }
    }

    pub fn into_parts(self) -> (R, W, C) {
        (self.input, self.output, self.renderer)
    }

    pub fn run(&mut self) -> Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        // Left off after an invalid choice so the message stays readable.
        let mut clear = self.config.clear_screen;

        loop {
            if clear {
                self.clear_screen();
            }
            clear = self.config.clear_screen;

            writeln!(self.output, "\n{rule}")?;
            self.display_menu()?;
            writeln!(self.output, "\n{rule}")?;
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input, leaving menu");
                writeln!(self.output)?;
                writeln!(self.output, "{EXIT_MESSAGE}")?;
                return Ok(());
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "{EXIT_MESSAGE}")?;
                    return Ok(());
                }
                Some(MenuChoice::Band(band)) => {
                    info!("plotting {}", band.short_name());
                    let sweep = Sweep::for_band(band, self.config.chart_title.as_str())?;
                    self.renderer
                        .render(&sweep)
                        .with_context(|| format!("could not show the {} chart", band.short_name()))?;
                }
                None => {
                    debug!("rejected menu input {:?}", line.trim_end());
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    clear = false;
                }
            }
        }
    }

    fn clear_screen(&mut self) {
        if let Err(e) = execute!(self.output, Clear(ClearType::All), MoveTo(0, 0)) {
            warn!("could not clear the terminal: {e}");
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        for (line, color) in menu_entries() {
            self.typewriter(&line, color)?;
        }
        Ok(())
    }

    fn typewriter(&mut self, line: &str, color: Color) -> io::Result<()> {
        let delay = self.config.typewriter_delay;
        if delay.is_zero() {
            self.print_colored(line, color)?;
        } else {
            let mut buf = [0u8; 4];
            for ch in line.chars() {
                self.print_colored(ch.encode_utf8(&mut buf), color)?;
                self.output.flush()?;
                thread::sleep(delay);
            }
        }
        writeln!(self.output)
    }

    fn print_colored(&mut self, s: &str, color: Color) -> io::Result<()> {
        if self.config.color {
            queue!(self.output, SetForegroundColor(color), Print(s), ResetColor)
        } else {
            write!(self.output, "{s}")
        }
    }
}
