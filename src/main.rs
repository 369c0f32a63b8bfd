use std::io;

use anyhow::Result;

use ham_wavelength::menu::{Menu, SessionConfig};
use ham_wavelength::render::{serve_chart, WindowRenderer, CHART_CHILD_ARG};

fn main() -> Result<()> {
    env_logger::init();

    if std::env::args().nth(1).as_deref() == Some(CHART_CHILD_ARG) {
        serve_chart(io::stdin().lock())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), WindowRenderer::new(), SessionConfig::default());
    menu.run()
}
