use std::env;
use std::io::{self, Write};

use anyhow::{anyhow, Result};

use ham_wavelength::band::{Band, SAMPLE_COUNT};
use ham_wavelength::menu::CHART_TITLE;
use ham_wavelength::render::{serve_chart, ChartRenderer, WindowRenderer, CHART_CHILD_ARG};
use ham_wavelength::sweep::Sweep;

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    band: Band,
    samples: usize,
    json: bool,
    plot: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.get(1).map(String::as_str) == Some(CHART_CHILD_ARG) {
        serve_chart(io::stdin().lock())?;
        return Ok(());
    }

    let Some(cli) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let sweep = Sweep::from_frequencies(CHART_TITLE, cli.band.frequencies_n(cli.samples))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &sweep)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, cli.band, &sweep)?;
    }
    out.flush()?;

    if cli.plot {
        WindowRenderer::new().render(&sweep)?;
    }
    Ok(())
}

/// `Ok(None)` when usage should be printed instead.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    if args.len() == 1 || args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(None);
    }

    let mut band = None;
    let mut samples = SAMPLE_COUNT;
    let mut json = false;
    let mut plot = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--band" => {
                i += 1;
                let raw = args.get(i).ok_or_else(|| anyhow!("missing band"))?;
                band = Some(raw.parse::<Band>().map_err(|e| anyhow!(e))?);
            }
            "--samples" => {
                i += 1;
                samples = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing sample count"))?
                    .parse::<usize>()?;
                if samples < 2 {
                    return Err(anyhow!("--samples must be at least 2"));
                }
            }
            "--json" => {
                json = true;
            }
            "--plot" => {
                plot = true;
            }
            other => {
                return Err(anyhow!("unknown arg: {}", other));
            }
        }
        i += 1;
    }

    let band = band.ok_or_else(|| anyhow!("--band is required"))?;
    Ok(Some(CliArgs {
        band,
        samples,
        json,
        plot,
    }))
}

fn write_table<W: Write>(out: &mut W, band: Band, sweep: &Sweep) -> io::Result<()> {
    writeln!(out, "{band}")?;
    writeln!(out, "{:>5}  {:>12}  {:>12}", "#", "f (MHz)", "λ (m)")?;
    for (i, (mhz, meters)) in sweep.points_mhz().enumerate() {
        writeln!(out, "{:>5}  {:>12.2}  {:>12.2}", i + 1, mhz, meters)?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: ham-wavelength-cli --band hf|vhf|uhf [--samples 100] [--json] [--plot]");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("ham-wavelength-cli")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_band_and_flags() {
        let cli = parse_args(&args(&["--band", "vhf", "--json", "--plot"])).unwrap().unwrap();
        assert_eq!(
            cli,
            CliArgs {
                band: Band::Vhf,
                samples: SAMPLE_COUNT,
                json: true,
                plot: true,
            }
        );
    }

    #[test]
    fn custom_sample_count() {
        let cli = parse_args(&args(&["--band", "hf", "--samples", "10"])).unwrap().unwrap();
        assert_eq!(cli.samples, 10);
        assert!(parse_args(&args(&["--band", "hf", "--samples", "1"])).is_err());
        assert!(parse_args(&args(&["--band", "hf", "--samples", "many"])).is_err());
    }

    #[test]
    fn help_and_errors() {
        assert_eq!(parse_args(&args(&[])).unwrap(), None);
        assert_eq!(parse_args(&args(&["--band", "hf", "-h"])).unwrap(), None);
        assert!(parse_args(&args(&["--json"])).is_err());
        assert!(parse_args(&args(&["--band"])).is_err());
        assert!(parse_args(&args(&["--band", "shf"])).is_err());
        assert!(parse_args(&args(&["--band", "hf", "--bogus"])).is_err());
    }

    #[test]
    fn table_lists_every_sample() {
        let sweep = Sweep::from_frequencies(CHART_TITLE, Band::Hf.frequencies_n(4)).unwrap();
        let mut out = Vec::new();
        write_table(&mut out, Band::Hf, &sweep).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "HF bands (3 MHz to 30 MHz)");
        assert!(lines[2].ends_with("3.00        100.00"));
        assert!(lines[5].ends_with("30.00         10.00"));
    }
}
