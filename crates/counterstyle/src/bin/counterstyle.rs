//! Command-line front end: print counter markers for a run of indices.
//!
//! ```text
//! $ counterstyle lower-roman 1 4 9
//! i
//! iv
//! ix
//! $ counterstyle "{upper-alpha}.{decimal})" --align right 9 10
//!  I.9)
//! J.10)
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;

use counterstyle::{markers, Align, CounterFormatter, CounterStyles, StyleSheet, Template};

const PREVIEW: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Debug, Parser)]
#[command(
    name = "counterstyle",
    version,
    about = "Render integers as CSS counter style markers"
)]
struct Cli {
    /// Style name, or a template such as "{upper-roman}.{decimal}"
    #[arg(required_unless_present = "list")]
    style: Option<String>,

    /// Indices to render [default: 1 to 10]
    #[arg(allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Load additional styles from a YAML or JSON style sheet
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List available styles with a short preview
    #[arg(short, long)]
    list: bool,

    /// Alignment of the marker column
    #[arg(short, long, value_enum, default_value_t = AlignArg::Left)]
    align: AlignArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlignArg {
    Left,
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Right => Align::Right,
        }
    }
}

fn load_styles(config: Option<&Path>) -> Result<CounterStyles> {
    let styles = CounterStyles::predefined();
    let Some(path) = config else {
        return Ok(styles);
    };

    let sheet = StyleSheet::from_path(path)
        .with_context(|| format!("failed to load style sheet {}", path.display()))?;
    sheet
        .apply(&styles)
        .with_context(|| format!("invalid style sheet {}", path.display()))
}

fn formatter(spec: &str, styles: &CounterStyles) -> Result<Box<dyn CounterFormatter>> {
    if spec.contains('{') {
        let template = Template::parse(spec, styles)
            .with_context(|| format!("invalid template '{}'", spec))?;
        Ok(Box::new(template))
    } else {
        let style = styles
            .resolve(spec)
            .with_context(|| format!("cannot use counter style '{}'", spec))?;
        Ok(Box::new(style))
    }
}

fn indices_or_default(indices: Vec<i64>) -> Vec<i64> {
    if indices.is_empty() {
        (1..=10).collect()
    } else {
        indices
    }
}

fn list_styles(styles: &CounterStyles) {
    let width = styles.names().map(str::len).max().unwrap_or(0);
    for name in styles.names() {
        let label = style(format!("{:<width$}", name, width = width)).bold();
        match styles.resolve(name) {
            Ok(counter) => {
                let preview: Vec<String> = PREVIEW.map(|i| counter.format(i)).collect();
                println!("{}  {}", label, preview.join(" "));
            }
            Err(err) => println!("{}  {}", label, style(err).red()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let styles = load_styles(cli.config.as_deref())?;

    if cli.list {
        list_styles(&styles);
        return Ok(());
    }

    let spec = cli.style.as_deref().context("no counter style given")?;
    let formatter = formatter(spec, &styles)?;
    let indices = indices_or_default(cli.indices);

    for marker in markers(formatter.as_ref(), indices, cli.align.into()) {
        println!("{}", marker);
    }
    Ok(())
}
