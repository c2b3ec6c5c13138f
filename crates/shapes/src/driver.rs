//! Listing pipeline: generate shapes, optionally dedupe, print.
//!
//! Output is a banner line followed by one `Shape {id}: {descriptor}` line per
//! shape, in generation order. Each run owns its `IdGen`, so ids start at 1.

use crate::canvas::Canvas;
use crate::factory::{FactoryParams, GeneratorError, ShapeFactory};
use crate::shape::IdGen;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

pub const BANNER: &str = "Canvas has the following random shapes:";

/// Run configuration.
#[derive(Clone, Copy, Debug)]
pub struct DriverCfg {
    pub count: usize,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Route the generated shapes through `Canvas` before printing.
    pub dedup: bool,
    pub params: FactoryParams,
}

impl Default for DriverCfg {
    fn default() -> Self {
        Self {
            count: 10,
            seed: None,
            dedup: false,
            params: FactoryParams::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub printed: usize,
}

#[derive(Debug)]
pub enum DriverError {
    Generator(GeneratorError),
    Io(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generator(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "writing output: {e}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generator(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<GeneratorError> for DriverError {
    fn from(e: GeneratorError) -> Self {
        Self::Generator(e)
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub fn run<W: Write>(out: &mut W, cfg: &DriverCfg) -> Result<RunSummary, DriverError> {
    let factory = match cfg.seed {
        Some(seed) => ShapeFactory::new(cfg.params, seed)?,
        None => ShapeFactory::from_entropy(cfg.params)?,
    };
    let mut factory = factory.with_ids(Arc::new(IdGen::new()));
    let generated = factory.generate(cfg.count);
    let total = generated.len();
    let shapes = if cfg.dedup {
        Canvas::new(generated).into_shapes()
    } else {
        generated
    };

    writeln!(out, "{BANNER}")?;
    for shape in &shapes {
        writeln!(out, "{shape}")?;
    }
    out.flush()?;
    Ok(RunSummary {
        generated: total,
        printed: shapes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex_lite::Regex;

    fn render(cfg: &DriverCfg) -> (String, RunSummary) {
        let mut buf = Vec::new();
        let summary = run(&mut buf, cfg).unwrap();
        (String::from_utf8(buf).unwrap(), summary)
    }

    #[test]
    fn default_run_prints_banner_and_ten_lines() {
        let (text, summary) = render(&DriverCfg::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], BANNER);
        let re = Regex::new(r"^Shape (\d+): (OVAL|CIRCLE|RECTANGLE|SQUARE) \d+(x\d+)?$").unwrap();
        for (i, line) in lines[1..].iter().enumerate() {
            let caps = re.captures(line).unwrap_or_else(|| panic!("bad line {line:?}"));
            assert_eq!(caps[1].parse::<usize>().unwrap(), i + 1);
        }
        assert_eq!(
            summary,
            RunSummary {
                generated: 10,
                printed: 10
            }
        );
    }

    #[test]
    fn fixed_seed_is_reproducible_across_runs() {
        let cfg = DriverCfg {
            seed: Some(99),
            ..DriverCfg::default()
        };
        let (first, _) = render(&cfg);
        for _ in 0..10 {
            assert_eq!(render(&cfg).0, first);
        }
    }

    #[test]
    fn dedup_drops_repeats_from_listing() {
        let cfg = DriverCfg {
            count: 60,
            seed: Some(5),
            dedup: true,
            params: FactoryParams {
                dim_min: 1,
                dim_max: 2,
            },
        };
        let (text, summary) = render(&cfg);
        assert_eq!(summary.generated, 60);
        // Dimensions in {1, 2}: 4 ovals, 2 circles, 4 rectangles, 2 squares.
        assert!(summary.printed <= 12);
        let descs: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split_once(": ").unwrap().1)
            .collect();
        let mut uniq = descs.clone();
        uniq.sort_unstable();
        uniq.dedup();
        assert_eq!(uniq.len(), descs.len());
    }

    #[test]
    fn invalid_params_surface_as_generator_error() {
        let cfg = DriverCfg {
            params: FactoryParams {
                dim_min: 0,
                dim_max: 1,
            },
            ..DriverCfg::default()
        };
        let mut buf = Vec::new();
        assert!(matches!(
            run(&mut buf, &cfg),
            Err(DriverError::Generator(_))
        ));
        assert!(buf.is_empty());
    }
}
