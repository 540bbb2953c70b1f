//! Entry point: render the interaction marker textures to disk.
//! Flags: --out-dir=PATH --size=N --dot-ratio=F --ring-outer=F --ring-inner=F

use std::path::PathBuf;

use anyhow::Result;
use asset::{
    MarkerSpec,
    marker::{DOT_RADIUS_RATIO, MARKER_SIZE, RING_INNER_RATIO, RING_OUTER_RATIO},
    write_marker_set,
};
use corelib::{DotShape, RingShape};

const DEFAULT_OUT_DIR: &str = "Content/Textures";

#[derive(Clone, Debug, PartialEq)]
struct Options {
    out_dir: PathBuf,
    size: u32,
    dot_ratio: f64,
    ring_outer: f64,
    ring_inner: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            size: MARKER_SIZE,
            dot_ratio: DOT_RADIUS_RATIO,
            ring_outer: RING_OUTER_RATIO,
            ring_inner: RING_INNER_RATIO,
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str, slot: &mut T) {
    match raw.parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => log::warn!("Ignoring unparseable {flag}='{raw}', keeping default."),
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Options {
    let mut opts = Options::default();
    for arg in args {
        if let Some(v) = arg.strip_prefix("--out-dir=") {
            opts.out_dir = PathBuf::from(v);
        } else if let Some(v) = arg.strip_prefix("--size=") {
            parse_value("--size", v, &mut opts.size);
        } else if let Some(v) = arg.strip_prefix("--dot-ratio=") {
            parse_value("--dot-ratio", v, &mut opts.dot_ratio);
        } else if let Some(v) = arg.strip_prefix("--ring-outer=") {
            parse_value("--ring-outer", v, &mut opts.ring_outer);
        } else if let Some(v) = arg.strip_prefix("--ring-inner=") {
            parse_value("--ring-inner", v, &mut opts.ring_inner);
        } else {
            log::warn!("Unknown argument '{}', ignored.", arg);
        }
    }
    opts
}

fn marker_specs(opts: &Options) -> Result<Vec<MarkerSpec>> {
    Ok(vec![
        MarkerSpec::dot(DotShape::new(opts.size, opts.dot_ratio)?),
        MarkerSpec::ring(RingShape::new(opts.size, opts.ring_outer, opts.ring_inner)?),
    ])
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args(std::env::args().skip(1));
    log::info!(
        "Generating interaction markers: size={}, dot={}, ring={}/{}, out_dir={}",
        opts.size,
        opts.dot_ratio,
        opts.ring_outer,
        opts.ring_inner,
        opts.out_dir.display()
    );

    let specs = marker_specs(&opts)?;
    let written = write_marker_set(&opts.out_dir, &specs)?;

    log::info!("Done: {} marker textures written.", written.len());
    Ok(())
}
