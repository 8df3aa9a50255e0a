use crate::domain::constants::{
    CLOCK_HEADER, CONTROLLER_FABRIC, CONTROLLER_HARD_IP, CREATE_CLOCKS, DEFAULT_CLOCK_PERIOD,
    FAMILY_CLOCK_PERIODS, FAMILY_LAV_AT, HARD_IP_BLOCK, IMPLEMENTATION_LUT, LUT_BLOCK,
    REGMODE_BLOCK, REGMODE_REG,
};
use crate::domain::models::{BlockSelection, ClockPeriods, DutParams};
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn table_period(family: &str) -> Option<u32> {
    FAMILY_CLOCK_PERIODS
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, p)| *p)
}

pub fn clock_periods(family: &str) -> ClockPeriods {
    let period = table_period(family).unwrap_or(DEFAULT_CLOCK_PERIOD);
    ClockPeriods {
        wr_ns: period,
        rd_ns: period,
    }
}

pub fn select_blocks(params: &DutParams) -> BlockSelection {
    if params.family == FAMILY_LAV_AT {
        return BlockSelection::default();
    }
    let lut_false_path = params.fifo_controller == CONTROLLER_FABRIC
        && params.implementation == IMPLEMENTATION_LUT;
    let hard_ip = params.fifo_controller == CONTROLLER_HARD_IP;
    BlockSelection {
        lut_false_path,
        hard_ip,
        output_register: hard_ip && params.regmode == REGMODE_REG,
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[&str]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Streams the constraint document for `params` into `out`.
pub fn write_constraints<W: Write>(out: &mut W, params: &DutParams) -> std::io::Result<()> {
    let clocks = clock_periods(&params.family);
    let blocks = select_blocks(params);
    if table_period(&params.family).is_none() {
        tracing::warn!(
            family = %params.family,
            period = DEFAULT_CLOCK_PERIOD,
            "family not in clock table, using default period"
        );
    }
    tracing::debug!(?blocks, "selected constraint blocks");

    writeln!(out, "{}", CLOCK_HEADER)?;
    writeln!(out, "set WR_CLK_PERIOD {}", clocks.wr_ns)?;
    writeln!(out, "set RD_CLK_PERIOD {}", clocks.rd_ns)?;
    writeln!(out)?;

    write_lines(out, CREATE_CLOCKS)?;
    writeln!(out)?;

    if blocks.lut_false_path {
        write_lines(out, LUT_BLOCK)?;
        writeln!(out)?;
    }

    if blocks.hard_ip {
        write_lines(out, HARD_IP_BLOCK)?;
        writeln!(out)?;
        if blocks.output_register {
            write_lines(out, REGMODE_BLOCK)?;
        }
    }

    Ok(())
}

pub fn render(params: &DutParams) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_constraints(&mut buf, params)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_constraint_file(path: &Path, params: &DutParams) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("cannot create constraint file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_constraints(&mut out, params)
        .and_then(|_| out.flush())
        .with_context(|| format!("cannot write constraint file {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote constraint file");
    Ok(())
}
