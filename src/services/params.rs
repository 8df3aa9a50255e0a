use crate::domain::constants::{
    PARAM_FAMILY, PARAM_FIFO_CONTROLLER, PARAM_IMPLEMENTATION, PARAM_REGMODE,
};
use crate::domain::models::DutParams;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ParamError {
    #[error("cannot read parameter file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parameter {name} not found in {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("parameter {name} has no value on line {line} of {}", .path.display())]
    Malformed {
        name: String,
        path: PathBuf,
        line: usize,
    },
}

/// Returns the value of the first line in `path` that contains `name`.
///
/// The value is the text between the first and second `=`, with a trailing
/// `;` dropped and every `"` and space removed. Matching is plain substring
/// containment, so `FAMILY` also matches `SUBFAMILY`; the first hit wins.
pub fn load_parameter(path: &Path, name: &str) -> Result<String, ParamError> {
    let io_err = |source| ParamError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        if !line.contains(name) {
            continue;
        }
        let raw = line.split('=').nth(1).ok_or_else(|| ParamError::Malformed {
            name: name.to_string(),
            path: path.to_path_buf(),
            line: idx + 1,
        })?;
        let value = clean_value(raw);
        tracing::debug!(param = name, value = %value, line = idx + 1, "resolved parameter");
        return Ok(value);
    }

    Err(ParamError::NotFound {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

fn clean_value(raw: &str) -> String {
    let raw = raw.trim_end();
    let raw = raw.strip_suffix(';').unwrap_or(raw);
    raw.chars().filter(|c| *c != '"' && *c != ' ').collect()
}

/// Reads the four parameters the constraint template branches on.
pub fn load_dut_params(path: &Path) -> Result<DutParams, ParamError> {
    Ok(DutParams {
        family: load_parameter(path, PARAM_FAMILY)?,
        fifo_controller: load_parameter(path, PARAM_FIFO_CONTROLLER)?,
        implementation: load_parameter(path, PARAM_IMPLEMENTATION)?,
        regmode: load_parameter(path, PARAM_REGMODE)?,
    })
}
