use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Parameters read from the DUT parameter file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DutParams {
    pub family: String,
    pub fifo_controller: String,
    pub implementation: String,
    pub regmode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockPeriods {
    pub wr_ns: u32,
    pub rd_ns: u32,
}

/// Optional constraint blocks emitted after the clock definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BlockSelection {
    pub lut_false_path: bool,
    pub hard_ip: bool,
    pub output_register: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub params_path: PathBuf,
    /// `None` when the document went to stdout.
    pub output_path: Option<PathBuf>,
    pub params: DutParams,
    pub clocks: ClockPeriods,
    pub blocks: BlockSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParamsReport {
    pub params_path: PathBuf,
    pub params: DutParams,
    pub clocks: ClockPeriods,
}
