//! Stable names and literal template lines.
//!
//! The `.pdc` lines are consumed verbatim by the place-and-route tool;
//! trailing spaces are part of the format and must be preserved.

pub const DEFAULT_PARAMS_PATH: &str = "eval/dut_params.v";
pub const DEFAULT_OUTPUT_PATH: &str = "eval/constraint.pdc";
pub const DEFAULT_CONFIG_PATH: &str = "pdcgen.toml";

pub const PARAM_FAMILY: &str = "FAMILY";
pub const PARAM_FIFO_CONTROLLER: &str = "FIFO_CONTROLLER";
pub const PARAM_IMPLEMENTATION: &str = "IMPLEMENTATION";
pub const PARAM_REGMODE: &str = "REGMODE";

pub const FAMILY_LAV_AT: &str = "LAV-AT";
pub const FAMILY_LFCPNX: &str = "LFCPNX";
pub const CONTROLLER_FABRIC: &str = "FABRIC";
pub const CONTROLLER_HARD_IP: &str = "HARD_IP";
pub const IMPLEMENTATION_LUT: &str = "LUT";
pub const REGMODE_REG: &str = "reg";

/// Clock period (ns) per device family; anything else gets the default.
pub const FAMILY_CLOCK_PERIODS: &[(&str, u32)] = &[(FAMILY_LAV_AT, 5), (FAMILY_LFCPNX, 8)];
pub const DEFAULT_CLOCK_PERIOD: u32 = 10;

pub const CLOCK_HEADER: &str = "## Set clock period per design requirements ";

pub const CREATE_CLOCKS: &[&str] = &[
    "create_clock -name {wr_clk_i} -period $WR_CLK_PERIOD [get_ports wr_clk_i]",
    "create_clock -name {rd_clk_i} -period $RD_CLK_PERIOD [get_ports rd_clk_i]",
];

pub const LUT_BLOCK: &[&str] = &[
    "## When FIFO Memory used is LUT-Based, set constraint from distributed memory to output data ",
    "set RD_MAXDLY [expr {$RD_CLK_PERIOD*0.8}]",
    "set_false_path -from [get_pins -hierarchical */_FABRIC.u_fifo/*distmem*.*/DO*] -to [get_pins -hierarchical */_FABRIC.u_fifo/DIST.out_raw*.ff_inst/DF]",
];

pub const HARD_IP_BLOCK: &[&str] = &[
    "## Constraints when Nexus HARD_IP is used ",
    "set WR_MAXDLY [expr {$WR_CLK_PERIOD*0.8}]",
    "set RD_MAXDLY [expr {$RD_CLK_PERIOD*0.8}]",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.full_r*.*_inst]   $WR_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.afull_r*.*_inst]  $WR_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.empty_r*.*_inst]  $RD_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.aempty_r*.*_inst] $RD_MAXDLY ",
    "set_false_path -from [get_pins -hierarchical */*.FIFO16K_MODE_inst/EMPTY] -to [get_pins -hierarchical */*.FIFO16K_MODE_inst/EMPTYI] ",
    "set_false_path -from [get_pins -hierarchical */*.FIFO16K_MODE_inst/FULL] -to [get_pins -hierarchical */*.FIFO16K_MODE_inst/FULLI] ",
];

pub const REGMODE_BLOCK: &[&str] = &[
    "## Additional constraints when Output Register is Enabled ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.empty_r*.*_inst] -to [get_cells -hierarchical */*.empty_sync_r*.*_inst]    $RD_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.empty_sync_r*.*_inst]  $RD_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.aempty_r*.*_inst] -to [get_cells -hierarchical */*.aempty_sync_r*.*_inst]  $RD_MAXDLY ",
    "set_max_delay -datapath_only -from [get_cells -hierarchical */*.FIFO16K_MODE_inst] -to [get_cells -hierarchical */*.aempty_sync_r*.*_inst] $RD_MAXDLY ",
];
