#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory laid out like the FIFO evaluation project.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("fifo");
        fs::create_dir_all(root.join("eval")).expect("create eval dir");
        Self { _tmp: tmp, root }
    }

    pub fn with_params(family: &str, controller: &str, implementation: &str, regmode: &str) -> Self {
        let env = Self::new();
        env.write_params(family, controller, implementation, regmode);
        env
    }

    pub fn write_params(&self, family: &str, controller: &str, implementation: &str, regmode: &str) {
        fs::write(
            self.root.join("eval/dut_params.v"),
            dut_params(family, controller, implementation, regmode),
        )
        .expect("write dut_params.v");
    }

    pub fn write_file(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, body).expect("write file");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pdcgen");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn output(&self) -> PathBuf {
        self.root.join("eval/constraint.pdc")
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("read generated file")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Parameter file in the shape the IP generator emits.
pub fn dut_params(family: &str, controller: &str, implementation: &str, regmode: &str) -> String {
    format!(
        "localparam FAMILY = \"{family}\";\n\
         localparam FIFO_CONTROLLER = \"{controller}\";\n\
         localparam IMPLEMENTATION = \"{implementation}\";\n\
         localparam ADDRESS_DEPTH = 512;\n\
         localparam DATA_WIDTH = 18;\n\
         localparam REGMODE = \"{regmode}\";\n"
    )
}
