use crate::*;

pub fn handle_commands(cli: &Cli, paths: &RunPaths) -> anyhow::Result<()> {
    match &cli.command {
        None => generate(cli, paths, false),
        Some(Commands::Generate { stdout }) => generate(cli, paths, *stdout),
        Some(Commands::Params) => show_params(cli, paths),
    }
}

fn generate(cli: &Cli, paths: &RunPaths, to_stdout: bool) -> anyhow::Result<()> {
    if to_stdout && cli.output.is_some() {
        anyhow::bail!("--output cannot be combined with --stdout");
    }
    let params = load_dut_params(&paths.params)?;
    let clocks = clock_periods(&params.family);
    let blocks = select_blocks(&params);

    let document = if to_stdout {
        Some(render(&params)?)
    } else {
        write_constraint_file(&paths.output, &params)?;
        None
    };

    let report = GenerateReport {
        params_path: paths.params.clone(),
        output_path: (!to_stdout).then(|| paths.output.clone()),
        params,
        clocks,
        blocks,
        document,
    };
    print_one(cli.json, report, |r| match (&r.document, &r.output_path) {
        (Some(doc), _) => doc.clone(),
        (None, Some(path)) => format!("wrote {}\n", path.display()),
        (None, None) => String::new(),
    })
}

fn show_params(cli: &Cli, paths: &RunPaths) -> anyhow::Result<()> {
    let params = load_dut_params(&paths.params)?;
    let clocks = clock_periods(&params.family);
    let report = ParamsReport {
        params_path: paths.params.clone(),
        params,
        clocks,
    };
    print_one(cli.json, report, |r| {
        format!(
            "{}\t{}\n{}\t{}\n{}\t{}\n{}\t{}\nCLK_PERIOD\t{}\n",
            PARAM_FAMILY,
            r.params.family,
            PARAM_FIFO_CONTROLLER,
            r.params.fifo_controller,
            PARAM_IMPLEMENTATION,
            r.params.implementation,
            PARAM_REGMODE,
            r.params.regmode,
            r.clocks.wr_ns
        )
    })
}
