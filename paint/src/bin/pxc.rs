// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `pxc` works with saved paint projects from the command line.
//!
//! ```text
//! pxc new drawing.json --width 32 --height 16
//! pxc info drawing.json
//! pxc compile drawing.json --dialect p5-js --output sketch.js
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use miette::{Context, IntoDiagnostic};
use r3bl_paint::{CommonResult, DialectKind, PaintConfig, PaintSession, height, ok,
                 read_project_record, set_mimalloc_in_main, try_initialize_logging_global,
                 width};

#[derive(Debug, Parser)]
#[command(bin_name = "pxc")]
#[command(about = "🎨 Compile layered pixel art projects into drawing code")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `pxc_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        value_name = "FILE",
        help = "Read settings (canvas size, max history, dialect, initial color) from a JSON file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'd',
        value_enum,
        help = "Language of the generated code, overrides the config file"
    )]
    pub dialect: Option<DialectKind>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🖌️ Generate drawing code from the visible layers of a project")]
    Compile {
        project: PathBuf,
        #[arg(long, short = 'o', help = "Write the code here instead of stdout")]
        output: Option<PathBuf>,
    },

    #[clap(about = "🔍 Show the canvas size, layers, and code size of a project")]
    Info { project: PathBuf },

    #[clap(about = "🌱 Create a project with a single white background layer")]
    New {
        project: PathBuf,
        #[arg(long, help = "Canvas width, defaults to the config value")]
        width: Option<u32>,
        #[arg(long, help = "Canvas height, defaults to the config value")]
        height: Option<u32>,
    },
}

fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = try_run_command(&cli_arg);

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run pxc due to the following problem",
            error = ?error
        );
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}

fn try_run_command(cli_arg: &CLIArg) -> CommonResult<()> {
    let config = try_load_config(&cli_arg.global_options)?;
    match &cli_arg.command {
        CLICommand::Compile { project, output } => {
            try_compile(config, project, output.as_deref())
        }
        CLICommand::Info { project } => try_info(config, project),
        CLICommand::New {
            project,
            width: maybe_width,
            height: maybe_height,
        } => {
            let size = config.canvas_size;
            let config = config.with_canvas_size(
                width(maybe_width.unwrap_or(*size.width))
                    + height(maybe_height.unwrap_or(*size.height)),
            );
            try_new(config, project)
        }
    }
}

fn try_load_config(global_options: &GlobalOption) -> CommonResult<PaintConfig> {
    let config = match &global_options.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err(format!("📂 Could not read config file: '{}'", path.display()))?;
            PaintConfig::try_from_json_str(&json).into_diagnostic()?
        }
        None => PaintConfig::default(),
    };
    Ok(match global_options.dialect {
        Some(dialect) => config.with_dialect(dialect),
        None => config,
    })
}

fn try_open_session(config: PaintConfig, project: &Path) -> CommonResult<PaintSession> {
    let record = read_project_record(project)?;
    PaintSession::from_project_record(config, &record)
        .into_diagnostic()
        .wrap_err(format!("🖼️ Could not open project: '{}'", project.display()))
}

fn try_compile(config: PaintConfig, project: &Path, output: Option<&Path>) -> CommonResult<()> {
    let session = try_open_session(config, project)?;
    let program = session.generate_code();

    match output {
        Some(path) => std::fs::write(path, program.to_text() + "\n")
            .into_diagnostic()
            .wrap_err(format!("💾 Could not write code to: '{}'", path.display()))?,
        None => println!("{program}"),
    }

    ok!()
}

fn try_info(config: PaintConfig, project: &Path) -> CommonResult<()> {
    let session = try_open_session(config, project)?;
    let program = session.generate_code();

    println!("canvas: {}", session.layer_stack().canvas_size());
    println!("layers (top first):");
    for layer in session.layers_top_first() {
        let active = if Some(layer.id()) == session.active_layer_id() {
            "*"
        } else {
            " "
        };
        let visible = if layer.is_visible() { "visible" } else { "hidden" };
        println!(
            " {active} {id} {name:?} {visible}, {count} painted pixels",
            id = layer.id(),
            name = layer.name(),
            count = layer.surface().count_non_transparent(),
        );
    }
    println!(
        "code ({dialect}): {fills} fill changes, {rects} rects",
        dialect = session.config().dialect,
        fills = program.count_fills(),
        rects = program.count_rects(),
    );

    ok!()
}

fn try_new(config: PaintConfig, project: &Path) -> CommonResult<()> {
    let session = PaintSession::new(config).into_diagnostic()?;
    session.save_project(project)?;
    println!(
        "created {} ({})",
        project.display(),
        session.layer_stack().canvas_size()
    );
    ok!()
}
