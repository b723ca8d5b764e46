#[cfg(not(feature = "cli"))]
compile_error!("The `unfrm` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process;

use frm::cli;
use frm::cli::app::{Cli, ColorMode, Commands};
use frm::FrmError;

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, FrmError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| FrmError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Ddl {
            file,
            table,
            options,
            json,
        } => cli::ddl::execute(
            &cli::ddl::DdlOptions {
                file,
                table,
                options,
                json,
                mmap: cli.mmap,
            },
            &mut writer,
        ),

        Commands::Info { file, json } => cli::info::execute(
            &cli::info::InfoOptions {
                file,
                json,
                mmap: cli.mmap,
            },
            &mut writer,
        ),

        Commands::Dump {
            file,
            section,
            length,
        } => cli::dump::execute(
            &cli::dump::DumpOptions {
                file,
                section,
                length,
                mmap: cli.mmap,
            },
            &mut writer,
        ),

        Commands::Scan {
            datadir,
            json,
            tablespace_script,
            depth,
        } => cli::scan::execute(
            &cli::scan::ScanOptions {
                datadir,
                json,
                tablespace_script,
                depth,
                mmap: cli.mmap,
            },
            &mut writer,
        ),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "unfrm", &mut std::io::stdout());
            Ok(())
        }
    };

    let result = result.and_then(|()| {
        writer
            .flush()
            .map_err(|e| FrmError::Io(format!("Cannot flush output: {}", e)))
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
