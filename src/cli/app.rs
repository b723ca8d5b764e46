use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "unfrm")]
#[command(about = "Recover CREATE TABLE statements from MySQL .frm files")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Use memory-mapped I/O for file access
    #[arg(long, global = true)]
    pub mmap: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Section of a `.frm` file selected by `unfrm dump`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpSection {
    Header,
    Keys,
    Columns,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the CREATE TABLE statement for a .frm file
    Ddl {
        /// Path to the table definition file (.frm)
        #[arg(short, long)]
        file: String,

        /// Table name to use (default: file name without extension)
        #[arg(short, long)]
        table: Option<String>,

        /// Append ENGINE, DEFAULT CHARSET and ROW_FORMAT table options
        #[arg(long)]
        options: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show decoded header fields, columns, and keys
    Info {
        /// Path to the table definition file (.frm)
        #[arg(short, long)]
        file: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Hex dump of one section of a .frm file
    Dump {
        /// Path to the table definition file (.frm)
        #[arg(short, long)]
        file: String,

        /// Section to dump
        #[arg(short, long, default_value = "header")]
        section: DumpSection,

        /// Number of bytes to dump (default: whole section, or 64 for the header)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Decode every .frm file under a MySQL data directory
    Scan {
        /// MySQL data directory
        #[arg(short, long)]
        datadir: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Emit CREATE TABLE plus DISCARD/IMPORT TABLESPACE statements
        #[arg(long = "tablespace-script")]
        tablespace_script: bool,

        /// Maximum directory depth (default: 2, 0 = unlimited)
        #[arg(long)]
        depth: Option<u32>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
