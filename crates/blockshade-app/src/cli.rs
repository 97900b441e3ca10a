use std::path::PathBuf;

use blockshade_config::schema::Backend;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// blockshade: instanced 2D shading programs, rendered headless to PNG.
#[derive(Parser, Debug)]
#[command(name = "blockshade", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "debug", "blockshade=trace").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a scene file to PNG.
    Render(RenderArgs),
    /// Print the WGSL sources, or write them to a directory.
    Shaders {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Report which region a local coordinate falls in.
    Classify {
        #[command(subcommand)]
        target: ClassifyTarget,
    },
    /// Print the effective config.
    Config {
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Scene TOML file.
    pub scene: PathBuf,

    /// Output PNG path.
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum ClassifyTarget {
    /// Hex tile region of a point in the unit square.
    Hex { x: f32, y: f32 },
    /// Border or fill of a point inside a rectangle.
    Border {
        x: f32,
        y: f32,
        #[arg(long, num_args = 2, required = true, value_names = ["W", "H"])]
        size: Vec<f32>,
        #[arg(long, default_value_t = 1.0)]
        border: f32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendArg {
    Software,
    Gpu,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Software => Backend::Software,
            BackendArg::Gpu => Backend::Gpu,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
