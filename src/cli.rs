use crate::commands::ConvertConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "evifuncqa-csv")]
#[command(about = "Convert EviFuncQA JSONL to a tight CSV table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to evifuncqa.jsonl
    #[arg(long = "in", value_name = "PATH", env = "EVIFUNCQA_IN")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(long = "out", value_name = "PATH", env = "EVIFUNCQA_OUT")]
    pub output: PathBuf,

    /// Increase logging verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn convert_config(&self) -> ConvertConfig {
        ConvertConfig {
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}
