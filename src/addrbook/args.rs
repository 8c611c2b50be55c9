use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Command-driven contact address book", long_about = None)]
#[command(after_help = "Run without a command to start an interactive session.")]
pub struct Cli {
    /// Directory holding the address book and its config
    #[arg(long, env = "ADDRBOOK_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Address book file name inside the data directory
    #[arg(long)]
    pub file: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// A single command to run, e.g. `add Mark 0971122333`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
