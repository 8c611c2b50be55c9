use addrbook::api::AddressBookApi;
use addrbook::commands::{MessageLevel, Reply};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

const PROMPT: &str = ">>> ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    if cli.command.is_empty() {
        repl(&mut api)
    } else {
        let reply = api.dispatch(&cli.command.join(" "));
        print_reply(&reply);
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()))
        .init();
}

fn init_api(cli: &Cli) -> Result<AddressBookApi<FileStore>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    let mut config = BookConfig::load(&data_dir)?;
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }

    let store = FileStore::new(config.data_path(&data_dir));
    log::debug!("Using address book at {}", store.path().display());

    Ok(AddressBookApi::new(store).with_birthday_window(config.birthday_window_days))
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BookError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; pass --data-dir",
            ))
        })
}

fn repl(api: &mut AddressBookApi<FileStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().map_err(BookError::Io)?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.map_err(BookError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = api.dispatch(&line);
        print_reply(&reply);
        if reply.exit {
            return Ok(());
        }
    }
}

fn print_reply(reply: &Reply) {
    let text = reply.text.trim_end();
    match reply.level {
        MessageLevel::Info => println!("{}", text),
        MessageLevel::Success => println!("{}", text.green()),
        MessageLevel::Warning => println!("{}", text.yellow()),
        MessageLevel::Error => println!("{}", text.red()),
    }
}
