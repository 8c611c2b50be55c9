use super::{Context, Reply, COMMANDS};
use crate::error::Result;

const GREETING: &str = "Hi. How can i help you?";
const HELP_HINT: &str = "Type \"help\" to get the list of available commands.";
const FAREWELL: &str = "Good bye!";

pub fn hello(_ctx: &mut Context<'_>, _args: &[String]) -> Result<Reply> {
    Ok(Reply::info(format!("{}\n\n{}", GREETING, HELP_HINT)))
}

pub fn help(_ctx: &mut Context<'_>, _args: &[String]) -> Result<Reply> {
    Ok(help_reply())
}

pub fn close(_ctx: &mut Context<'_>, _args: &[String]) -> Result<Reply> {
    Ok(Reply::info(FAREWELL).exiting())
}

/// The command listing, built from the command table.
pub fn help_reply() -> Reply {
    let lines: Vec<&str> = std::iter::once("Available commands:")
        .chain(COMMANDS.iter().map(|spec| spec.usage))
        .collect();
    Reply::info(lines.join("\n\n"))
}
