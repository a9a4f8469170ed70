//! Command table and handlers
//!
//! Each REPL command is a static descriptor tagged with a [`CommandKind`];
//! [`CliCommand::execute`] dispatches on the tag.

use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::error::{PokedexError, Result};
use crate::models::LocationAreasPage;
use crate::repl::Session;

/// What the loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// A registered REPL command.
#[derive(Debug)]
pub struct CliCommand {
    /// Word typed at the prompt
    pub name: &'static str,
    /// Name plus argument placeholders, shown by `help`
    pub usage: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command, in the order `help` lists them.
pub static COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        usage: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    CliCommand {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    CliCommand {
        name: "map",
        usage: "map",
        description: "Displays the next 20 location areas in the Pokemon world",
        kind: CommandKind::Map,
    },
    CliCommand {
        name: "mapb",
        usage: "mapb",
        description: "Displays the previous 20 location areas in the Pokemon world",
        kind: CommandKind::MapBack,
    },
    CliCommand {
        name: "explore",
        usage: "explore <location_area>",
        description: "Displays a list of all Pokemon in a location area",
        kind: CommandKind::Explore,
    },
    CliCommand {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Attempt to catch a Pokemon",
        kind: CommandKind::Catch,
    },
    CliCommand {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "View details about a caught Pokemon",
        kind: CommandKind::Inspect,
    },
    CliCommand {
        name: "pokedex",
        usage: "pokedex",
        description: "List all caught Pokemon",
        kind: CommandKind::Pokedex,
    },
];

/// Finds a command by its exact name.
pub fn lookup(name: &str) -> Option<&'static CliCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Probability of a successful catch.
///
/// Every 100 points of base experience is a full step towards escaping,
/// capped so that even the strongest pokemon keep a 10% catch chance.
pub fn catch_chance(base_experience: u32) -> f64 {
    let escape = (f64::from(base_experience) / 100.0).min(0.9);
    1.0 - escape
}

impl CliCommand {
    /// Runs the command against `session`, writing its output to `out`.
    pub async fn execute<W: Write>(
        &self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        match self.kind {
            CommandKind::Help => help(out)?,
            CommandKind::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            CommandKind::Map => map(session, out).await?,
            CommandKind::MapBack => map_back(session, out).await?,
            CommandKind::Explore => {
                let area = first_arg(args, "location area name")?;
                explore(session, area, out).await?
            }
            CommandKind::Catch => {
                let name = first_arg(args, "Pokemon name")?;
                catch(session, name, out).await?
            }
            CommandKind::Inspect => {
                let name = first_arg(args, "Pokemon name")?;
                inspect(session, name, out)?
            }
            CommandKind::Pokedex => pokedex(session, out)?,
        }
        Ok(Flow::Continue)
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.usage, command.description)?;
    }
    Ok(())
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let page = session.client.location_areas(session.next.as_deref()).await?;
    show_page(session, page, out)
}

async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let Some(previous) = session.previous.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };

    let page = session.client.location_areas(Some(&previous)).await?;
    show_page(session, page, out)
}

// Cursors only move once a page has been fetched and decoded.
fn show_page<W: Write>(session: &mut Session, page: LocationAreasPage, out: &mut W) -> Result<()> {
    session.next = page.next;
    session.previous = page.previous;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

async fn explore<W: Write>(session: &mut Session, area: &str, out: &mut W) -> Result<()> {
    let detail = session.client.location_area(area).await?;

    writeln!(out, "Exploring {}...", detail.name)?;
    writeln!(out, "Found Pokemon:")?;
    for encounter in &detail.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(())
}

async fn catch<W: Write>(session: &mut Session, name: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = session.client.pokemon(name).await?;

    let chance = catch_chance(pokemon.base_experience());
    if session.rng.gen::<f64>() < chance {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        info!(pokemon = %pokemon.name, "caught");
        session.pokedex.insert(pokemon.name.clone(), pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}

fn inspect<W: Write>(session: &Session, name: &str, out: &mut W) -> Result<()> {
    let Some(pokemon) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, " -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, " - {}", kind.kind.name)?;
    }
    Ok(())
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}
