use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use reo_config::Config;
use reo_core::sanitize::is_searchable;
use reo_core::{CommandRunner, CustomDefinitions, MarkupDialect, Palette, Tools, info, sanitize};

use crate::profile::ProfileStore;
use crate::search::{Resolution, resolve};

#[derive(Parser, Debug)]
#[command(
    name = "reo",
    version,
    about = "English dictionary on top of WordNet, dictd and espeak-ng"
)]
pub struct Cli {
    /// Settings profile to load
    #[arg(long, global = true, default_value = "main")]
    pub profile: String,

    /// Folder holding profiles and custom definitions
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Opens the window when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the definition of a term
    Define {
        term: String,

        #[arg(long, default_value_t = MarkupDialect::Html)]
        markup: MarkupDialect,

        /// Print plain text instead of markup
        #[arg(long)]
        plain: bool,
    },
    /// Read a term aloud with espeak-ng
    Speak { term: String },
    /// Print the versions of Reo, WordNet, dict and espeak-ng
    Info,
}

pub fn run(
    command: Command,
    config: Config,
    runner: Arc<dyn CommandRunner>,
    store: &ProfileStore,
) -> anyhow::Result<()> {
    let tools = Tools::new(runner, &config);
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Define {
            term,
            markup,
            plain,
        } => {
            let custom = config
                .dictionary
                .custom_definitions
                .then(|| CustomDefinitions::new(store.cdef_dir()));
            let palette = Palette::for_dark_font(config.ui.dark_font);
            define(
                tools,
                custom.as_ref(),
                &palette,
                &term,
                markup,
                plain,
                &mut stdout,
            )
        }
        Command::Speak { term } => speak(&tools, &term),
        Command::Info => {
            writeln!(stdout, "{}", info::version_report(&tools))?;
            Ok(())
        }
    }
}

pub fn define(
    tools: Tools,
    custom: Option<&CustomDefinitions>,
    palette: &Palette,
    text: &str,
    dialect: MarkupDialect,
    plain: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let term = sanitize(text);
    if !is_searchable(&term) {
        anyhow::bail!("Invalid Input: nothing to search in '{text}'");
    }

    let (result, speakable) = match resolve(&term, tools, custom, palette, dialect)? {
        Resolution::Show { result, speakable } => (result, speakable),
        Resolution::Exit => return Ok(()),
    };

    if !plain {
        writeln!(out, "{}", result.to_markup())?;
        return Ok(());
    }

    let display = result.to_display(speakable, palette);
    writeln!(out, "{}", display.term)?;
    if !display.pronunciation.is_empty() {
        writeln!(out, "{}", display.pronunciation)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", display.definition)?;
    if let Some(similar) = display.similar {
        writeln!(out)?;
        writeln!(out, "{similar}")?;
    }

    Ok(())
}

pub fn speak(tools: &Tools, text: &str) -> anyhow::Result<()> {
    let term = sanitize(text);
    if !is_searchable(&term) {
        anyhow::bail!("Invalid Input: nothing to speak in '{text}'");
    }
    tools.speak(&term)?;
    Ok(())
}
