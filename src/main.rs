use std::io::{stdin, stdout, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use itertools::Itertools;

use crate::gconsole::{catalog, host, Action, ConsoleMatcher, Extension, Matcher, ProjectList};

mod gconsole;

#[derive(Parser)]
#[command(name = "gconsole")]
#[command(about = "Open Google Cloud Console areas for your projects")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Answer launcher events read from stdin, one JSON object per line
    Serve,

    /// Match the query once and print the results
    Query {
        /// Comma separated list of project ids
        #[arg(long, env = "GCONSOLE_PROJECTS", value_name = "CSV")]
        projects: Option<String>,

        /// Print the result list as JSON
        #[arg(long)]
        json: bool,

        #[arg(value_name = "QUERY")]
        query: Vec<String>,
    },

    /// List all console areas
    Areas,
}

fn query(projects: Option<&str>, words: &[String], json: bool, mut out: impl Write) -> Result<()> {
    let projects = ProjectList::parse(projects);

    let argument = words.iter().join(" ");
    let argument = Some(argument.as_str()).filter(|arg| !arg.is_empty());

    let items = ConsoleMatcher::default().matches(argument, &projects);

    if json {
        host::write_action(&mut out, &Action::RenderResultList { items })?;
        return Ok(());
    }

    for item in items {
        writeln!(out, "{}\t{}", item.title, item.url)?;
    }

    Ok(())
}

fn areas(mut out: impl Write) -> Result<()> {
    for area in catalog::areas() {
        writeln!(out, "{}\t{}\t{}", area.slug, area.name, area.url())?;
    }

    Ok(())
}

fn serve() -> Result<()> {
    let mut extension = Extension::with_default_listeners(Box::new(ConsoleMatcher::default()));
    host::run(&mut extension, stdin().lock(), stdout().lock())?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(),
        Commands::Query { projects, json, query: words } => query(projects.as_deref(), &words, json, stdout().lock()),
        Commands::Areas => areas(stdout().lock()),
    }
}
