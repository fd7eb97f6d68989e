//! xtask - Build tasks for logstat
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man page, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use logstat::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for logstat")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man page
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            all,
        } => {
            let gen_all = all || (!man && !markdown);

            if gen_all || man {
                generate_man_page(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let man = Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    let path = man_dir.join("logstat.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// Generate COMMANDS.md from the CLI definition
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# logstat Command Reference\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    markdown.push_str("## Usage\n\n");
    markdown.push_str(&format!("```\n{}\n```\n\n", cmd.render_usage()));

    let positional: Vec<_> = cmd
        .get_arguments()
        .filter(|a| a.is_positional() && !is_builtin(a))
        .collect();
    if !positional.is_empty() {
        markdown.push_str("## Arguments\n\n");
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!("{}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_positional() && !is_builtin(a))
        .collect();
    if !options.is_empty() {
        markdown.push_str("## Options\n\n");
        for arg in options {
            let long = arg.get_long().map(|l| format!("--{}", l));
            let short = arg.get_short().map(|s| format!("-{}", s));
            let flag = match (long, short) {
                (Some(l), Some(s)) => format!("{}, {}", s, l),
                (Some(l), None) => l,
                (None, Some(s)) => s,
                _ => continue,
            };
            markdown.push_str(&format!("- `{}`: ", flag));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!("{}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("## Description\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }

    if let Some(after_help) = cmd.get_after_help() {
        markdown.push_str("## Examples\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", after_help));
        markdown.push_str("```\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
