use clap::{Parser, Subcommand};
use simple_recipes::config::{self, Site};
use simple_recipes::{convert, index, logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-recipes")]
#[command(about = "Static HTML pages and an index for a folder of plain-text recipes")]
#[command(long_about = "\
Static HTML pages and an index for a folder of plain-text recipes

Run with no arguments to convert every recipe under the current directory
and rebuild the index.

Layout:

  recipes/
  ├── config.toml            # Optional settings (see gen-config)
  ├── Stylesheet.css         # Linked from every page
  ├── Index.html             # Generated index
  └── Soups/                 # Group folder
      └── Lentil/            # Recipe folder
          ├── Lentil.txt     # Recipe source
          ├── Lentil.jpg     # Optional photo (jpg, jpeg, png, webp)
          └── Lentil.html    # Generated page

Recipe format:

  Lentil Soup
  Serves: 4
  Active Time: 15 min
  Total Time: 45 min
  Ingredients:
  - 2 cups lentils
  Directions:
  1. Simmer 20 min.
  Notes:
  - Freezes well")]
#[command(version)]
struct Cli {
    /// Recipe root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every recipe, then rebuild the index (the default)
    Build,
    /// Convert every recipe to HTML without touching the index
    Convert,
    /// Rebuild the index from the current directory tree
    Index,
    /// Parse every recipe and report what was found, writing nothing
    Check {
        /// Print parsed recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site = Site::load(&cli.root)?;
            run_convert(&site)?;
            run_index(&site)?;
            println!("{}", output::format_build_done());
        }
        Command::Convert => {
            let site = Site::load(&cli.root)?;
            run_convert(&site)?;
        }
        Command::Index => {
            let site = Site::load(&cli.root)?;
            run_index(&site)?;
        }
        Command::Check { json } => {
            let site = Site::load(&cli.root)?;
            let recipes = convert::check_all(&site)?;
            if json {
                let records: Vec<_> = recipes.iter().map(|(_, recipe)| recipe).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                output::print_check_output(&recipes, &site.root);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run_convert(site: &Site) -> Result<(), convert::ConvertError> {
    println!("{}", output::format_convert_start());
    convert::convert_all(site, output::print_convert_event)?;
    output::print_lines(output::format_convert_done());
    Ok(())
}

fn run_index(site: &Site) -> Result<(), index::IndexError> {
    println!("{}", output::format_index_start());
    let path = index::write_index(site)?;
    output::print_lines(output::format_index_done(&path));
    Ok(())
}
