use clap::{Parser, Subcommand};
use folio::dispatch::DispatchTable;
use folio::{config, generate, load, output};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for JSON-driven portfolio sites")]
#[command(long_about = "\
Static site generator for JSON-driven portfolio sites

Every page is an ordered list of typed sections. Content is validated
all-or-nothing: one bad field anywhere fails the whole site, with the exact
path of the offending field.

Content structure:

  content/
  ├── config.toml          # Site config (optional)
  ├── content.json         # Home page: hero, tech stack, sections, socials
  ├── site-content.json    # { \"pages\": { \"<slug>\": { ... } } }
  └── assets/              # Copied verbatim to the output root

Section types:
  figma, miro, video, gallery, case-study, pdf, hero-narrative,
  story-scroll, manifesto, highlights, growth-lab, motion-reels,
  capabilities, resources, contact, countries-slideshow

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate content and print the inventory
    Check,
    /// Validate content and write the HTML site
    Build,
    /// List page slugs in document order
    Pages,
    /// Show one page's sections
    Show {
        /// Page slug, as listed by `pages`
        slug: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let table = DispatchTable::standard();

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let loaded = load::load(&cli.source)?;
            output::print_check_output(&loaded, &cli.source, &table);
            println!("==> Content is valid");
        }
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let loaded = load::load(&cli.source)?;
            output::print_check_output(&loaded, &cli.source, &table);

            println!("==> Generating HTML \u{2192} {}", cli.output.display());
            let report = generate::generate_with(
                &table,
                &loaded.content,
                &loaded.config,
                &cli.source,
                &cli.output,
            )?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Pages => {
            let loaded = load::load(&cli.source)?;
            output::print_pages(&loaded.content.site);
        }
        Command::Show { slug } => {
            let loaded = load::load(&cli.source)?;
            match loaded.content.site.page_by_slug(&slug) {
                Some(page) => output::print_page_detail(page, &table),
                None => {
                    eprintln!("{slug}: not found");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}
