use clap::{Parser, Subcommand};
use simple_landing::theme::ThemeSignal;
use simple_landing::{catalog, config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-landing")]
#[command(about = "Static landing page generator for programming languages")]
#[command(long_about = "\
Static landing page generator for programming languages

Page content lives in site.toml, presentation in config.toml. Every asset the
catalog references must exist under the assets directory; a catalog that does
not validate never produces a page.

Content structure:

  content/
  ├── config.toml        # Colors, feature columns, page metadata (optional)
  ├── site.toml          # Hero, [[showcase]], [[feature]], [contribute]
  └── assets/            # Logo, wave, feature icons → copied to output root
      └── img/
          ├── logo.svg
          └── waves.svg

Showcases alternate automatically: the first puts its code on the left, the
second on the right, and so on. SVG graphics are inlined and take the color
chosen for the active theme (--theme light|dark; anything else means light).

Run 'simple-landing gen-catalog' for a complete example site.toml and
'simple-landing gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Theme signal: `light` or `dark` (unrecognized values fall back to light)
    #[arg(long, default_value = "light", global = true)]
    theme: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate config, catalog and assets without writing anything
    Check,
    /// Render index.html and copy assets into the output directory
    Generate,
    /// Print the assembled page tree as JSON
    Tree,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a complete example site.toml
    GenCatalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let signal = ThemeSignal::from_raw(&cli.theme);

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = generate::load_site(&cli.source)?;
            output::print_check_output(&site, &cli.source);
            println!("==> Content is valid");
        }
        Command::Generate => {
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&cli.source, &cli.output, signal)?;
            output::print_generate_output(&report);
        }
        Command::Tree => {
            println!("{}", generate::tree_json(&cli.source, signal)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}
