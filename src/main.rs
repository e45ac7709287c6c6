use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use store_render::config::Config;
use store_render::page;
use store_render::utils;

const USAGE: &str = "\
store-render --page <file> --path <request-path> [--out <file>]

  --page <file>   host page HTML to rewrite
  --path <path>   request path the page is served under (drives the
                  category filter and the display cap), e.g. /catalog/tshirts
  -o, --out <file>  write the rewritten page here instead of stdout
";

struct Args {
    page: PathBuf,
    path: String,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut page = None;
    let mut path = "/".to_string();
    let mut out = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                page = Some(PathBuf::from(args.next().context("Missing value for --page")?));
            }
            "--path" => path = args.next().context("Missing value for --path")?,
            "-o" | "--out" => {
                out = Some(PathBuf::from(args.next().context("Missing output path")?));
            }
            "-h" | "--help" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown arg: {}", other),
        }
    }

    Ok(Args {
        page: page.context("Missing required --page (see --help)")?,
        path,
        out,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("store_render=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let config = Config::load()?;
    let client = utils::http::create_client(&config.user_agent)?;

    let page_html = fs::read_to_string(&args.page)
        .with_context(|| format!("Failed to read page {}", args.page.display()))?;

    let rendered = page::bind(&page_html, &args.path, &config, &client).await;

    match &args.out {
        Some(out) => {
            fs::write(out, rendered)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!("wrote rewritten page to {}", out.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
