use clap::{Parser, ValueEnum};
use std::{
  fs,
  io::{self, Read},
  path::PathBuf,
  process::exit,
};
use tracing::Level;
use vdf::{parse, Node};

/// Parse Valve VDF (KeyValues) text and print it as VDF or JSON
#[derive(Debug, Parser, PartialEq)]
#[command(name = "vdf", version)]
struct Args {
  /// Output format
  #[arg(long, value_enum, default_value_t = Format::Vdf)]
  format: Format,

  /// Remove repeated keys, keeping the first occurrence
  #[arg(long)]
  dedup: bool,

  /// Print only the element at a dotted PATH, e.g. DOTAHeroes.npc_dota_hero_antimage
  #[arg(long, value_name = "PATH")]
  select: Option<String>,

  /// Write the result to FILE instead of stdout
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Log level written to stderr
  #[arg(long, value_name = "LEVEL", env = "VDF_LOG", default_value = "warn")]
  log_level: Level,

  /// File to process, otherwise uses stdin
  file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
  Vdf,
  Json,
}

fn main() -> io::Result<()> {
  let args = Args::parse();
  tracing_subscriber::fmt()
    .with_max_level(args.log_level)
    .with_writer(io::stderr)
    .init();
  run(args)
}

fn run(args: Args) -> io::Result<()> {
  let input = match args.file.as_ref() {
    Some(path) => fs::read(path)?,
    None => {
      let mut input = Vec::new();
      io::stdin().read_to_end(&mut input)?;
      input
    }
  };
  tracing::debug!(bytes = input.len(), file = ?args.file, "parsing");

  let mut root = parse(&input);
  if args.dedup {
    root.remove_duplicates();
  }

  let node = match args.select.as_deref() {
    Some(path) => {
      let path: Vec<&str> = path.split('.').collect();
      match root.get_sub_element(&path) {
        Ok(node) => node,
        Err(e) => {
          eprintln!("{}", e);
          exit(1);
        }
      }
    }
    None => &root,
  };

  let output = render(node, args.format)?;
  match args.output.as_ref() {
    Some(path) => fs::write(path, output)?,
    None => print!("{}", output),
  }
  Ok(())
}

fn render(node: &Node, format: Format) -> io::Result<String> {
  Ok(match format {
    Format::Vdf if node.is_leaf() => format!("{}\n", node.as_str().unwrap_or_default()),
    Format::Vdf => node.to_string(),
    Format::Json => node.to_json_pretty()? + "\n",
  })
}
