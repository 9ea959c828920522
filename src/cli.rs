use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  /// File of IP addresses and CIDR blocks, one per line.
  /// When omitted, the path is read from an interactive prompt.
  pub input: Option<PathBuf>,

  /// Where to write the expanded list (default: expanded_ip_list.txt
  /// in the current directory)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,
}
