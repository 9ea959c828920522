use std::io::{self, Write};
use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::{
    cli::Cli,
    config::{Config, DEFAULT_OUTPUT_FILE},
    process,
};

pub struct App {
    input: Option<PathBuf>,
    output: PathBuf,
}

impl App {
    pub fn new(args: &Cli) -> Result<Self> {
        let config = Config::new()?;
        let output = args
            .output
            .clone()
            .or(config.output_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        Ok(Self {
            input: args.input.clone(),
            output,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let input = match &self.input {
            Some(path) => path.clone(),
            None => prompt_for_path()?,
        };
        log::info!("Expanding address list from {}", input.display());

        let ips = process::process(&input)?;
        log::info!("Writing {} addresses to {}", ips.len(), self.output.display());

        process::write_list(&self.output, &ips)?;
        println!("Processed IP addresses are saved in '{}'", self.output.display());

        Ok(())
    }
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter the path to your file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
