// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use clap::Parser;
use cuid2_me::{Alphabet, Cuid, Error, MAXIMUM_LENGTH};
use log::debug;

pub const LENGTH_ENV: &str = "CUID2_LENGTH";
pub const DEFAULT_BLOCK_LENGTH: usize = 4;

/// Print a collision-resistant unique id.
#[derive(Debug, Parser)]
#[command(name = "cuid2", version)]
pub struct Cli {
    /// Length of the id; lengths above 98 join several ids together.
    #[arg(env = LENGTH_ENV, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Split the id into dash separated blocks.
    #[arg(short, long)]
    pub pretty: bool,

    /// Length of each block when printing with --pretty.
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_LENGTH)]
    pub block_length: usize,

    /// 36 symbols to write the id with instead of 0-9a-z.
    #[arg(short, long)]
    pub alphabet: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::try_parse()?;
    debug!("{:?}", cli);

    println!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut cuid = Cuid::new()?;
    let length = match cli.length {
        Some(length) => usize::try_from(length)
            .map_err(|_| format!("length must not be negative, got {}", length))?,
        None => cuid.length(),
    };

    let mut id = generate(&mut cuid, length)?;
    if let Some(symbols) = &cli.alphabet {
        id = Alphabet::base36().translate(&id, &Alphabet::new(symbols)?)?;
    }
    if cli.pretty {
        if cli.block_length == 0 {
            return Err("block length must be at least 1".into());
        }
        id = into_blocks(&id, cli.block_length);
    }
    Ok(id)
}

/// Generate `length` characters, one id per [`MAXIMUM_LENGTH`] characters.
fn generate(cuid: &mut Cuid, length: usize) -> Result<String, Error> {
    if length <= MAXIMUM_LENGTH {
        return cuid.generate_with_length(length);
    }
    let mut id = String::with_capacity(length);
    let mut remaining = length;
    while remaining > 0 {
        let segment = remaining.min(MAXIMUM_LENGTH);
        id.push_str(&cuid.generate_with_length(segment)?);
        remaining -= segment;
    }
    Ok(id)
}

fn into_blocks(id: &str, block_length: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    chars
        .chunks(block_length)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}
