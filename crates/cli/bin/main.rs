use clap::Parser;
use eyre::Result;
use rlp_encode_cli::{args::Rlpe, handler, utils};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    let args = Rlpe::parse();
    args.run(&mut std::io::stdout().lock())
}
