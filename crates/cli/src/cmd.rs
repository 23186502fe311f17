use crate::{
    args::{Rlpe, RlpeSubcommand},
    config::{self, ConfigOverrides},
    stdin,
};
use alloy_primitives::hex;
use eyre::{Result, WrapErr};
use rlp_encode::{Item, encode_length, write_alloc_with};
use std::io::Write;

impl Rlpe {
    /// Runs the parsed command, writing its output to `out`.
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        self.cmd.run(out)
    }
}

impl RlpeSubcommand {
    /// Runs the command, writing its output to `out`.
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::Encode { value, absent, raw } => {
                let config = config::load(&ConfigOverrides { absent })?;
                let item = parse(value)?;
                let encoded = write_alloc_with(&item, &config)
                    .wrap_err_with(|| format!("failed to encode {item}"))?;
                if raw {
                    out.write_all(&encoded)?;
                } else {
                    writeln!(out, "{}", hex::encode_prefixed(encoded))?;
                }
            }
            Self::Header { length, list } => {
                writeln!(out, "{}", hex::encode_prefixed(encode_length(length, list)))?;
            }
            Self::Show { value } => {
                let item = parse(value)?;
                writeln!(out, "{item}")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn parse(value: Option<String>) -> Result<Item> {
    let value = stdin::unwrap(value)?;
    Item::parse(&value).wrap_err("invalid value")
}
