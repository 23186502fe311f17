use clap::{Parser, Subcommand};
use rlp_encode::AbsentPolicy;

/// Encode values with Recursive Length Prefix from the command line.
#[derive(Debug, Parser)]
#[command(name = "rlpe", version, next_display_order = None)]
pub struct Rlpe {
    #[command(subcommand)]
    pub cmd: RlpeSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RlpeSubcommand {
    /// RLP encodes a value.
    #[command(visible_alias = "e")]
    Encode {
        /// The value to encode.
        ///
        /// JSON where strings are hex byte strings, numbers are unsigned integers, arrays are
        /// lists and `null` is an absent value. Input that is not JSON is read as one hex
        /// string. Read from stdin if omitted.
        value: Option<String>,

        /// What to write for absent values.
        #[arg(long, value_name = "POLICY")]
        absent: Option<AbsentPolicy>,

        /// Write the encoded bytes instead of hex.
        #[arg(long)]
        raw: bool,
    },

    /// Prints the RLP header for a payload length.
    #[command(visible_alias = "h")]
    Header {
        /// The payload length in bytes.
        length: usize,

        /// Print a list header instead of a string header.
        #[arg(long)]
        list: bool,
    },

    /// Parses a value and prints it in normalized form.
    #[command(visible_alias = "s")]
    Show {
        /// The value to show, in the same format as `encode`. Read from stdin if omitted.
        value: Option<String>,
    },
}
