use eyre::{Chain, EyreHandler};
use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Write},
};

/// Error report for `rlpe`: the deduplicated cause chain, plus a hint about the expected input
/// when an encoding error is in the chain.
///
/// With `RLPE_DEBUG` set, reports are handed to the `color-eyre` handler instead.
struct Handler {
    verbose: Option<Box<dyn EyreHandler>>,
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&dedup_chain(error).into_iter().format("; "), f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verbose {
            Some(verbose) => verbose.debug(error, f),
            None if f.alternate() => fmt::Debug::fmt(error, f),
            None => write_report(error, f),
        }
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(verbose) = &mut self.verbose {
            verbose.track_caller(location);
        }
    }
}

/// Writes the user-facing report for `error`.
pub fn write_report(error: &(dyn Error + 'static), out: &mut dyn Write) -> fmt::Result {
    let causes = dedup_chain(error);
    let mut causes = causes.iter();
    if let Some(first) = causes.next() {
        write!(out, "{first}")?;
    }
    for cause in causes {
        write!(out, "\n  caused by: {cause}")?;
    }
    if let Some(hint) = input_hint(error) {
        write!(out, "\n\nhint: {hint}")?;
    }
    Ok(())
}

/// Returns a hint for encoding errors caused by malformed input.
fn input_hint(error: &(dyn Error + 'static)) -> Option<&'static str> {
    let error = Chain::new(error).find_map(|cause| cause.downcast_ref::<rlp_encode::Error>())?;
    match error {
        rlp_encode::Error::InvalidHex(_) => {
            Some("byte strings are hex, with or without `0x`: \"0x646f67\" or \"646f67\"")
        }
        rlp_encode::Error::Unsupported(_) => Some(
            "values are hex strings, unsigned integers up to 2^256-1, arrays of values or null",
        ),
        rlp_encode::Error::InvalidJson(_) => Some("input starting with `[`, `{` or `\"` is JSON"),
        rlp_encode::Error::Sink(_) | rlp_encode::Error::Allocation(_) => None,
    }
}

/// Collects the messages of an error chain, dropping causes already contained in the message
/// before them.
///
/// `failed to encode: invalid hex; invalid hex` becomes `failed to encode: invalid hex`.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<_> =
        Chain::new(error).map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

/// Installs the `rlpe` [`eyre`] hook and the `color-eyre` [`panic`](mod@std::panic) hook.
///
/// Setting `RLPE_DEBUG` switches error reports to the `color-eyre` handler, with backtraces
/// and span traces.
pub fn install() {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug in rlpe. Consider reporting it.")
        .into_hooks();
    panic_hook.install();
    let eyre_hook = eyre_hook.into_eyre_hook();
    let verbose = std::env::var_os("RLPE_DEBUG").is_some();
    if let Err(e) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler { verbose: verbose.then(|| eyre_hook(e)) })
    })) {
        debug!("failed to install eyre error hook: {e}");
    }
}
