//! Single-dash long options
//!
//! Options like `-input-format` are accepted alongside `--input-format`.
//! They are rewritten before clap sees the command line.

use super::Cli;
use clap::CommandFactory;
use std::ffi::OsString;

/// Rewrite `-name` and `-name=value` to their double-dash form for every
/// long option `name` the command knows
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<String> = command
        .get_arguments()
        .filter_map(|a| a.get_long())
        .map(str::to_string)
        .collect();
    longs.push("help".to_string());
    longs.push("version".to_string());

    let mut positional_only = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || positional_only {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                positional_only = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_long(rest, &longs) => {
                    OsString::from(format!("-{}", text))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_long(option: &str, longs: &[String]) -> bool {
    let name = option.split_once('=').map_or(option, |(name, _)| name);
    longs.iter().any(|long| long == name)
}
