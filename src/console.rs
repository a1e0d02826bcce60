//! Interactive console input.
//!
//! Each reader keeps prompting until it gets a usable answer. Running out of
//! input is reported as [`io::ErrorKind::UnexpectedEof`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::pack::Pack;

fn read_answer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim().to_owned())
}

/// Asks for the number of players until a positive integer is entered.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn read_player_count(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<usize> {
    loop {
        let answer = read_answer(input, output, "Please enter the number of players:")?;
        match answer.parse::<usize>() {
            Ok(0) => writeln!(output, "The number of players must be positive.")?,
            Ok(players) => return Ok(players),
            Err(_) => writeln!(output, "{answer:?} is not a positive integer.")?,
        }
    }
}

/// Asks for the location of a pack file until a non-empty path is entered.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn read_pack_path(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<PathBuf> {
    loop {
        let answer = read_answer(
            input,
            output,
            "Please enter the location of the pack to load:",
        )?;
        if !answer.is_empty() {
            return Ok(PathBuf::from(answer));
        }
    }
}

/// Loads a pack for `players` players, asking for another file each time
/// validation fails.
///
/// `first` is tried before prompting, if given.
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn read_valid_pack(
    input: &mut impl BufRead,
    output: &mut impl Write,
    players: usize,
    first: Option<PathBuf>,
) -> io::Result<Pack> {
    let mut path = match first {
        Some(path) => path,
        None => read_pack_path(input, output)?,
    };
    loop {
        match Pack::from_path(&path, players) {
            Ok(pack) => return Ok(pack),
            Err(err) => {
                writeln!(output, "Invalid pack: {err}")?;
                path = read_pack_path(input, output)?;
            }
        }
    }
}
