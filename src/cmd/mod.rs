pub mod decipher;
pub mod encipher;
pub mod score;

use cipherforge::CfResult;
use std::fs;
use std::io::{self, Read};

/// Positional text, else the `--input` file, else stdin.
pub fn read_input(text: &Option<String>, input: &Option<String>) -> CfResult<String> {
    if let Some(t) = text {
        return Ok(t.clone());
    }
    if let Some(path) = input {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
