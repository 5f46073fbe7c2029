use clap::Args;
use cipherforge::config::AlphabetDefs;
use cipherforge::decipher::encipher;
use cipherforge::{CfResult, Key};

#[derive(Args, Debug, Clone)]
pub struct EncipherArgs {
    #[command(flatten)]
    pub alphabet: AlphabetDefs,

    /// Glyph used for 'a', then 'b', and so on
    #[arg(long)]
    pub order: String,

    /// Plaintext (falls back to --input, then stdin)
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,
}

pub fn run(args: &EncipherArgs) -> CfResult<()> {
    let alphabet = args.alphabet.build()?;
    let key = Key::from_cipher_order(&alphabet, &args.order)?;
    let plaintext = super::read_input(&args.text, &args.input)?;

    println!("{}", encipher(plaintext.trim_end_matches('\n'), &key, &alphabet));
    Ok(())
}
