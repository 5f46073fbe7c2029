pub mod alphabet;
pub mod api;
pub mod config;
pub mod decipher;
pub mod error;
pub mod key;
pub mod language;
pub mod optimizer;
pub mod scorer;

pub use alphabet::Alphabet;
pub use api::{Decipherer, Decipherment, SeedVariant};
pub use error::{CfResult, CipherForgeError};
pub use key::{Glyph, Key};
pub use language::LanguageModel;
pub use scorer::Scorer;
