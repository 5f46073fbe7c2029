#![allow(dead_code)]

use cipherforge::decipher::encipher;
use cipherforge::language::loader::count_bigrams;
use cipherforge::{Alphabet, Key, LanguageModel, Scorer};
use std::sync::Arc;

pub const PLAINTEXT: &str = "it is a truth universally acknowledged that a single man in possession of a good fortune \
must be in want of a wife. however little known the feelings or views of such a man may be on his \
first entering a neighbourhood, this truth is so well fixed in the minds of the surrounding families, \
that he is considered the rightful property of some one or other of their daughters.";

/// Glyph for 'a', then 'b', ... over the standard alphabet.
pub const CIPHER_ORDER: &str = "w$0nt76@xq#u2ypz3vo5r8914s";

const COMMON_WORDS: &str = "the of and to a in is it you that he was for on are with as i his they be at one \
have this from or had by hot word but what some we can out other were all there when up use your how said an \
each she which do their time if will way about many then them write would like so these her long make thing see \
him two has look more day could go come did number sound no most people my over know water than call first who \
may down side been now find any new work part take get place made live where after back little only round man \
year came show every good me give our under name very through just form sentence great think say help low line \
differ turn cause much mean before move right boy old too same tell does set three want air well also play small \
end put home read hand port large spell add even land here must big high such follow act why ask men change went \
light kind off need house picture try us again animal point mother world near build self earth father head stand \
own page should country found answer school grow study still learn plant cover food sun four between state keep \
eye never last let thought city tree cross farm hard start might story saw far sea draw left late run while press \
close night real life few north";

pub fn word_list() -> Vec<String> {
    PLAINTEXT
        .split_whitespace()
        .map(|w| w.trim_matches(|c| c == '.' || c == ','))
        .chain(COMMON_WORDS.split_whitespace())
        .map(str::to_string)
        .collect()
}

/// Words from the passage plus common filler; bigrams from the passage itself.
pub fn model() -> Arc<LanguageModel> {
    Arc::new(LanguageModel::new(word_list(), count_bigrams(PLAINTEXT)))
}

pub fn scorer() -> Scorer {
    Scorer::new(model(), Default::default())
}

pub fn true_key() -> Key {
    Key::from_cipher_order(&Alphabet::standard(), CIPHER_ORDER).unwrap()
}

pub fn ciphertext() -> String {
    encipher(PLAINTEXT, &true_key(), &Alphabet::standard())
}

pub fn glyph(c: char) -> cipherforge::Glyph {
    Alphabet::standard().glyph(c).unwrap()
}
