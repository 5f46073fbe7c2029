use cipherforge::alphabet::Alphabet;
use cipherforge::key::Key;
use cipherforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn key_table(key: &Key, alphabet: &Alphabet) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut glyph_row = vec![Cell::new("Glyph").add_attribute(Attribute::Bold)];
    let mut letter_row = vec![Cell::new("Letter").add_attribute(Attribute::Bold)];

    for (glyph, symbol) in alphabet.iter() {
        glyph_row.push(Cell::new(symbol));
        match key.get(glyph) {
            Some(letter) => letter_row.push(Cell::new(letter).fg(Color::Green)),
            None => letter_row.push(Cell::new("-").fg(Color::DarkGrey)),
        }
    }

    table.add_row(glyph_row);
    table.add_row(letter_row);
    println!("\n{}", table);
}

pub fn scoring(text: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Combined").fg(Color::Cyan),
        Cell::new("Accept"),
        Cell::new("Lexical"),
        Cell::new("Bigram"),
        Cell::new("Words"),
        Cell::new("Known").fg(Color::Green),
        Cell::new("2-Ltr"),
        Cell::new("Pairs"),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let preview: String = if text.chars().count() > 40 {
        let head: String = text.chars().take(37).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    };

    table.add_row(vec![
        Cell::new(preview).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", d.combined)).fg(Color::Cyan),
        Cell::new(format!("{:.3}", d.acceptance)),
        Cell::new(format!("{:.2}", d.lexical)),
        Cell::new(format!("{:.3}", d.bigram)),
        Cell::new(d.word_count),
        Cell::new(d.known_words).fg(Color::Green),
        Cell::new(d.two_letter_words),
        Cell::new(d.attested_pairs),
    ]);
    println!("\n{}", table);
}
