//! Reflow a small buffer around a caret, then word-wrap a help string into a
//! bounded box.

use wrapline::{StyledText, wrap, wrap_words_bounded};

fn main() {
    let buffer = "wrap this editable buffer 正確 around the caret";
    let caret = 12;
    let wrapped = wrap(buffer, caret, 16);

    println!("buffer wrapped at width 16:");
    for (row, line) in wrapped.lines.iter().enumerate() {
        let marker = if row == wrapped.position.row { ">" } else { " " };
        println!(
            "{marker} {:>2} |{}|",
            line.start,
            line.content.trim_end_matches('\n')
        );
    }
    println!(
        "caret at row {}, column {}\n",
        wrapped.position.row, wrapped.position.column
    );

    let help = StyledText::plain(
        "Usage: demo [OPTIONS] FILE - wraps FILE to the console width, \
         truncating with an ellipsis when vertical space runs out",
    );
    println!("help box, 24 cells wide, 3 lines tall:");
    for line in wrap_words_bounded(&help, 24, 3) {
        println!("| {:<24} |", line.text());
    }
}
