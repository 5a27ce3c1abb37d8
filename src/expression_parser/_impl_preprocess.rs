use std::iter::Peekable;
use std::str::Chars;

/// **(internal)** Pieces of a constraint string: parentheses and maximal runs of other
/// non-whitespace characters.
#[derive(Debug, Eq, PartialEq)]
enum Piece {
    Open,
    Close,
    Word(String),
}

/// Normalize the whitespace and parentheses of a raw constraint string.
///
/// Whitespace runs collapse into a single space, every `(` that does not follow another `(`
/// gets a space before it, every `)` that is not followed by another `)` gets a space after
/// it, there are no spaces directly inside parentheses and the result is trimmed. As a
/// consequence, preprocessing is idempotent.
pub fn preprocess(raw: &str) -> String {
    let pieces = split_pieces(&mut raw.chars().peekable());
    let mut output = String::with_capacity(raw.len());
    let mut previous: Option<&Piece> = None;
    for piece in &pieces {
        if let Some(previous) = previous {
            // The only places without a space: right after `(` and right before `)`.
            if *previous != Piece::Open && *piece != Piece::Close {
                output.push(' ');
            }
        }
        match piece {
            Piece::Open => output.push('('),
            Piece::Close => output.push(')'),
            Piece::Word(word) => output.push_str(word),
        }
        previous = Some(piece);
    }
    output
}

/// Split a preprocessed constraint string into words. Empty input gives no words.
pub fn tokenize(preprocessed: &str) -> Vec<String> {
    preprocessed
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

/// **(internal)** Process a peekable iterator of characters into a vector of `Piece`s.
fn split_pieces(data: &mut Peekable<Chars>) -> Vec<Piece> {
    let mut output = Vec::new();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* skip whitespace */ }
            '(' => output.push(Piece::Open),
            ')' => output.push(Piece::Close),
            _ => {
                // start of a word
                let mut word = String::new();
                word.push(c);
                while let Some(c) = data.peek() {
                    if c.is_whitespace() || *c == '(' || *c == ')' {
                        break;
                    } else {
                        word.push(*c);
                        data.next(); // advance iterator
                    }
                }
                output.push(Piece::Word(word));
            }
        }
    }
    output
}
