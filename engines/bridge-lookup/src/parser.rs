use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};
use crate::token::Span;

/// Predicate to define what constitutes a word character in Smith-Francis
/// orthography. Apostrophes mark long vowels and glottal stops, so both the
/// straight and the typographic variant belong inside a word ("kwe'",
/// "msit no'kmaq" splits on the space only).
fn is_lnui_word_char(c: char) -> bool {
    match c {
        '\'' | '\u{2019}' => true,
        _ => c.is_alphabetic(),
    }
}

#[derive(Debug, Clone)]
pub enum RawToken<'a> {
    Word(&'a str),
    Punct(char),
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Try to match a token
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_lnui_word_char), RawToken::Word),
            map(char('.'), |_| RawToken::Punct('.')),
            map(char(','), |_| RawToken::Punct(',')),
            map(char(';'), |_| RawToken::Punct(';')),
            map(char('?'), |_| RawToken::Punct('?')),
            map(char('!'), |_| RawToken::Punct('!')),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                // Calculate span
                // We know 'token' came from 'input', which came from 'original_input'
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover (resilient parsing)
                if let Some(c) = input.chars().next() {
                    let len = c.len_utf8();
                    input = &input[len..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_punctuation() {
        let tokens = parse_with_spans("Kwe', teluisi Katew.");
        assert_eq!(tokens.len(), 5);

        match &tokens[0].1 {
            RawToken::Word(w) => assert_eq!(*w, "Kwe'"),
            other => panic!("expected word, got {:?}", other),
        }
        matches!(tokens[1].1, RawToken::Punct(','));
        matches!(tokens[4].1, RawToken::Punct('.'));
    }

    #[test]
    fn keeps_typographic_apostrophe_inside_word() {
        let tokens = parse_with_spans("amuji\u{2019}j");
        assert_eq!(tokens.len(), 1);
        match &tokens[0].1 {
            RawToken::Word(w) => assert_eq!(*w, "amuji\u{2019}j"),
            other => panic!("expected word, got {:?}", other),
        }
    }

    #[test]
    fn spans_index_into_original_input() {
        let input = "tekek nme'j";
        let tokens = parse_with_spans(input);
        assert_eq!(tokens.len(), 2);

        let (span, _) = &tokens[1];
        assert_eq!(&input[span.start..span.end], "nme'j");
        assert_eq!(span.len(), "nme'j".len());
    }
}
