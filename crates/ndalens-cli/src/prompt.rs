//! Interactive prompts for the feedback screen.

use std::io::{self, BufRead, Write};

/// Parse a rating reply: empty means skip (0), otherwise 1-5.
pub fn parse_rating(reply: &str) -> Option<u8> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Some(0);
    }
    match reply.parse::<u8>() {
        Ok(rating @ 1..=5) => Some(rating),
        _ => None,
    }
}

/// Ask for a 1-5 rating, re-asking on invalid input. Empty input skips.
pub fn prompt_rating(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<u8> {
    loop {
        write!(output, "Rating 1-5 (enter to skip): ")?;
        output.flush()?;
        let Some(reply) = read_line(input)? else {
            return Ok(0);
        };
        match parse_rating(&reply) {
            Some(rating) => return Ok(rating),
            None => writeln!(output, "Please enter a number from 1 to 5.")?,
        }
    }
}

/// Ask for a free-text comment. Empty input means no comment.
pub fn prompt_comment(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "Comment (enter to skip): ")?;
    output.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// One line without the trailing newline; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_reply_skips() {
        assert_eq!(parse_rating(""), Some(0));
        assert_eq!(parse_rating("   "), Some(0));
    }

    #[test]
    fn valid_ratings() {
        assert_eq!(parse_rating("1"), Some(1));
        assert_eq!(parse_rating("5"), Some(5));
        assert_eq!(parse_rating(" 3 "), Some(3));
    }

    #[test]
    fn out_of_range_or_garbage_rejected() {
        assert_eq!(parse_rating("0"), None);
        assert_eq!(parse_rating("6"), None);
        assert_eq!(parse_rating("five"), None);
        assert_eq!(parse_rating("-1"), None);
    }

    #[test]
    fn prompt_rating_reasks_until_valid() {
        let mut input = Cursor::new(b"9\nabc\n4\n".to_vec());
        let mut output = Vec::new();
        let rating = prompt_rating(&mut input, &mut output).unwrap();
        assert_eq!(rating, 4);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Rating 1-5").count(), 3);
    }

    #[test]
    fn prompt_rating_skips_on_empty_line() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(prompt_rating(&mut input, &mut output).unwrap(), 0);
    }

    #[test]
    fn prompt_comment_returns_line() {
        let mut input = Cursor::new(b"too broad\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(prompt_comment(&mut input, &mut output).unwrap(), "too broad");
    }

    #[test]
    fn end_of_input_skips() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(prompt_rating(&mut input, &mut output).unwrap(), 0);
        assert_eq!(prompt_comment(&mut input, &mut output).unwrap(), "");
    }
}
