//! Whitespace-delimited integer reader over a buffered input stream.
//!
//! Tokens are split on ASCII whitespace straight from the byte stream and may
//! span any number of lines. Reading is lazy: bytes are consumed one token at
//! a time, so a failure or a length limit stops consumption right after the
//! offending token and nothing past it is buffered.

use std::io::{self, BufRead};

use super::error::{ReduceError, ReduceResult};
use super::sequence::InputSequence;

/// Longest token that can hold an `i64` (`-9223372036854775808`).
pub const MAX_TOKEN_LEN: usize = 20;

pub struct SequenceReader<R> {
    input: R,
    /// 1-based position of the last token handed out.
    position: usize,
}

impl<R: BufRead> SequenceReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, position: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Pull the next token's raw bytes. A token longer than
    /// [`MAX_TOKEN_LEN`] is cut at `MAX_TOKEN_LEN + 1` bytes and the rest of
    /// it is left unread.
    fn next_token(&mut self) -> ReduceResult<Option<Vec<u8>>> {
        let mut token = Vec::new();
        loop {
            let buf = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                    if token.len() > MAX_TOKEN_LEN {
                        complete = true;
                        break;
                    }
                }
            }
            self.input.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        self.position += 1;
        Ok(Some(token))
    }

    fn parse(&self, token: &[u8]) -> ReduceResult<i64> {
        std::str::from_utf8(token)
            .ok()
            .filter(|_| token.len() <= MAX_TOKEN_LEN)
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| ReduceError::InvalidToken {
                token: render(token),
                position: self.position,
            })
    }

    /// Read one integer. End of input is a parse failure.
    pub fn read_value(&mut self) -> ReduceResult<i64> {
        match self.next_token()? {
            Some(token) => self.parse(&token),
            None => Err(ReduceError::UnexpectedEnd {
                expected: 1,
                read: 0,
            }),
        }
    }

    /// Read the declared element count, rejecting negative or oversized values.
    pub fn read_count(&mut self, max: usize) -> ReduceResult<usize> {
        let count = self.read_value()?;
        match usize::try_from(count) {
            Ok(n) if n <= max => Ok(n),
            _ => Err(ReduceError::CountOutOfRange { count, max }),
        }
    }

    /// Read exactly `count` integers, stopping at the first failure.
    pub fn read_sequence(&mut self, count: usize) -> ReduceResult<InputSequence> {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            match self.next_token()? {
                Some(token) => values.push(self.parse(&token)?),
                None => {
                    return Err(ReduceError::UnexpectedEnd {
                        expected: count,
                        read: values.len(),
                    });
                }
            }
        }
        Ok(InputSequence::new(values))
    }

    /// Read every remaining integer, refusing more than `limit` of them.
    ///
    /// Stops at token `limit + 1`; an unparseable token there is still a
    /// parse failure.
    pub fn read_to_end(&mut self, limit: usize) -> ReduceResult<InputSequence> {
        let mut values = Vec::new();
        while let Some(token) = self.next_token()? {
            let value = self.parse(&token)?;
            if values.len() == limit {
                return Err(ReduceError::TooManyValues { limit });
            }
            values.push(value);
        }
        Ok(InputSequence::new(values))
    }
}

/// Printable form of a rejected token.
fn render(token: &[u8]) -> String {
    let text = String::from_utf8_lossy(&token[..token.len().min(MAX_TOKEN_LEN)]);
    if token.len() > MAX_TOKEN_LEN {
        format!("{text}...")
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::ErrorKind;
    use std::io::Cursor;

    fn reader(input: &str) -> SequenceReader<Cursor<&[u8]>> {
        SequenceReader::new(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut r = reader("4\n1 2\n\n   3\t4\n");
        let count = r.read_count(10).unwrap();
        let seq = r.read_sequence(count).unwrap();
        assert_eq!(seq, InputSequence::new(vec![1, 2, 3, 4]));
        assert_eq!(r.position(), 5);
    }

    #[test]
    fn test_invalid_token_stops_reading() {
        let mut r = reader("1 x 3");
        let err = r.read_sequence(3).unwrap_err();
        match err {
            ReduceError::InvalidToken { token, position } => {
                assert_eq!(token, "x");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        // The trailing token was never consumed.
        assert_eq!(r.position(), 2);
    }

    #[test]
    fn test_end_of_input_is_parse_error() {
        let mut r = reader("1 2");
        let err = r.read_sequence(3).unwrap_err();
        assert!(matches!(
            err,
            ReduceError::UnexpectedEnd {
                expected: 3,
                read: 2
            }
        ));

        let mut r = reader("   \n");
        assert!(matches!(
            r.read_value().unwrap_err(),
            ReduceError::UnexpectedEnd { .. }
        ));
    }

    #[test]
    fn test_count_bounds() {
        assert_eq!(reader("0").read_count(5).unwrap(), 0);
        assert_eq!(reader("5").read_count(5).unwrap(), 5);
        assert!(matches!(
            reader("-1").read_count(5).unwrap_err(),
            ReduceError::CountOutOfRange { count: -1, max: 5 }
        ));
        assert!(matches!(
            reader("6").read_count(5).unwrap_err(),
            ReduceError::CountOutOfRange { count: 6, .. }
        ));
    }

    #[test]
    fn test_values_outside_i64_are_invalid() {
        let err = reader("99999999999999999999").read_value().unwrap_err();
        assert!(matches!(err, ReduceError::InvalidToken { .. }));
    }

    #[test]
    fn test_read_to_end() {
        let seq = reader("7 2\n9\n").read_to_end(10).unwrap();
        assert_eq!(seq, InputSequence::new(vec![7, 2, 9]));

        assert!(reader("").read_to_end(10).unwrap().is_empty());

        assert!(matches!(
            reader("1 2 3 4").read_to_end(3).unwrap_err(),
            ReduceError::TooManyValues { limit: 3 }
        ));
    }

    fn bytes_reader(input: &[u8]) -> SequenceReader<Cursor<&[u8]>> {
        SequenceReader::new(Cursor::new(input))
    }

    #[test]
    fn test_non_utf8_token_is_invalid() {
        let err = bytes_reader(b"\xff\n").read_value().unwrap_err();
        match err {
            ReduceError::InvalidToken { token, position } => {
                assert_eq!(token, "\u{fffd}");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err_kind(b"12\xff"), ErrorKind::Parse);
    }

    #[test]
    fn test_bad_byte_after_valid_prefix_is_not_read() {
        let mut r = bytes_reader(b"5 \xff\n");
        assert_eq!(r.read_value().unwrap(), 5);
        assert_eq!(r.position(), 1);

        let mut r = bytes_reader(b"2 1 1 \xff\n");
        let count = r.read_count(10).unwrap();
        assert_eq!(r.read_sequence(count).unwrap(), InputSequence::new(vec![1, 1]));
    }

    #[test]
    fn test_oversized_token_is_cut_short() {
        let long = "1".repeat(10_000);
        let mut r = reader(&long);
        match r.read_value().unwrap_err() {
            ReduceError::InvalidToken { token, .. } => {
                assert_eq!(token, format!("{}...", "1".repeat(MAX_TOKEN_LEN)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(r.input.position(), (MAX_TOKEN_LEN + 1) as u64);

        assert_eq!(
            reader("-9223372036854775808").read_value().unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_read_to_end_stops_after_limit() {
        let line = vec!["7"; 200_000].join(" ");
        let mut r = reader(&line);
        assert!(matches!(
            r.read_to_end(3).unwrap_err(),
            ReduceError::TooManyValues { limit: 3 }
        ));
        assert_eq!(r.position(), 4);
        // "7 7 7 7 " and nothing more.
        assert_eq!(r.input.position(), 8);

        // A bad token in the overflow slot is still a parse failure.
        assert!(matches!(
            reader("1 2 3 x").read_to_end(3).unwrap_err(),
            ReduceError::InvalidToken { position: 4, .. }
        ));
    }

    fn err_kind(input: &[u8]) -> ErrorKind {
        bytes_reader(input).read_value().unwrap_err().kind()
    }
}
