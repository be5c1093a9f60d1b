//! Decoding of raw terminal input into text

use crate::terminal::TermEncoding;
use encoding_rs::mem::decode_latin1;

/// Result of decoding one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Non-ASCII input arrived while the terminal encoding was unknown
    pub guessed: bool,
}

/// Decode a line of raw input bytes.
///
/// ASCII passes through untouched. Anything else is decoded with the
/// terminal's encoding, or UTF-8 when that is unknown, and falls back to
/// Latin-1 when the primary decoding fails.
pub fn decode_input(bytes: &[u8], encoding: TermEncoding) -> Decoded {
    if bytes.is_ascii() {
        return Decoded {
            text: decode_latin1(bytes).into_owned(),
            guessed: false,
        };
    }

    let primary = match encoding {
        TermEncoding::Known(encoding) => encoding,
        TermEncoding::Unknown => encoding_rs::UTF_8,
    };
    let text = match primary.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.into_owned(),
        None => decode_latin1(bytes).into_owned(),
    };

    Decoded {
        text,
        guessed: encoding == TermEncoding::Unknown,
    }
}

/// Strip a trailing `\n` or `\r\n`
pub fn trim_line_ending(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    bytes
}
