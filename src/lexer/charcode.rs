use lazy_static::lazy_static;

/// Coarse class of a source byte. Decides which part of the scanner handles a
/// run of input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Space,
    Underscore,
    SingleQuote,
    LParen,
    RParen,
    Plus,
    Minus,
    Times,
    Slash,
    Comma,
    Period,
    Colon,
    Semicolon,
    LessThan,
    GreaterThan,
    Equal,
    Exclaim,
    LeftSquare,
    RightSquare,
    Unknown,
}

lazy_static! {
    pub static ref CHAR_CODES: [CharClass; 256] = {
        let mut table = [CharClass::Unknown; 256];

        for byte in b'a'..=b'z' {
            table[byte as usize] = CharClass::Letter;
        }
        for byte in b'A'..=b'Z' {
            table[byte as usize] = CharClass::Letter;
        }
        for byte in b'0'..=b'9' {
            table[byte as usize] = CharClass::Digit;
        }
        // tab, LF, VT, FF, CR
        for byte in 0x09..=0x0d {
            table[byte] = CharClass::Space;
        }

        table[b' ' as usize] = CharClass::Space;
        table[b'_' as usize] = CharClass::Underscore;
        table[b'\'' as usize] = CharClass::SingleQuote;
        table[b'(' as usize] = CharClass::LParen;
        table[b')' as usize] = CharClass::RParen;
        table[b'+' as usize] = CharClass::Plus;
        table[b'-' as usize] = CharClass::Minus;
        table[b'*' as usize] = CharClass::Times;
        table[b'/' as usize] = CharClass::Slash;
        table[b',' as usize] = CharClass::Comma;
        table[b'.' as usize] = CharClass::Period;
        table[b':' as usize] = CharClass::Colon;
        table[b';' as usize] = CharClass::Semicolon;
        table[b'<' as usize] = CharClass::LessThan;
        table[b'>' as usize] = CharClass::GreaterThan;
        table[b'=' as usize] = CharClass::Equal;
        table[b'!' as usize] = CharClass::Exclaim;
        table[b'[' as usize] = CharClass::LeftSquare;
        table[b']' as usize] = CharClass::RightSquare;

        table
    };
}

pub fn char_class(byte: u8) -> CharClass {
    CHAR_CODES[byte as usize]
}
