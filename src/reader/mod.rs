//! Source reading for the scanner.
//!
//! The reader owns the input bytes and the cursor into them. It is the only
//! place that knows about lines and columns; the scanner just asks for the
//! current byte and its position.

pub mod reader;
