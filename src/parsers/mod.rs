//! One parser per game family. Each receives text already classified as
//! belonging to its spec and returns an [`Outcome`](crate::score::Outcome) or a
//! [`ParseError`] describing why the result line could not be read.

pub mod angle;
pub mod countryle;
pub mod crossword;
pub mod flagle;
pub mod nerdle;
pub mod quordle;
pub mod tokens;
pub mod wordle;

mod errors;

pub use errors::ParseError;
