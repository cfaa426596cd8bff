pub mod algebra;
pub mod structures;
pub mod term_stream;
pub mod utils;

pub use algebra::scalar::Scalar;

pub use structures::poly::Poly;
pub use structures::term::{Term, TermError};
pub use term_stream::{read_terms, write_terms, MalformedTerm, TermStreamError};
