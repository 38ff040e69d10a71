mod cli;
mod error;
mod lexicon;
mod parse;
mod printer;
mod scanner;

pub use cli::*;
pub use error::*;
pub use lexicon::*;
pub use parse::*;
pub use printer::*;
pub use scanner::*;
