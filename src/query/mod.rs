mod filter;
mod statement;

pub use filter::Filter;
pub use statement::Statement;
