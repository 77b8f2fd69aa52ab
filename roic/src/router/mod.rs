pub mod fundamentals;
pub mod macros;
pub mod util;
