pub mod fundamentals;
