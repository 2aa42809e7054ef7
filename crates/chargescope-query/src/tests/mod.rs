//! Query-layer tests.


mod filter_tests;
mod rollup_tests;
