mod output_tests;
mod parse_tests;
