/// Unit test target covering the public library surface
mod basic_tests;
