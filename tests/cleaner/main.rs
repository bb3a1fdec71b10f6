// Test entry point for cleaner tests
// Each component of the pipeline has its own file

mod cache_tests;
mod scan_tests;
