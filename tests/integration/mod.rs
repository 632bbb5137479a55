//! Integration test modules.

mod report_run_test;
