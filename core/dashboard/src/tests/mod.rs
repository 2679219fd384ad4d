mod app_tests;
mod support;
