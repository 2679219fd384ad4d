mod app_tests;
mod interview_tests;
mod support;
