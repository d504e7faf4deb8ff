mod cli_tests;
mod layout;
