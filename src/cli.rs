pub mod cli_examples;
pub mod cli_frost;
pub mod cli_main;
pub mod cli_settings;
