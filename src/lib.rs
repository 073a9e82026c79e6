#[allow(non_snake_case)]
pub mod Electrochemistry;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod FrostDiagram;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
#[allow(non_snake_case)]
pub mod config_manager;
