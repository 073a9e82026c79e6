use super::cli_main::{get_user_input, prompt};
use crate::Examples::frost_examples::frost_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Balance encoding and coefficients");
        println!("2. Chromium potentials at several pH values");
        println!("3. Standard Frost diagram of chromium");
        println!("4. Non-standard Frost diagram of bismuth (JSON)");
        println!("5. Custom dataset");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "1" => frost_examples(0),
            "2" => frost_examples(1),
            "3" => frost_examples(2),
            "4" => frost_examples(3),
            "5" => frost_examples(4),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
