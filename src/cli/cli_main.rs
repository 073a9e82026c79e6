use super::cli_examples::examples_menu;
use super::cli_frost::{diagram_menu, element_table_menu};
use super::cli_settings::settings_menu;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => element_table_menu(),
            "2" => diagram_menu(),
            "3" => examples_menu(),
            "4" => settings_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to RedoxFrost: Frost diagrams and Nernst potentials\n
    of elements in acidic and basic solutions \n \x1b[0m"
    );
    println!("\x1b[33m1. Oxidation states table\x1b[0m");
    println!("\x1b[33m2. Frost diagram\x1b[0m");
    println!("\x1b[33m3. Examples\x1b[0m");
    println!("\x1b[33m4. Dataset and default conditions\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

pub(crate) fn get_user_input() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

/// empty input keeps the default, unparsable input is reported and keeps the default
pub(crate) fn read_f64(text: &str, default: f64) -> f64 {
    prompt(&format!("{} [{}]: ", text, default));
    let input = get_user_input();
    let input = input.trim();
    if input.is_empty() {
        return default;
    }
    match input.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            println!("Not a number: '{}', using {}", input, default);
            default
        }
    }
}

pub(crate) fn read_yes_no(text: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    prompt(&format!("{} [{}]: ", text, hint));
    match get_user_input().trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
