use super::cli_main::{get_user_input, prompt, read_f64};
use crate::Electrochemistry::nernst_api::Conditions;
use crate::config_manager::{with_config_manager, with_config_manager_mut};
use log::{error, info};

pub fn settings_menu() {
    loop {
        println!("\n=== Dataset and default conditions ===");
        with_config_manager(|manager| {
            let config = manager.get_config();
            println!("Config file: {}", manager.config_file());
            println!("Dataset: {}", config.dataset);
            println!(
                "Defaults: pH = {}, [ions] = {} mol/L, T = {} K",
                config.default_pH, config.default_conc_ion, config.default_temperature
            );
        });
        println!("\x1b[33m1. Set dataset file\x1b[0m");
        println!("\x1b[33m2. Set default conditions\x1b[0m");
        println!("\x1b[33m3. Reset to defaults\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "1" => set_dataset(),
            "2" => set_default_conditions(),
            "3" => match with_config_manager_mut(|manager| manager.reset_to_defaults()) {
                Ok(()) => info!("configuration reset to defaults"),
                Err(e) => error!("cannot reset configuration: {}", e),
            },
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn set_dataset() {
    prompt("Dataset file path: ");
    let path = get_user_input().trim().to_string();
    match with_config_manager_mut(|manager| manager.set_dataset(&path)) {
        // the table already in memory stays in use for this session
        Ok(()) => println!("Dataset set to {}, used from the next start", path),
        Err(e) => error!("cannot set dataset: {}", e),
    }
}

fn set_default_conditions() {
    let current = with_config_manager(|manager| manager.default_conditions());
    let conditions = Conditions::new(
        read_f64("pH", current.pH),
        read_f64("Ion concentration, mol/L", current.conc_ion),
        read_f64("Temperature, K", current.temperature),
    );
    match with_config_manager_mut(|manager| manager.set_default_conditions(conditions)) {
        Ok(()) => println!("Default conditions updated"),
        Err(e) => error!("cannot set default conditions: {}", e),
    }
}
