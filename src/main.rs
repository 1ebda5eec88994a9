use clap::Parser;
use std::path::{Path, PathBuf};

use gymmind_diet::api::{ApiClient, ApiResponse, DietRequest, PlanType, TokenStore};
use gymmind_diet::cli::{ApiCommand, Cli, Command};
use gymmind_diet::config::Config;
use gymmind_diet::error::{DietError, Result};
use gymmind_diet::interface::{
    collect_form, display_diet_plan, display_plan_types, display_warnings, prompt_password,
    prompt_text, prompt_yes_no, write_csv, write_text,
};
use gymmind_diet::logging;
use gymmind_diet::planner::{generate_plan, macro_split_by_name, macros_from_split, PlanOptions};
use gymmind_diet::state::{load_form, save_form, DietForm};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            input,
            save_form,
            seed,
            normalize_weights,
            export,
            csv,
        } => {
            let options = PlanOptions {
                normalize_meal_weights: normalize_weights || config.normalize_meal_weights,
                seed,
            };
            cmd_plan(input.as_deref(), save_form.as_deref(), &options, export, csv)
        }
        Command::Validate { input } => cmd_validate(&input),
        Command::Macros { calories, slot } => cmd_macros(calories, &slot),
        Command::Plans => {
            display_plan_types();
            Ok(())
        }
        Command::Api { command } => cmd_api(&config, command),
    }
}

/// Read a form from disk, or collect one interactively.
fn obtain_form(input: Option<&Path>, save_to: Option<&Path>) -> Result<DietForm> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(DietError::InvalidInput(format!(
                "Form file not found: {}",
                path.display()
            )));
        }
        return load_form(path);
    }

    let form = collect_form()?;
    if let Some(path) = save_to {
        save_form(path, &form)?;
        println!("Form saved to {}", path.display());
    }
    Ok(form)
}

/// Compute and display a diet plan.
fn cmd_plan(
    input: Option<&Path>,
    save_to: Option<&Path>,
    options: &PlanOptions,
    export: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let form = obtain_form(input, save_to)?;
    println!("Form progress: {:.0}%", form.progress());

    let validated = form.validate()?;
    display_warnings(&validated.warnings);

    let plan = generate_plan(&validated, options);
    display_diet_plan(&plan);

    let export = match export {
        Some(path) => Some(path),
        None if input.is_none() => {
            if prompt_yes_no("Export the plan to a text file?", false)? {
                Some(PathBuf::from(prompt_text("File name")?))
            } else {
                None
            }
        }
        None => None,
    };

    if let Some(path) = export {
        write_text(&path, &plan)?;
        println!("Plan exported to {}", path.display());
    }
    if let Some(path) = csv {
        write_csv(&path, &plan)?;
        println!("CSV exported to {}", path.display());
    }

    Ok(())
}

/// Report what a saved form is still missing.
fn cmd_validate(input: &Path) -> Result<()> {
    let form = load_form(input)?;
    println!("Form progress: {:.0}%", form.progress());

    match form.validate() {
        Ok(validated) => {
            display_warnings(&validated.warnings);
            println!("Form is complete, ready to generate a plan.");
            Ok(())
        }
        Err(errors) => Err(errors.into()),
    }
}

fn cmd_macros(calories: i32, slot: &str) -> Result<()> {
    if calories < 0 {
        return Err(DietError::InvalidInput(format!(
            "Calories must not be negative: {}",
            calories
        )));
    }

    let split = macro_split_by_name(slot);
    let macros = macros_from_split(calories, split);
    println!(
        "{} kcal ({}): Protein {}g | Carbs {}g | Fats {}g",
        calories, slot, macros.protein, macros.carbs, macros.fats
    );
    Ok(())
}

fn load_request(input: &Path) -> Result<DietRequest> {
    let validated = load_form(input)?.validate()?;
    display_warnings(&validated.warnings);
    Ok(DietRequest::from(&validated))
}

fn print_pdf_link(api: &ApiClient, response: &ApiResponse) {
    match response.pdf_path() {
        Some(path) => println!("Your diet PDF: {}", api.pdf_url(path)),
        None => println!("The backend did not return a PDF link."),
    }
}

/// Backend commands.
fn cmd_api(config: &Config, command: ApiCommand) -> Result<()> {
    let tokens = TokenStore::open(&config.token_file)?;
    let mut api = ApiClient::new(&config.api_url, tokens)?;

    match command {
        ApiCommand::Health => {
            let response = api.health_check()?;
            println!(
                "Backend online: {}",
                response.message.as_deref().unwrap_or("ok")
            );
        }
        ApiCommand::Login { email } => {
            let email = match email {
                Some(email) => email,
                None => prompt_text("Email")?,
            };
            let password = prompt_password("Password")?;
            api.login(&email, &password)?;
            println!("Logged in as {}", email);
        }
        ApiCommand::Logout => {
            api.logout()?;
            println!("Logged out.");
        }
        ApiCommand::Generate { input } => {
            let request = load_request(&input)?;
            println!("Generating your diet, this may take a minute...");
            let response = api.generate_diet(&request)?;
            print_pdf_link(&api, &response);
        }
        ApiCommand::Pay { plan, input } => {
            let plan: PlanType = plan.parse()?;
            let request = load_request(&input)?;
            println!(
                "Processing payment for {} (R$ {:.2})...",
                plan.name(),
                plan.price()
            );
            let outcome = api.process_payment(plan, &request)?;
            if outcome.approved {
                println!("Payment approved.");
                print_pdf_link(&api, &outcome.response);
            } else {
                println!("Payment was not approved.");
            }
        }
        ApiCommand::Diets => {
            let response = api.my_diets()?;
            let diets = response
                .data
                .as_ref()
                .and_then(|d| d.as_array())
                .cloned()
                .unwrap_or_default();
            if diets.is_empty() {
                println!("No diets generated yet.");
            }
            for diet in diets {
                let created = diet
                    .get("createdAt")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown date");
                match diet.get("pdfUrl").and_then(|v| v.as_str()) {
                    Some(path) => println!("  {}  {}", created, api.pdf_url(path)),
                    None => println!("  {}", created),
                }
            }
        }
    }

    Ok(())
}
