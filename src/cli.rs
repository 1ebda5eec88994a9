use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GymMind - A diet planning CLI that computes calorie targets, macros and meal plans.
#[derive(Parser, Debug)]
#[command(name = "gymmind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a diet plan from a saved form or an interactive form.
    Plan {
        /// Saved form JSON; prompts interactively when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Save the form to this file after the interactive prompts.
        #[arg(long)]
        save_form: Option<PathBuf>,

        /// Seed for reproducible food sampling.
        #[arg(long)]
        seed: Option<u64>,

        /// Rescale meal weights to sum to 100% of the target.
        #[arg(long)]
        normalize_weights: bool,

        /// Write a plain-text export of the plan.
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write a CSV export of the plan.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Check a saved form and list everything still missing.
    Validate {
        /// Saved form JSON.
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the macro split for a meal.
    Macros {
        /// Meal calories.
        calories: i32,

        /// Slot name (breakfast, morning_snack, lunch, afternoon_snack, dinner).
        slot: String,
    },

    /// List the purchasable plans.
    Plans,

    /// Talk to the GymMind backend.
    Api {
        #[command(subcommand)]
        command: ApiCommand,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            input: None,
            save_form: None,
            seed: None,
            normalize_weights: false,
            export: None,
            csv: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ApiCommand {
    /// Check whether the backend is online.
    Health,

    /// Log in and store the auth token.
    Login {
        #[arg(long)]
        email: Option<String>,
    },

    /// Forget the stored auth token.
    Logout,

    /// Request an AI-generated diet for a saved form.
    Generate {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Pay for a plan and generate its diet.
    Pay {
        /// Plan key, see `gymmind plans`.
        #[arg(long)]
        plan: String,

        #[arg(short, long)]
        input: PathBuf,
    },

    /// List diets generated for the logged-in user.
    Diets,
}
