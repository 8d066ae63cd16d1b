use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_plan_form_rs::cli::{Cli, Command, PreferenceArgs};
use meal_plan_form_rs::config::Settings;
use meal_plan_form_rs::error::Result;
use meal_plan_form_rs::interface::{
    collect_preferences, display_ambiguity_warning, display_meal_plan, display_preferences,
    display_request_preview, prompt_yes_no,
};
use meal_plan_form_rs::request::{legacy_is_ambiguous, Encoding, MealPlanRequest};
use meal_plan_form_rs::{FormController, HttpMealPlanClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so plan text on stdout stays clean.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.endpoint, cli.encoding, cli.timeout_secs);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Form => cmd_form(&settings).await,
        Command::Plan(args) => cmd_plan(&settings, &args).await,
        Command::Preview { prefs, json } => cmd_preview(&settings, &prefs, json),
    }
}

/// Fill in the form interactively, generate, and offer to go again.
async fn cmd_form(settings: &Settings) -> Result<()> {
    let client = HttpMealPlanClient::new(settings.timeout)?;
    let mut controller = FormController::new(&settings.base_url, settings.encoding);

    println!("Personalized Meal Plan Generator");
    println!("Input your dietary preferences and goals to generate a customized meal plan.");
    println!();

    loop {
        collect_preferences(&mut controller)?;
        display_preferences(controller.preferences());
        warn_if_ambiguous(&controller);

        println!("Generating meal plan...");
        // A failed request keeps the previous plan on screen.
        if let Err(e) = controller.generate(&client).await {
            eprintln!("Could not generate a meal plan: {}", e);
        }
        display_meal_plan(controller.result());

        if !prompt_yes_no("Adjust preferences and generate again?", false)? {
            break;
        }
    }

    Ok(())
}

/// Generate a plan from flags and print it.
async fn cmd_plan(settings: &Settings, args: &PreferenceArgs) -> Result<()> {
    let prefs = args.to_preferences()?;
    let client = HttpMealPlanClient::new(settings.timeout)?;
    let mut controller = FormController::new(&settings.base_url, settings.encoding);

    controller.set_diet_type(prefs.diet_type);
    controller.set_calories(prefs.calories);
    controller.set_meal_count(prefs.meals);
    controller.set_allergies(prefs.allergies);
    warn_if_ambiguous(&controller);

    let plan = controller.generate(&client).await?;
    println!("{}", plan);
    Ok(())
}

/// Print the request that would be sent.
fn cmd_preview(settings: &Settings, args: &PreferenceArgs, json: bool) -> Result<()> {
    let prefs = args.to_preferences()?;
    let request = MealPlanRequest::build(&settings.base_url, &prefs, settings.encoding)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    display_preferences(&request.preferences);
    display_request_preview(&request);
    if settings.encoding == Encoding::Legacy && legacy_is_ambiguous(&prefs) {
        display_ambiguity_warning();
    }
    Ok(())
}

fn warn_if_ambiguous(controller: &FormController) {
    if controller.encoding() == Encoding::Legacy && legacy_is_ambiguous(controller.preferences()) {
        display_ambiguity_warning();
    }
}
