//! Terminal front end for a recipe collection.
//!
//! ```bash
//! recetario                  # list every recipe
//! recetario search pollo     # list recipes whose name contains "pollo"
//! recetario show Paella      # show ingredients and steps of one recipe
//! ```
//!
//! The source file and image directory come from `recetario.toml` or the
//! `RECETARIO__SOURCE` / `RECETARIO__IMAGE_ROOT` environment variables.

use log::warn;
use recetario::{ImageResolver, ImageVariant, Recipe, Session, Settings, View};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage: recetario [search <query> | show <recipe name>]";

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Ignoring invalid settings, using defaults: {e}");
        Settings::default()
    });

    let args: Vec<String> = env::args().skip(1).collect();
    let store = settings.store();
    let book = store.load(&|message: &str| eprintln!("error: {message}"));
    let mut session = Session::new();

    match args.split_first() {
        None => {}
        Some((command, query)) if command == "search" => session.set_query(query.join(" ")),
        Some((command, name)) if command == "show" && !name.is_empty() => {
            if let Err(e) = session.select_recipe(&book, &name.join(" ")) {
                eprintln!("error: {e}");
            }
        }
        Some(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    }

    let view = match session.view(&book) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("error: {e}");
            View::Listing(session.listing(&book))
        }
    };

    match view {
        View::Listing(recipes) => print_listing(&recipes, settings.summary_ingredients),
        View::Detail(recipe) => print_detail(recipe, &session, &settings),
    }

    ExitCode::SUCCESS
}

fn print_listing(recipes: &[&Recipe], summary_ingredients: usize) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        println!("{}", recipe.name());
        let summary = recipe.summary(summary_ingredients);
        if !summary.is_empty() {
            println!("    {summary}");
        }
    }
}

fn print_detail(recipe: &Recipe, session: &Session, settings: &Settings) {
    println!("{}", recipe.name());
    println!();

    let resolver = settings.image_resolver();
    match recipe
        .image()
        .and_then(|stored| resolver.resolve(stored, ImageVariant::Hero))
    {
        Some(image) => println!("Image: {}", image.path),
        None => println!("Image: none"),
    }
    println!();

    println!("Ingredients:");
    for line in recipe.display_ingredients() {
        let mark = if line.is_header() {
            "   "
        } else if session.is_checked(recipe.name(), &line.path) {
            "[x]"
        } else {
            "[ ]"
        };
        println!("  {mark} {}", line.indented(2));
    }
    println!();

    println!("Steps:");
    for (number, step) in recipe.steps() {
        println!("  {number}. {step}");
    }
}
