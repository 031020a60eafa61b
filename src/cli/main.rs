use std::io::{BufRead, Write};

use credence::{
    config::Config, context::Context, procedures::contraction::ContractionOk, reports::Report,
};

use parse_args::parse_args;

mod parse_args;

fn main() {
    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();
    parse_args(&args, &mut config);

    let mut ctx = Context::from_config(config);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Options:");
        println!("1. Add a formula and a weight to the belief base");
        println!("2. Remove a formula from the belief base");
        println!("3. Print the belief base");
        println!("4. Check for entailment in the belief base");
        println!("5. Quit");

        let Some(choice) = prompt(&mut lines, "\nEnter your choice (1-5): ") else {
            break;
        };

        match choice.trim() {
            "1" => add_belief(&mut ctx, &mut lines),

            "2" => remove_belief(&mut ctx, &mut lines),

            "3" => print_base(&ctx),

            "4" => query(&mut ctx, &mut lines),

            "5" => {
                println!(
                    "{} expansions, {} contractions ({} vacuous), {} revisions",
                    ctx.counters.expansions,
                    ctx.counters.contractions,
                    ctx.counters.vacuous_contractions,
                    ctx.counters.revisions,
                );
                println!("Exiting...");
                break;
            }

            _ => println!("Invalid choice, please enter a number between 1 and 5."),
        }
    }
}

/// A line of input, read after sending `message`.
fn prompt(
    lines: &mut std::io::Lines<std::io::StdinLock>,
    message: &str,
) -> Option<String> {
    print!("{message}");
    let _ = std::io::stdout().flush();

    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

/// Read a formula and a weight, and revise the base with the pair.
///
/// A first belief is plainly expanded --- with nothing believed there is nothing to revise against.
fn add_belief(ctx: &mut Context, lines: &mut std::io::Lines<std::io::StdinLock>) {
    let Some(string) = prompt(lines, "Enter the formula: ") else {
        return;
    };

    let formula = match ctx.formula_from_string(&string) {
        Ok(formula) => formula,
        Err(e) => {
            println!("Error: {e:?}");
            return;
        }
    };

    let Some(weight_string) = prompt(lines, "Enter the weight (0 to 1): ") else {
        return;
    };

    let weight = match weight_string.trim().parse::<f64>() {
        Ok(weight) => weight,
        Err(_) => {
            println!("Error: a weight must be a number");
            return;
        }
    };

    if ctx.belief_db.is_empty() {
        ctx.expand(formula.clone(), weight);
        println!(
            "Added {} with weight {weight} to the belief base",
            ctx.formula_string(&formula)
        );
    } else {
        match ctx.revise(formula.clone(), weight) {
            Ok(_) => println!(
                "Revised the belief base with {} at weight {weight}",
                ctx.formula_string(&formula)
            ),
            Err(e) => println!("Error: {e:?}"),
        }
    }
}

/// Read a formula and contract the base by it.
fn remove_belief(ctx: &mut Context, lines: &mut std::io::Lines<std::io::StdinLock>) {
    let Some(string) = prompt(lines, "Enter the formula to remove: ") else {
        return;
    };

    let formula = match ctx.formula_from_string(&string) {
        Ok(formula) => formula,
        Err(e) => {
            println!("Error: {e:?}");
            return;
        }
    };

    match ctx.contract(&formula) {
        Ok(ContractionOk::Contracted) => {
            println!("Removed {} from the belief base", ctx.formula_string(&formula))
        }
        Ok(ContractionOk::Vacuous) => println!(
            "{} was not entailed (or cannot be given up), nothing removed",
            ctx.formula_string(&formula)
        ),
        Err(e) => println!("Error: {e:?}"),
    }
}

/// Print each belief of the base with its weight.
fn print_base(ctx: &Context) {
    if ctx.belief_db.is_empty() {
        println!("The belief base is empty");
        return;
    }

    println!("Belief base:");
    for (formula, weight) in ctx.belief_db.beliefs() {
        println!("{}: {weight}", ctx.formula_string(formula));
    }
}

/// Read a formula and report whether the base entails it.
fn query(ctx: &mut Context, lines: &mut std::io::Lines<std::io::StdinLock>) {
    let Some(string) = prompt(lines, "Enter the formula to check for entailment: ") else {
        return;
    };

    let formula = match ctx.formula_from_string(&string) {
        Ok(formula) => formula,
        Err(e) => {
            println!("Error: {e:?}");
            return;
        }
    };

    match ctx.entails(&formula) {
        Ok(answer) => println!("Entailment: {}", Report::from(answer)),
        Err(e) => {
            println!("Entailment: {}", Report::Unknown);
            println!("Error: {e:?}");
        }
    }
}
