use anyhow::Result;
use colored::Colorize;

use ib2d::schema;

use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> Result<()> {
    let path = super::input_path(&args.input)?;
    let run = ib2d::load(&path)?;
    let warnings = schema::check(&run.file);

    println!(
        "Parsed  {} parameter(s)  structure {}",
        run.file.parameters.len().to_string().cyan(),
        run.structure().display().to_string().cyan(),
    );
    if !run.structure().exists() {
        println!(
            "  {} structure file '{}' not found",
            "!".yellow(),
            run.structure().display()
        );
    }

    if warnings.is_empty() {
        println!("{} No schema warnings.", "✓".green());
        return Ok(());
    }

    let mark = if args.strict { "✗".red() } else { "!".yellow() };
    println!("{mark} {} schema warning(s):", warnings.len());
    for w in &warnings {
        println!("  {} {w}", "•".dimmed());
    }

    if args.strict {
        std::process::exit(1);
    }
    Ok(())
}
