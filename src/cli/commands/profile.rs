//! Profile printing command handler.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ResolveOptions, resolve_portfolio};
use crate::portfolio::PortfolioSnapshot;
use crate::ui::Style;

pub struct ProfileOptions {
    pub portfolio: Option<PathBuf>,
    pub json: bool,
}

pub fn print_profile(options: ProfileOptions) -> Result<()> {
    let config_file = super::load_config_file()?;
    let resolve = ResolveOptions {
        portfolio: options.portfolio,
        ..ResolveOptions::default()
    };
    let portfolio = resolve_portfolio(&resolve, &config_file)?;

    if options.json {
        println!("{}", portfolio.to_pretty_json()?);
    } else {
        print_text(&portfolio);
    }
    Ok(())
}

fn print_text(portfolio: &PortfolioSnapshot) {
    println!("{}", Style::header(format!(" {} ", portfolio.name)));
    println!(
        "{} {}",
        Style::value(&portfolio.role),
        Style::secondary(format!("({})", portfolio.location))
    );
    println!();
    println!("{}", portfolio.about);
    println!();

    println!("{}", Style::header(" PROJECTS "));
    for project in &portfolio.projects {
        let year = project.year.as_deref().unwrap_or("");
        println!("  {} {}", Style::value(&project.title), Style::secondary(year));
        println!("    {}", project.description);
        if !project.tech.is_empty() {
            println!("    {}", Style::label(project.tech.join(" · ")));
        }
    }
    println!();

    println!("{}", Style::header(" SKILLS "));
    for group in &portfolio.skills {
        println!(
            "  {} {}",
            Style::label(format!("{:14}", group.category)),
            group.items.join(", ")
        );
    }
    println!();

    println!("{}", Style::header(" EDUCATION "));
    for entry in &portfolio.education {
        println!(
            "  {} {}",
            Style::value(&entry.role),
            Style::secondary(format!("[{}]", entry.period))
        );
        println!("    {}", entry.institution);
    }
    println!();

    let socials = &portfolio.socials;
    println!("{}", Style::header(" CONTACT "));
    println!("  {}  {}", Style::label("github   "), socials.github);
    println!("  {}  {}", Style::label("linkedin "), socials.linkedin);
    for (label, value) in [
        ("twitter  ", &socials.twitter),
        ("email    ", &socials.email),
        ("instagram", &socials.instagram),
        ("facebook ", &socials.facebook),
    ] {
        if let Some(value) = value {
            println!("  {}  {value}", Style::label(label));
        }
    }
}
