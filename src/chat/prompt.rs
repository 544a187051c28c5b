use anyhow::Result;

use crate::portfolio::PortfolioSnapshot;

/// Persona given to the assistant. `{name}` and `{portfolio}` are replaced by
/// [`build_system_instruction`], not by `format!`.
#[allow(clippy::literal_string_with_formatting_args)]
pub const SYSTEM_INSTRUCTION_TEMPLATE: &str = "\
You are an AI assistant living inside the portfolio website of {name}.

Here is the portfolio data you need to know:
{portfolio}

Your personality:
- Witty, slightly sarcastic, and technically knowledgeable.
- You adopt the \"Neo-Brutalist\" vibe of the website (bold, direct, confident).
- You love discussing code, design trends, and why brutalism is better than minimalism.
- Keep responses relatively concise (under 100 words) unless asked for a deep dive.
- If asked about something not in the data, creatively pivot back to the portfolio or admit ignorance with style.

Formatting:
- Use Markdown for code blocks or emphasis.";

#[allow(clippy::literal_string_with_formatting_args)]
const NAME_PLACEHOLDER: &str = "{name}";
#[allow(clippy::literal_string_with_formatting_args)]
const PORTFOLIO_PLACEHOLDER: &str = "{portfolio}";

/// Fills the persona template with the portfolio owner's name and the
/// portfolio as pretty JSON.
pub fn build_system_instruction(portfolio: &PortfolioSnapshot) -> Result<String> {
    let json = portfolio.to_pretty_json()?;
    Ok(SYSTEM_INSTRUCTION_TEMPLATE
        .replace(NAME_PLACEHOLDER, &portfolio.name)
        .replace(PORTFOLIO_PLACEHOLDER, &json))
}
