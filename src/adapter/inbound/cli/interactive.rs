//! Prompt loop that re-evaluates after every edited input.

use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use crate::adapter::inbound::cli::command::InputField;
use crate::adapter::inbound::cli::{evaluate, output};
use crate::domain::{compare, Inputs};
use crate::error::{ConfigError, Result};

/// Draw the inputs and the comparison, or the reason there is none.
fn redraw(inputs: &Inputs) {
    evaluate::print_inputs(inputs);
    match compare(inputs) {
        Ok(comparison) => evaluate::print_comparison(&comparison),
        Err(err) => {
            output::section("Result");
            output::error(&err.to_string());
            if err.is_ruin() {
                output::hint("lower the payout or monthly costs, or raise current wealth");
            }
        }
    }
}

/// Run the interactive loop until the user quits.
pub fn execute(mut inputs: Inputs) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`insurance-check interactive` needs a terminal; use `insurance-check evaluate --json`"
                .to_string(),
        }
        .into());
    }

    let theme = ColorfulTheme::default();
    output::header(env!("CARGO_PKG_VERSION"));
    redraw(&inputs);

    loop {
        let mut items: Vec<String> = InputField::ALL
            .iter()
            .map(|field| format!("{} ({})", field.label(), field.get(&inputs)))
            .collect();
        items.push("Quit".to_string());

        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Change an input")
            .items(&items)
            .default(0)
            .interact()?;

        let Some(field) = InputField::ALL.get(choice).copied() else {
            break;
        };

        let value: f64 = Input::with_theme(&theme)
            .with_prompt(field.label())
            .with_initial_text(field.get(&inputs).to_string())
            .interact_text()?;

        inputs = field.set(inputs, value);
        debug!(field = field.label(), value, "Input changed");
        redraw(&inputs);
    }

    Ok(())
}
