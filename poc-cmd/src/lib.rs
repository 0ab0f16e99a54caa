//! Command implementations for the PoC report CLI.
//!
//! Provides subcommands that turn the shared workflow text into the report's
//! HTML sections.

use clap::Subcommand;

pub mod integrate;
pub mod outline;

#[derive(Subcommand)]
pub enum Command {
    /// Integrate the workflow text into the report HTML template
    Integrate {
        /// Path to the workflow text file
        #[arg(short = 't', long, env = "POC_WORKFLOW_TEXT")]
        text: String,

        /// Path to the HTML template
        #[arg(short = 'm', long, env = "POC_REPORT_TEMPLATE")]
        template: String,

        /// Output path (defaults to rewriting the template in place)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// List the steps and prompt counts detected in the workflow text
    Outline {
        /// Path to the workflow text file
        #[arg(short = 't', long, env = "POC_WORKFLOW_TEXT")]
        text: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Integrate {
            text,
            template,
            output,
        } => {
            let output = output.unwrap_or_else(|| template.clone());
            integrate::run_integrate(&text, &template, &output).map(|_| ())
        }
        Command::Outline { text } => outline::run_outline(&text),
    }
}
