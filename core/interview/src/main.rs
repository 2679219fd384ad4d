mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use adapter::install_abandon_handler;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{InterviewCommand, NextSteps, ReportSource};
use ports::inbound::UseCaseRunner;
use std::process;
use std::sync::Arc;
use usecase::app::{RunOptions, RunOutcome, SessionOutcome};
use wiring::{wire_interview, App};

/// 完了前に入力が尽きたときの終了コード
const ABANDONED_EXIT_CODE: i32 = 1;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .with_field("command", command_name),
        );

        let result: Result<i32, Error> = match cmd {
            InterviewCommand::Help => {
                print_help();
                Ok(0)
            }
            InterviewCommand::Status => {
                let status = self.app.ai_config.status();
                println!("provider:  {}", status.provider);
                println!("available: {}", status.available);
                println!("model:     {}", status.model);
                Ok(0)
            }
            InterviewCommand::Run {
                answers_file,
                research,
                save,
            } => {
                if !self.app.use_case.is_live() {
                    eprintln!("confluation: no LLM credentials found, running in demo mode");
                }
                let options = RunOptions {
                    answers_file,
                    research,
                    save,
                };
                match self.app.use_case.run(&options)? {
                    RunOutcome::Finished(outcome) => {
                        print_outcome(&outcome);
                        Ok(0)
                    }
                    RunOutcome::Abandoned { answered } => {
                        eprintln!(
                            "confluation: input ended after {} of 10 answers, session discarded",
                            answered
                        );
                        Ok(ABANDONED_EXIT_CODE)
                    }
                }
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .with_field("command", command_name)
                .with_field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &InterviewCommand) -> &'static str {
    match cmd {
        InterviewCommand::Help => "help",
        InterviewCommand::Status => "status",
        InterviewCommand::Run { .. } => "run",
    }
}

fn print_outcome(outcome: &SessionOutcome) {
    let report = &outcome.report.data;
    println!();
    println!("=== {} ===", report.title);
    if outcome.report.source == ReportSource::Fallback {
        println!("(generated offline from your answers)");
    }
    println!();
    println!("The Narrative Thread");
    println!("  {}", report.narrative_thread);
    println!();
    println!("Your Unfair Advantage");
    println!("  {}", report.unfair_advantage);
    println!();
    println!("The Confluation Thesis");
    println!("  {}", report.confluation_thesis);
    println!();
    println!("Immediate Vision");
    println!("  {}", report.immediate_vision);
    if let Some(analysis) = &report.market_analysis {
        println!();
        println!("Market Analysis");
        println!("{}", analysis);
    }
    print_next_steps(&NextSteps::from_answers(&outcome.answers));
    if let Some(path) = &outcome.saved_to {
        println!();
        println!("Saved to {}", path.display());
    }
}

fn print_next_steps(steps: &NextSteps) {
    println!();
    println!("Grants & Capital");
    println!("  Based on your inputs, here are the types of funding that fit your profile:");
    for f in &steps.funding {
        println!("  - {}: {}", f.name, f.description);
    }
    println!();
    println!("Career Pivot");
    println!(
        "  If you aren't ready to found a company, here are job titles that mix {} with {}:",
        steps.superpower, steps.soft_heart
    );
    for role in &steps.roles {
        println!("  - {}", role);
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("confluation: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_interview(&config)?;
    if let Err(e) = install_abandon_handler(Arc::clone(&app.logger)) {
        let _ = app.logger.log(&LogRecord::new(
            LogLevel::Warn,
            "cli",
            "lifecycle",
            format!("failed to install Ctrl-C handler: {}", e),
        ));
    }
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: confluation [options]");
}

fn print_help() {
    println!("Usage: confluation [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -p, --provider <provider>  LLM provider: claude, gemini or mock.");
    println!("                             Default: settings.json provider, else ANTHROPIC_API_KEY, else API_KEY/GEMINI_API_KEY, else mock.");
    println!("  -a, --answers <file>       Replay answers from a JSON object keyed by question id (non-interactive).");
    println!("  -r, --research             Run a market analysis after the report.");
    println!("  -o, --save <file>          Save answers, report and transcript as JSON.");
    println!("      --fast                 Skip the cosmetic typing delays.");
    println!("      --status               Show the provider selected at start-up and exit.");
    println!("  -v, --verbose              Also write logs to stderr.");
    println!("      --generate <shell>     Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  CONFLUATION_HOME   Home directory for settings.json and state/log.jsonl.");
    println!("                     If unset, $XDG_CONFIG_HOME/confluation (e.g. ~/.config/confluation) is used.");
    println!("  ANTHROPIC_API_KEY  Credential for Claude.");
    println!("  API_KEY            Credential for Gemini (GEMINI_API_KEY is also accepted).");
    println!();
    println!("Question ids for --answers:");
    for q in domain::QUESTIONS.iter() {
        println!("  {}", q.id);
    }
}
