//! REPL (Read-Eval-Print Loop) for interactive chat

use super::session::{ChatSession, ReplCommand};
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::config::{OutputConfig, ReplConfig};
use helpdesk_application::{RouteQueryInput, RouteQueryUseCase};
use helpdesk_domain::Query;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
///
/// Keeps the conversation in memory so follow-up questions ("what is its
/// price?") see the previous turns.
pub struct ChatRepl {
    use_case: RouteQueryUseCase,
    session: ChatSession,
    output: OutputConfig,
    repl: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RouteQueryUseCase) -> Self {
        Self {
            use_case,
            session: ChatSession::new(),
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.repl.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.repl.resolved_history_file();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Some(query) = Query::try_new(line) {
                        self.process_query(query).await;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        TechGear Support - Chat Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /history         - Show this conversation");
        println!("  /clear           - Forget this conversation");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_commands();
                false
            }
            ReplCommand::History => {
                println!();
                println!("{}", ConsoleFormatter::format_history(self.session.history()));
                println!();
                false
            }
            ReplCommand::Clear => {
                self.session.clear();
                println!("Conversation cleared.");
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_query(&mut self, query: Query) {
        println!();

        let input = RouteQueryInput::new(query.clone(), self.session.history().to_vec());

        let result = if self.repl.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(result) => {
                println!("{}", ConsoleFormatter::render(&result, self.output.format));
                self.session.record_turn(&query, &result);
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }
}
