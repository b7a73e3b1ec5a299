use super::require_init;
use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use strengths_core::coaching::{coach_system_prompt, CoachRequest};
use strengths_core::team::load_team;
use strengths_core::{identify_gaps, team_analytics};
use std::path::Path;

#[derive(Subcommand)]
pub enum CoachSubcommand {
    /// Build the coaching request for the current team (not sent anywhere)
    Prompt {
        /// Opening user message to include in the request
        #[arg(long, short = 'm')]
        message: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: CoachSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CoachSubcommand::Prompt { message } => prompt(root, message, json),
    }
}

fn prompt(root: &Path, message: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = require_init(root)?;
    let (profile, members) = load_team(root).context("failed to load team")?;
    let analytics = team_analytics(&members, &profile.top_strengths);
    let gaps = identify_gaps(&members, &profile.top_strengths);

    let system = coach_system_prompt(&profile, &members, &analytics, &gaps);
    let mut request = CoachRequest::new(&config.coach, system);
    if let Some(msg) = message.filter(|m| !m.trim().is_empty()) {
        request = request.with_user_message(msg);
    }
    tracing::debug!(model = %request.model, messages = request.messages.len(), "built coach request");

    if json {
        return print_json(&request);
    }
    println!("Model: {} (max_tokens {})", request.model, request.max_tokens);
    println!();
    println!("{}", request.system);
    for m in &request.messages {
        println!();
        println!("[user] {}", m.content);
    }
    Ok(())
}
