mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::advice::{ContentSuggestion, GrowthAnalysis, PostOptimization};
use domain::scoring::EngagementVelocity;
use domain::{CharBudget, DashboardCommand, PlatformConfig, PostAnalytics};
use ports::inbound::UseCaseRunner;
use std::process;
use usecase::advisor::{AdviceSource, Advised};
use usecase::app::{GrowthOverrides, OptimizedDraft, Overview, Playbook, ScoredPost};
use wiring::{wire_dashboard, App};

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

        let result = self.dispatch(cmd);

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

impl Runner {
    fn dispatch(&self, cmd: DashboardCommand) -> Result<i32, Error> {
        let use_case = &self.app.use_case;
        match cmd {
            DashboardCommand::Help => print_help(),
            DashboardCommand::Status => {
                let status = self.app.ai_config.status();
                println!("provider:  {}", status.provider);
                println!("available: {}", status.available);
                println!("model:     {}", status.model);
            }
            DashboardCommand::Overview => {
                print_overview(&use_case.overview()?, self.app.demo_seed);
            }
            DashboardCommand::Platforms { region, category } => {
                print_platforms(&use_case.platforms(region.as_deref(), category)?);
            }
            DashboardCommand::Posts { platform, limit } => {
                print_posts(&use_case.posts(platform, limit)?);
            }
            DashboardCommand::Score { post_id } => print_scored(&use_case.score(&post_id)?),
            DashboardCommand::Velocity { samples } => print_velocity(&use_case.velocity(&samples)?),
            DashboardCommand::Tips { platform } => print_playbook(&use_case.playbook(platform)),
            DashboardCommand::Suggest {
                platform,
                niche,
                tone,
            } => {
                self.warn_if_demo();
                print_suggestions(&use_case.suggest(platform, &niche, &tone)?);
            }
            DashboardCommand::Growth {
                platform,
                followers,
                monthly_growth,
                posts_per_week,
            } => {
                self.warn_if_demo();
                let overrides = GrowthOverrides {
                    followers,
                    monthly_growth,
                    posts_per_week,
                };
                print_growth(&use_case.growth(platform, &overrides)?);
            }
            DashboardCommand::Optimize {
                platform,
                content_type,
                draft,
            } => {
                self.warn_if_demo();
                print_optimization(&use_case.optimize(platform, content_type, &draft)?);
            }
        }
        Ok(0)
    }

    fn warn_if_demo(&self) {
        if !self.app.use_case.is_live() {
            eprintln!("pulse: no LLM credentials found, running in demo mode");
        }
    }
}

fn cmd_name_for_log(cmd: &DashboardCommand) -> &'static str {
    match cmd {
        DashboardCommand::Help => "help",
        DashboardCommand::Status => "status",
        DashboardCommand::Overview => "overview",
        DashboardCommand::Platforms { .. } => "platforms",
        DashboardCommand::Posts { .. } => "posts",
        DashboardCommand::Score { .. } => "score",
        DashboardCommand::Velocity { .. } => "velocity",
        DashboardCommand::Tips { .. } => "tips",
        DashboardCommand::Suggest { .. } => "suggest",
        DashboardCommand::Growth { .. } => "growth",
        DashboardCommand::Optimize { .. } => "optimize",
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut s: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    s.push_str("...");
    s
}

fn print_post_line(p: &PostAnalytics) {
    println!(
        "  {:<14} {:<9} {:<9} er {:>6.2}%  virality {:>4}{}  {}",
        p.id,
        p.platform.as_str(),
        p.content_type.as_str(),
        p.engagement_rate(),
        p.virality_score(),
        if p.top_performing() { " *" } else { "  " },
        preview(&p.text, 48)
    );
}

fn print_overview(overview: &Overview, seed: u64) {
    println!("Connected accounts");
    for c in overview.connections.iter().filter(|c| c.connected) {
        println!(
            "  {:<10} @{:<16} {:>8} followers",
            c.platform.config().name,
            c.username.as_deref().unwrap_or("-"),
            c.followers.unwrap_or(0)
        );
    }
    let pending = overview.connections.iter().filter(|c| !c.connected).count();
    println!("  ({} more platforms available, see `pulse platforms`)", pending);
    println!();
    println!("Platform metrics (last 30 days)");
    for m in &overview.metrics {
        println!(
            "  {:<10} followers {:>7}  impressions {:>8}  reach {:>8}  er {:>6.2}%  growth {:>5.2}%/mo",
            m.platform.as_str(),
            m.followers,
            m.counts.impressions,
            m.counts.reach,
            m.engagement_rate(),
            m.follower_growth_rate
        );
    }
    println!();
    println!("Total followers:          {}", overview.total_followers);
    println!("Average engagement rate:  {:.2}%", overview.avg_engagement_rate);
    println!();
    if !overview.alerts.is_empty() {
        println!("Recent alerts");
        for a in &overview.alerts {
            let platform = a.platform.map(|p| p.config().name).unwrap_or("-");
            println!("  [{}] {} ({}): {}", platform, a.title, a.kind.as_str(), a.message);
        }
        println!();
    }
    println!("Top posts");
    for p in &overview.top_posts {
        print_post_line(p);
    }
    println!();
    println!("(demo data, seed {}; pass --seed {} to reproduce)", seed, seed);
}

fn print_platforms(configs: &[&PlatformConfig]) {
    if configs.is_empty() {
        println!("No platforms match.");
        return;
    }
    for p in configs {
        println!(
            "  {:<10} {:<14} {:<12} {}",
            p.id.as_str(),
            p.name,
            p.category.as_str(),
            p.regions.join(",")
        );
    }
}

fn print_posts(posts: &[PostAnalytics]) {
    if posts.is_empty() {
        println!("No posts.");
        return;
    }
    for p in posts {
        print_post_line(p);
    }
    println!();
    println!("* top performing (engagement rate above 5%)");
}

fn print_scored(scored: &ScoredPost) {
    let a = &scored.analysis;
    println!("Post {} on {}", scored.post.id, scored.post.platform.config().name);
    println!("  \"{}\"", preview(&scored.post.text, 96));
    println!();
    println!("Virality score: {}/100 ({})", a.overall_score, a.prediction);
    println!(
        "Engagement rate {:.2}% vs benchmark {:.2}% ({:+}%)",
        scored.post.engagement_rate(),
        scored.benchmarks.avg_engagement_rate,
        a.benchmark_comparison
    );
    println!();
    println!("Factors");
    for f in &a.factors {
        println!(
            "  {:<20} {:>5.1}  x{:.2}  {}",
            f.name, f.score, f.weight, f.description
        );
    }
    println!();
    println!("Recommendations");
    for r in &a.recommendations {
        println!("  - {}", r);
    }
}

fn print_velocity(points: &[EngagementVelocity]) {
    println!("  {:>8} {:>12} {:>10}", "minutes", "engagement", "per min");
    for p in points {
        println!(
            "  {:>8} {:>12} {:>10.2}{}",
            p.minutes_elapsed,
            p.cumulative_engagement,
            p.velocity,
            if p.is_accelerating { "  accelerating" } else { "" }
        );
    }
}

fn print_playbook(book: &Playbook) {
    println!("{} ({})", book.platform.name, book.platform.category.as_str());
    match book.benchmarks {
        Some(b) => println!(
            "Benchmarks: er {:.1}%, reach {}, viral above {:.0}%, growth {:.1}%/mo",
            b.avg_engagement_rate, b.avg_reach, b.viral_threshold, b.growth_rate_benchmark
        ),
        None => println!("Benchmarks: none published, generic values apply"),
    }
    let types: Vec<&str> = book.content_types.iter().map(|t| t.as_str()).collect();
    println!("Best formats: {}", types.join(", "));
    if !book.signals.is_empty() {
        println!();
        println!("Algorithm signals");
        for s in book.signals {
            println!("  {:<28} {:>5}  {}", s.signal, s.weight, s.how_to_optimize);
        }
    }
    if !book.tips.is_empty() {
        println!();
        println!("Tips");
        for t in book.tips {
            println!("  - {}", t);
        }
    }
    if let Some(times) = &book.posting_times {
        let hours: Vec<String> = times.best_hours_utc.iter().map(|h| format!("{:02}:00", h)).collect();
        println!();
        println!("Best times (UTC): {} at {}", times.best_days.join(", "), hours.join(", "));
        println!("  {}", times.reasoning);
    }
}

fn print_source_note(source: AdviceSource) {
    if source == AdviceSource::Fallback {
        println!("(generated offline)");
        println!();
    }
}

fn print_suggestions(advised: &Advised<Vec<ContentSuggestion>>) {
    print_source_note(advised.source);
    for (i, s) in advised.data.iter().enumerate() {
        let idea = &s.idea;
        println!(
            "{}. {} [{}, {}, {}]",
            i + 1,
            idea.title,
            idea.content_type,
            idea.category.as_str(),
            idea.virality_potential
        );
        for line in idea.body.lines() {
            println!("   | {}", line);
        }
        if !idea.hashtags.is_empty() {
            println!("   {}", idea.hashtags.join(" "));
        }
        println!("   reach: {}", idea.estimated_reach);
        println!("   why:   {}", idea.reasoning);
        println!();
    }
}

fn print_growth(advised: &Advised<GrowthAnalysis>) {
    print_source_note(advised.source);
    let d = &advised.data.diagnosis;
    println!("{}: {}", advised.data.platform_id.config().name, d.current_phase.as_str());
    println!(
        "Growth {:.2}%/week, {:.2}%/month; projected {} followers in 30 days, {} in 90 days",
        d.weekly_growth_rate, d.monthly_growth_rate, d.projected_followers30d, d.projected_followers90d
    );
    println!();
    println!("Bottlenecks");
    for b in &d.bottlenecks {
        println!("  [{}] {}: {}", b.severity.as_str(), b.issue, b.impact);
        println!("      fix: {}", b.solution);
    }
    println!();
    println!("Opportunities");
    for o in &d.opportunities {
        println!("  [{} effort] {} ({}, {})", o.effort.as_str(), o.opportunity, o.potential_impact, o.timeframe);
        for step in &o.steps {
            println!("      - {}", step);
        }
    }
    if let Some(plan) = &d.recovery_plan {
        println!();
        println!("Recovery plan");
        println!("  {}", plan.diagnosis);
        for (i, phase) in plan.phases().iter().enumerate() {
            println!("  Phase {}: {} ({})", i + 1, phase.name, phase.duration);
            for a in &phase.actions {
                println!("      - {}", a);
            }
        }
        println!("  {}", plan.expected_outcome);
    }
}

fn budget_line(label: &str, budget: &CharBudget) -> String {
    let mut line = format!("{}: {}/{} characters", label, budget.count, budget.limit);
    if budget.is_over_limit() {
        line.push_str(&format!(" ({} over the limit)", budget.overflow()));
    }
    line
}

fn print_optimization(result: &OptimizedDraft) {
    let advised: &Advised<PostOptimization> = &result.advised;
    print_source_note(advised.source);
    if result.draft_budget.is_over_limit() {
        eprintln!("pulse: {}", budget_line("draft", &result.draft_budget));
    }
    let o = &advised.data;
    println!("{}", o.optimized);
    println!();
    println!("{}", budget_line("Length", &result.optimized_budget));
    println!();
    println!("Changes");
    for c in &o.changes {
        println!("  - {}", c);
    }
    println!("Predicted lift: {}", o.predicted_lift);
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("pulse: {}", e);
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
        ParseOutcome::Display(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    let app = wire_dashboard(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: pulse [options] [command]");
}

fn print_help() {
    println!("Usage: pulse [options] [command]");
    println!("Commands:");
    println!("  overview                            Connected accounts, metrics, alerts and top posts (default)");
    println!("  platforms [--region R] [--category C]");
    println!("                                      List supported platforms");
    println!("  posts [-p platform] [-n limit]      Posts ordered by engagement rate");
    println!("  score <post-id>                     Virality analysis for one post");
    println!("  velocity <min:engagement>...        Engagement velocity from cumulative samples");
    println!("  tips -p platform                    Algorithm signals, tips and posting times");
    println!("  suggest -p platform --niche N [--tone T]");
    println!("                                      Five content suggestions");
    println!("  growth -p platform [--followers N] [--monthly-growth P] [--posts-per-week N]");
    println!("                                      Growth diagnosis and recovery plan");
    println!("  optimize -p platform [-t type] <draft>");
    println!("                                      Rewrite a draft for engagement");
    println!("  status                              Show the provider selected at start-up");
    println!();
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("      --provider <provider>  LLM provider: claude, gemini or mock.");
    println!("                             Default: settings.json provider, else ANTHROPIC_API_KEY, else API_KEY/GEMINI_API_KEY, else mock.");
    println!("      --seed <n>             Seed for demo data and tip selection.");
    println!("  -v, --verbose              Also write logs to stderr.");
    println!("      --generate <shell>     Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  CONFLUATION_HOME   Home directory for settings.json and state/log.jsonl.");
    println!("                     If unset, $XDG_CONFIG_HOME/confluation (e.g. ~/.config/confluation) is used.");
    println!("  ANTHROPIC_API_KEY  Credential for Claude.");
    println!("  API_KEY            Credential for Gemini (GEMINI_API_KEY is also accepted).");
}
