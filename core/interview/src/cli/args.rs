use crate::domain::InterviewCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ProviderName;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --status: 起動時に決まるプロバイダ状態を表示して終了
    pub status: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --fast: 演出用の待ち時間を入れない
    pub fast: bool,
    /// -r / --research: レポート後に市場調査を行う
    pub research: bool,
    pub provider: Option<ProviderName>,
    /// -a / --answers: 回答 JSON ファイル（非対話で実行）
    pub answers_file: Option<PathBuf>,
    /// -o / --save: 結果の保存先
    pub save: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("confluation")
        .about("Ten-question narrative interview that synthesizes a Confluation strategy report")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("status")
                .long("status")
                .help("Show the provider selected at start-up and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit logs to stderr as well as the log file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("fast")
                .long("fast")
                .help("Skip the cosmetic typing delays")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("research")
                .short('r')
                .long("research")
                .help("Run a market analysis after the report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (claude, gemini, mock). Default: settings.json, then credentials")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("answers")
                .short('a')
                .long("answers")
                .value_name("file")
                .help("Replay answers from a JSON object keyed by question id")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("save")
                .short('o')
                .long("save")
                .value_name("file")
                .help("Save answers, report and transcript as JSON")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        status: matches.get_flag("status"),
        verbose: matches.get_flag("verbose"),
        fast: matches.get_flag("fast"),
        research: matches.get_flag("research"),
        provider: matches
            .get_one::<String>("provider")
            .map(|s| ProviderName::new(s.clone())),
        answers_file: matches.get_one::<PathBuf>("answers").cloned(),
        save: matches.get_one::<PathBuf>("save").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "confluation", &mut std::io::stdout());
}

/// Config を InterviewCommand に変換する
pub fn config_to_command(config: Config) -> InterviewCommand {
    if config.help {
        return InterviewCommand::Help;
    }
    if config.status {
        return InterviewCommand::Status;
    }
    InterviewCommand::Run {
        answers_file: config.answers_file,
        research: config.research,
        save: config.save,
    }
}
