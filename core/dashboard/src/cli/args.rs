use crate::domain::{ContentType, DashboardCommand, EngagementSample, PlatformCategory, PlatformId};
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ProviderName;
use common::error::Error;

/// --tone を省略したときの語調
pub const DEFAULT_TONE: &str = "professional";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    pub provider: Option<ProviderName>,
    /// --seed: デモデータと推奨ヒントの乱数を固定する
    pub seed: Option<u64>,
    /// サブコマンド（省略時は overview）
    pub command: Option<DashboardCommand>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / clap が整形したヘルプ
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    Display(String),
}

fn parse_platform(s: &str) -> Result<PlatformId, String> {
    PlatformId::from_str(s).ok_or_else(|| {
        let ids: Vec<&str> = PlatformId::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown platform '{}' (expected one of: {})", s, ids.join(", "))
    })
}

fn parse_category(s: &str) -> Result<PlatformCategory, String> {
    PlatformCategory::from_str(s)
        .ok_or_else(|| format!("unknown category '{}' (expected core, emerging, global_south, messaging)", s))
}

fn parse_content_type(s: &str) -> Result<ContentType, String> {
    ContentType::from_str(s).ok_or_else(|| {
        let types: Vec<&str> = ContentType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown content type '{}' (expected one of: {})", s, types.join(", "))
    })
}

/// `<minutes>:<cumulative engagement>`（例: 10:50）
fn parse_sample(s: &str) -> Result<EngagementSample, String> {
    let (minutes, engagement) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid sample '{}' (expected <minutes>:<engagement>)", s))?;
    let minutes: f64 = minutes
        .trim()
        .parse()
        .map_err(|_| format!("invalid minutes in sample '{}'", s))?;
    let engagement: f64 = engagement
        .trim()
        .parse()
        .map_err(|_| format!("invalid engagement in sample '{}'", s))?;
    if !minutes.is_finite() || !engagement.is_finite() || minutes < 0.0 || engagement < 0.0 {
        return Err(format!("sample values must be non-negative numbers: '{}'", s));
    }
    Ok(EngagementSample::new(minutes, engagement))
}

fn platform_arg(required: bool) -> clap::Arg {
    clap::Arg::new("platform")
        .short('p')
        .long("platform")
        .value_name("platform")
        .help("Platform id (x, linkedin, instagram, ...)")
        .value_parser(parse_platform)
        .required(required)
        .num_args(1)
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("pulse")
        .about("Social media analytics and growth advisor")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit logs to stderr as well as the log file")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .long("provider")
                .value_name("provider")
                .help("LLM provider (claude, gemini, mock). Default: settings.json, then credentials")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("seed")
                .long("seed")
                .value_name("n")
                .help("Seed for demo data and tip selection")
                .value_parser(value_parser!(u64))
                .global(true)
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
        .subcommand(clap::Command::new("overview").about("Connected accounts, per-platform metrics, alerts and top posts"))
        .subcommand(clap::Command::new("status").about("Show the provider selected at start-up"))
        .subcommand(
            clap::Command::new("platforms")
                .about("List supported platforms")
                .arg(
                    clap::Arg::new("region")
                        .long("region")
                        .value_name("region")
                        .help("UK, US, EU, UAE, CANZUK, LATAM, AFRICA or APAC")
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("category")
                        .long("category")
                        .value_name("category")
                        .help("core, emerging, global_south or messaging")
                        .value_parser(parse_category)
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("posts")
                .about("List posts by engagement rate")
                .arg(platform_arg(false))
                .arg(
                    clap::Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("n")
                        .value_parser(value_parser!(usize))
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("score")
                .about("Virality analysis for one post")
                .arg(clap::Arg::new("post_id").value_name("post-id").required(true)),
        )
        .subcommand(
            clap::Command::new("velocity")
                .about("Engagement velocity from cumulative samples")
                .arg(
                    clap::Arg::new("samples")
                        .value_name("minutes:engagement")
                        .value_parser(parse_sample)
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            clap::Command::new("tips")
                .about("Algorithm signals, tips and posting times for a platform")
                .arg(platform_arg(true)),
        )
        .subcommand(
            clap::Command::new("suggest")
                .about("Generate five content suggestions")
                .arg(platform_arg(true))
                .arg(
                    clap::Arg::new("niche")
                        .long("niche")
                        .value_name("niche")
                        .required(true)
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("tone")
                        .long("tone")
                        .value_name("tone")
                        .default_value(DEFAULT_TONE)
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("growth")
                .about("Growth diagnosis and recovery plan")
                .arg(platform_arg(true))
                .arg(
                    clap::Arg::new("followers")
                        .long("followers")
                        .value_name("n")
                        .value_parser(value_parser!(u64))
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("monthly_growth")
                        .long("monthly-growth")
                        .value_name("percent")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("posts_per_week")
                        .long("posts-per-week")
                        .value_name("n")
                        .value_parser(value_parser!(u32))
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("optimize")
                .about("Rewrite a draft for engagement")
                .arg(platform_arg(true))
                .arg(
                    clap::Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("content-type")
                        .value_parser(parse_content_type)
                        .default_value("text")
                        .num_args(1),
                )
                .arg(clap::Arg::new("draft").value_name("draft").required(true)),
        )
}

fn platform_of(m: &clap::ArgMatches) -> Option<PlatformId> {
    m.get_one::<PlatformId>("platform").copied()
}

fn string_of(m: &clap::ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}

/// サブコマンドの引数を DashboardCommand にする（必須引数は clap が保証する）
fn subcommand_to_command(name: &str, m: &clap::ArgMatches) -> Option<DashboardCommand> {
    let cmd = match name {
        "overview" => DashboardCommand::Overview,
        "status" => DashboardCommand::Status,
        "platforms" => DashboardCommand::Platforms {
            region: m.get_one::<String>("region").cloned(),
            category: m.get_one::<PlatformCategory>("category").copied(),
        },
        "posts" => DashboardCommand::Posts {
            platform: platform_of(m),
            limit: m.get_one::<usize>("limit").copied(),
        },
        "score" => DashboardCommand::Score {
            post_id: string_of(m, "post_id"),
        },
        "velocity" => DashboardCommand::Velocity {
            samples: m
                .get_many::<EngagementSample>("samples")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
        },
        "tips" => DashboardCommand::Tips {
            platform: platform_of(m)?,
        },
        "suggest" => DashboardCommand::Suggest {
            platform: platform_of(m)?,
            niche: string_of(m, "niche"),
            tone: string_of(m, "tone"),
        },
        "growth" => DashboardCommand::Growth {
            platform: platform_of(m)?,
            followers: m.get_one::<u64>("followers").copied(),
            monthly_growth: m.get_one::<f64>("monthly_growth").copied(),
            posts_per_week: m.get_one::<u32>("posts_per_week").copied(),
        },
        "optimize" => DashboardCommand::Optimize {
            platform: platform_of(m)?,
            content_type: m
                .get_one::<ContentType>("type")
                .copied()
                .unwrap_or(ContentType::Text),
            draft: string_of(m, "draft"),
        },
        _ => return None,
    };
    Some(cmd)
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        provider: matches
            .get_one::<String>("provider")
            .map(|s| ProviderName::new(s.clone())),
        seed: matches.get_one::<u64>("seed").copied(),
        command: matches
            .subcommand()
            .and_then(|(name, sub)| subcommand_to_command(name, sub)),
    }
}

fn clap_error(e: clap::Error) -> Result<ParseOutcome, Error> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Ok(ParseOutcome::Display(e.render().to_string()))
        }
        _ => Err(Error::invalid_argument(e.to_string())),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = match build_clap_command().try_get_matches() {
        Ok(m) => m,
        Err(e) => return clap_error(e),
    };

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
    clap_complete::generate(shell, &mut cmd, "pulse", &mut std::io::stdout());
}

/// Config を DashboardCommand に変換する
pub fn config_to_command(config: Config) -> DashboardCommand {
    if config.help {
        return DashboardCommand::Help;
    }
    config.command.unwrap_or(DashboardCommand::Overview)
}
