//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    completion_from_config, FileJsonLog, NoPacer, NoopLog, StderrLog, StdEnvResolver,
    StdFileSystem, TeeLog, ThreadPacer,
};
use common::error::Error;
use common::llm::{load_settings, resolve_ai_config, AiConfig};
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord, Pacer};

use crate::adapter::{JsonAnswersFile, JsonReportExporter, StdioChat};
use crate::cli::Config;
use crate::usecase::app::{InterviewDeps, InterviewUseCase, IoDeps, ModelDeps, ObsDeps};

/// 配線で組み立てたもの（main の Command ディスパッチで利用）
pub struct App {
    pub ai_config: AiConfig,
    pub logger: Arc<dyn Log>,
    pub use_case: InterviewUseCase,
}

/// ログの出力先を組み立てる（ログファイル + --verbose なら stderr）
pub fn build_logger(fs: &Arc<dyn FileSystem>, env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let file: Arc<dyn Log> = env
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    if verbose {
        Arc::new(TeeLog::new(file, Arc::new(StderrLog)))
    } else {
        file
    }
}

/// 配線: 標準アダプタで App を組み立てる。プロバイダはここで 1 度だけ決まる。
pub fn wire_interview(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = build_logger(&fs, env_resolver.as_ref(), config.verbose);

    let settings = load_settings(fs.as_ref(), env_resolver.as_ref())?;
    let ai_config = resolve_ai_config(
        config.provider.as_ref(),
        settings.as_ref(),
        env_resolver.as_ref(),
    )?;
    let status = ai_config.status();
    let _ = logger.log(
        &LogRecord::new(LogLevel::Info, "wiring", "config", "provider selected")
            .with_field("provider", status.provider)
            .with_field("model", status.model),
    );

    let pacer: Arc<dyn Pacer> = if config.fast || config.answers_file.is_some() {
        Arc::new(NoPacer)
    } else {
        Arc::new(ThreadPacer)
    };

    let deps = InterviewDeps {
        io: IoDeps {
            chat: Arc::new(StdioChat::new()),
            pacer,
            answers_source: Arc::new(JsonAnswersFile::new(Arc::clone(&fs))),
            exporter: Arc::new(JsonReportExporter::new()),
        },
        model: ModelDeps {
            completion: completion_from_config(&ai_config),
        },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    };

    Ok(App {
        ai_config,
        logger,
        use_case: InterviewUseCase::new(deps),
    })
}
