//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    completion_from_config, FileJsonLog, NoopLog, StderrLog, StdClock, StdEnvResolver,
    StdFileSystem, TeeLog,
};
use common::error::Error;
use common::llm::{load_settings, resolve_ai_config, AiConfig};
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::{DemoMetricsSource, RandomTipPicker};
use crate::cli::Config;
use crate::ports::outbound::TipPicker;
use crate::usecase::app::{DashboardDeps, DashboardUseCase, DataDeps, ModelDeps, ObsDeps};

/// 配線で組み立てたもの（main の Command ディスパッチで利用）
pub struct App {
    pub ai_config: AiConfig,
    pub logger: Arc<dyn Log>,
    /// デモデータのシード（--seed 未指定なら乱数）
    pub demo_seed: u64,
    pub use_case: DashboardUseCase,
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
pub fn wire_dashboard(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let logger = build_logger(&fs, env_resolver.as_ref(), config.verbose);

    let settings = load_settings(fs.as_ref(), env_resolver.as_ref())?;
    let ai_config = resolve_ai_config(
        config.provider.as_ref(),
        settings.as_ref(),
        env_resolver.as_ref(),
    )?;
    let status = ai_config.status();
    let demo_seed = config.seed.unwrap_or_else(rand::random);
    let _ = logger.log(
        &LogRecord::new(LogLevel::Info, "wiring", "config", "provider selected")
            .with_field("provider", status.provider)
            .with_field("model", status.model)
            .with_field("seed", demo_seed),
    );

    let tips: Arc<dyn TipPicker> = match config.seed {
        Some(seed) => Arc::new(RandomTipPicker::seeded(seed)),
        None => Arc::new(RandomTipPicker::from_entropy()),
    };

    let deps = DashboardDeps {
        data: DataDeps {
            metrics: Arc::new(DemoMetricsSource::new(demo_seed, clock.now_ms())),
            tips,
        },
        model: ModelDeps {
            completion: completion_from_config(&ai_config),
            clock,
        },
        obs: ObsDeps {
            log: Arc::clone(&logger),
        },
    };

    Ok(App {
        ai_config,
        logger,
        demo_seed,
        use_case: DashboardUseCase::new(deps),
    })
}
