use std::process::ExitCode;

use clap::Parser;
use thermal_process_toolbox::{app, config, ui_cli::Cli};
use tracing::Level;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 계산을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    app::run(&cli.command, &cfg, cli.toml)
}
