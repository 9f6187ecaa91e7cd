use clap::Parser;

use genai_viability_toolbox::{app, config, i18n};

/// GenAI 도입 타당성(경제성/기술성) 분석 CLI.
#[derive(Debug, Parser)]
#[command(name = "genai_viability_toolbox", version)]
struct Cli {
    /// 표시 언어 (ko/en/auto). auto면 설정 → 시스템 로케일 순으로 결정.
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 (기본: ./locales)
    #[arg(long)]
    locales_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
