//! 엔티티 레지스트리 데모 애플리케이션
//!
//! 예제 도메인(보드, 플레이어, 심판)을 레지스트리로 조립하고
//! 2단계 바인딩/resolve 흐름과 파괴 처리를 터미널에 출력합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use entity_registry::args;
use entity_registry::config::{Environment, RegistryConfig};
use entity_registry::core::Registry;
use entity_registry::domain::{Arbiter, ArbiterModel, Board, BoardModel, Player, PlayerModel};
use entity_registry::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 엔티티 레지스트리 데모 시작중... ({:?})", Environment::current());

    let registry = Registry::with_config(RegistryConfig::from_env());
    print_boxed_title("🔄 ASSEMBLING ENTITY REGISTRY");

    // 1단계: Board 없이 Player와 Arbiter만 먼저 등록
    print_step_start(1, "Binding players and arbiter");
    registry.bind::<dyn Player, PlayerModel>();
    print_sub_task("Player", "PlayerModel");
    registry.bind_singleton::<dyn Arbiter, _>(ArbiterModel::default());
    print_sub_task("Arbiter", "ArbiterModel (singleton)");
    print_step_complete(1, "Contracts bound", 2);

    // 2단계: 플레이어 생성 (board 주입은 지연됨)
    print_step_start(2, "Creating players");
    let players: Vec<_> = ["white", "black"]
        .into_iter()
        .filter_map(|name| registry.get::<dyn Player>(&args![name.to_string()]))
        .collect();
    for player in &players {
        let player = player.borrow();
        print_sub_task(player.name(), &format!("Id={}", player.id()));
    }
    print_step_complete(2, "Players created", players.len());
    info!("⏳ 지연된 주입: {}", registry.pending_count());

    // 3단계: Board 등록 후 resolve
    print_step_start(3, "Binding board and resolving");
    registry.bind::<dyn Board, BoardModel>();
    if registry.resolve() {
        info!("✅ 모든 주입이 해결되었습니다!");
    } else {
        warn!("일부 주입이 해결되지 않았습니다: {}", registry.pending_count());
    }
    let seated = players.iter().filter(|p| p.borrow().is_seated()).count();
    print_step_complete(3, "Players seated", seated);
    registry.add_all_subscriptions();

    println!("{}", registry.print());

    // 4단계: 한 플레이어를 파괴
    if let Some(player) = players.first() {
        player.borrow_mut().destroy();
        info!("🗑️ {} 파괴 후 인스턴스 수: {}", player.borrow().name(), registry.num_instances());
    }

    match registry.snapshot_json() {
        Ok(json) => info!("레지스트리 스냅샷:\n{}", json),
        Err(e) => error!("스냅샷 직렬화 실패: {}", e),
    }

    print_final_summary(
        registry.num_singletons(),
        registry.num_instances(),
        registry.pending_count(),
    );
    info!("{}", registry);
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 레지스트리의 상세 메시지는 debug 레벨로 출력됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// # Examples
///
/// ```bash
/// # 레지스트리 상세 로그
/// RUST_LOG=debug REGISTRY_VERBOSITY=50 cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
