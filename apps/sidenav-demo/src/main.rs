use anyhow::Context;
use sidenav_app_shell::ShellConfig;
use sidenav_core::Destination;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let finish_at = std::env::args()
        .nth(1)
        .map(|slug| slug.parse::<Destination>())
        .transpose()
        .context("usage: sidenav-demo [home|profile|friends|notifications|settings|help]")?;

    println!("=== SideNav Drawer Demo ===");
    println!("Replaying a scripted session; set RUST_LOG=debug for drawer transitions.");
    println!();

    let summary = sidenav_demo::run_session(ShellConfig::default(), finish_at)?;

    println!();
    println!(
        "{} frames published, showing {}, drawer {}",
        summary.frames,
        summary.destination,
        if summary.drawer_open { "open" } else { "closed" }
    );
    Ok(())
}
