use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use wol_send::config::{Config, EXAMPLE_CONFIG};
use wol_send::{iface, wake, wake_mac, MacAddress, TargetEndpoint, UdpSender, WolError};

mod cli;

use cli::Cli;

fn list_targets(cfg: &Config, path: &Path) {
    if cfg.targets.is_empty() {
        log::info!("no targets configured; add them to '{}', for example:", path.display());
        for line in EXAMPLE_CONFIG.lines() {
            log::info!("  {}", line);
        }
        return;
    }

    for (i, target) in cfg.targets.iter().enumerate() {
        match target.mac() {
            Ok(mac) => log::info!("  {}. {} ({}) -> {}", i + 1, target.name, mac, target.endpoint()),
            Err(e) => log::warn!("  {}. {} - INVALID: {}", i + 1, target.name, e),
        }
    }
}

/// Wakes each named target independently; all are attempted even if one fails.
fn wake_targets(opts: &Cli, broadcast: Option<&str>) -> Result<()> {
    let cfg = Config::load(&opts.config_path())?;
    let sender = UdpSender::new();
    let mut failed = 0;

    for name in &opts.targets {
        let Some(target) = cfg.find(name) else {
            log::error!("{}", WolError::UnknownTarget(name.clone()));
            failed += 1;
            continue;
        };

        let mut endpoint = target.endpoint();
        if let Some(ip) = broadcast {
            endpoint.ip = ip.to_string();
        }

        log::info!("waking '{}' ({}) via {}", target.name, target.mac, endpoint);
        match wake(&target.mac, &endpoint, &sender) {
            Ok(report) => log::info!("{}", report),
            Err(e) => {
                log::error!("failed to wake '{}': {}", target.name, e);
                failed += 1;
            },
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} target(s) could not be woken", failed, opts.targets.len()));
    }
    Ok(())
}

fn interface_broadcast(opts: &Cli) -> Result<Option<String>, WolError> {
    match &opts.interface {
        Some(name) => Ok(Some(iface::broadcast_for(name)?.to_string())),
        None => Ok(None),
    }
}

fn run(opts: &Cli) -> Result<()> {
    if opts.list {
        let path = opts.config_path();
        log::info!("targets in '{}':", path.display());
        list_targets(&Config::load(&path)?, &path);
        return Ok(());
    }

    if !opts.targets.is_empty() {
        let broadcast = interface_broadcast(opts)?;
        return wake_targets(opts, broadcast.as_deref());
    }

    let mac = match opts.mac.as_deref() {
        Some(mac) if !mac.trim().is_empty() => MacAddress::normalize(mac)?,
        _ => return Err(WolError::MissingField("TARGET_MAC").into()),
    };
    let ip = interface_broadcast(opts)?.unwrap_or_else(|| opts.ip.clone());
    let endpoint = TargetEndpoint::new(ip, opts.port);

    log::info!("configuration:");
    log::info!("  target MAC: {}", mac);
    log::info!("  target IP:  {}", endpoint.ip);
    log::info!("  port:       {}", endpoint.port);

    let report = wake_mac(&mac, &endpoint, &UdpSender::new())?;
    log::info!("{}", report);
    Ok(())
}

fn main() -> ExitCode {
    let opts = Cli::parse_args();

    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).env().with_utc_timestamps().init() {
        eprintln!("unable to set up logging: {}", e);
    }

    log::info!("=== Wake-on-LAN sender ===");

    match run(&opts) {
        Ok(()) => {
            log::info!("=== done ===");
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("{:#}", e);
            log::error!("=== failed to send Wake-on-LAN packet ===");
            ExitCode::FAILURE
        },
    }
}
