//! Release-update check: fetch the latest GitHub release, compare versions,
//! and report over a channel. Network or parse failures are silent; an update
//! notice is purely informational.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

const RELEASES_URL: &str =
    "https://api.github.com/repos/prompt-overlay/prompt_overlay/releases/latest";

#[derive(Debug, Clone)]
pub struct UpdateNotice {
    pub version: String,
    pub notes: String,
}

/// Parse "v1.2.3" / "1.2" into a comparable triple; malformed input maps to
/// (0, 0, 0) so it never reports as newer.
pub fn parse_version(version: &str) -> (u32, u32, u32) {
    let mut parts = version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .map(|p| p.parse::<u32>());
    let mut next = || match parts.next() {
        Some(Ok(n)) => Ok(n),
        Some(Err(_)) => Err(()),
        None => Ok(0),
    };
    match (next(), next(), next()) {
        (Ok(a), Ok(b), Ok(c)) => (a, b, c),
        _ => (0, 0, 0),
    }
}

pub fn is_newer_version(latest: &str, current: &str) -> bool {
    parse_version(latest) > parse_version(current)
}

/// Spawn the background check. Sends at most one notice; every failure path
/// just logs at debug and ends the thread.
pub fn spawn_update_check(current_version: String, tx: Sender<UpdateNotice>) {
    thread::spawn(move || {
        if let Some(notice) = fetch_latest(&current_version) {
            let _ = tx.send(notice);
        }
    });
}

fn fetch_latest(current_version: &str) -> Option<UpdateNotice> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(concat!("prompt_overlay/", env!("CARGO_PKG_VERSION")))
        .build()
        .ok()?;

    let response = match client.get(RELEASES_URL).send() {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("update check failed: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        tracing::debug!("update check got status {}", response.status());
        return None;
    }

    let body: serde_json::Value = serde_json::from_str(&response.text().ok()?).ok()?;
    let latest = body.get("tag_name")?.as_str()?.trim_start_matches('v');
    if !is_newer_version(latest, current_version) {
        tracing::debug!(latest, current_version, "no update available");
        return None;
    }

    Some(UpdateNotice {
        version: latest.to_string(),
        notes: body
            .get("body")
            .and_then(|b| b.as_str())
            .unwrap_or_default()
            .to_string(),
    })
}
