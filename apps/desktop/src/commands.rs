//! Shell input: one line per event, either raw JSON or a short command.

use anyhow::{bail, Context, Result};
use navigation::{BladeOpener, BladeRegistry, NavigationController, NavigationEvent, Process};

/// Parses one input line. Blank lines and `#` comments yield `None`.
///
/// `dirty` and `clean` act on the active blade, so they need the live controller
/// to resolve its id.
pub fn parse_line<R: BladeRegistry>(
    line: &str,
    opener: &BladeOpener<R>,
    controller: &NavigationController,
) -> Result<Option<NavigationEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.starts_with('{') {
        let event = serde_json::from_str(line)
            .with_context(|| format!("invalid navigation event json: {line}"))?;
        return Ok(Some(event));
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let event = match (verb, args.as_slice()) {
        ("back" | "pop", []) => opener.go_back(),
        ("root" | "reset", []) => opener.go_to_root(),
        ("jump", [index]) => NavigationEvent::PopToIndex {
            index: index
                .parse()
                .with_context(|| format!("jump expects a stack index, got '{index}'"))?,
        },
        ("switch", [process]) => NavigationEvent::SwitchProcess {
            process: process.parse::<Process>()?,
        },
        ("settings", []) => opener.open_settings(),
        ("commit", [oid]) => opener.open_commit_details(oid),
        ("diff", [oid, path]) => opener.open_commit_diff(oid, path),
        ("stage", [path]) => opener.open_staging_diff(path, false),
        ("stage", [path, "--staged"]) => opener.open_staging_diff(path, true),
        ("browse", [path]) => opener.open_browsed_file(path),
        ("dirty", []) => NavigationEvent::MarkDirty {
            blade_id: controller.active_blade().id.clone(),
        },
        ("clean", []) => NavigationEvent::MarkClean {
            blade_id: controller.active_blade().id.clone(),
        },
        ("confirm", []) => NavigationEvent::ConfirmDiscard,
        ("cancel", []) => NavigationEvent::CancelDiscard,
        (verb, args) => bail!(
            "unrecognised command '{verb}' with {} argument(s)",
            args.len()
        ),
    };

    Ok(Some(event))
}
