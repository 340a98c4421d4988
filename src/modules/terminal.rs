//! Terminal emulator, found by walking up the process tree.

use super::{CollectContext, Collected, Collector};
use crate::core::CollectError;
use crate::format::FormatArg;

/// Processes that sit between the terminal and us.
const PASSTHROUGH: &[&str] = &["bash", "sh", "zsh", "ksh", "fish", "sudo", "su", "doas", "strace"];

/// Processes that mean there is no emulator, just a console.
const CONSOLE: &[&str] = &["systemd", "init", "login", "0"];

/// Guards against cycles in a corrupt `/proc`.
const MAX_DEPTH: usize = 32;

pub struct TerminalCollector;

impl Collector for TerminalCollector {
    fn collect(&self, ctx: &CollectContext) -> Result<Vec<Collected>, CollectError> {
        let name = find_terminal(ctx, ctx.parent_pid())?;
        Ok(vec![Collected::new(name.clone(), vec![FormatArg::from(name)])])
    }
}

fn find_terminal(ctx: &CollectContext, mut pid: u32) -> Result<String, CollectError> {
    for _ in 0..MAX_DEPTH {
        let path = ctx.path(format!("/proc/{pid}/stat"));
        let stat = std::fs::read_to_string(&path).map_err(|err| CollectError::Unreadable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let (name, ppid) = parse_stat(&stat).ok_or_else(|| CollectError::Parse {
            what: path.display().to_string(),
            reason: "unexpected stat format".to_string(),
        })?;

        if PASSTHROUGH.iter().any(|p| p.eq_ignore_ascii_case(name)) {
            pid = ppid;
            continue;
        }

        if ppid == 0 || CONSOLE.iter().any(|c| c.eq_ignore_ascii_case(name)) {
            return Ok("TTY".to_string());
        }

        return Ok(name.to_string());
    }

    Err(CollectError::unavailable("Process tree too deep while looking for the terminal"))
}

/// Extract the command name and parent pid from a `/proc/<pid>/stat` line.
///
/// The name is wrapped in parentheses and may itself contain spaces or
/// parentheses, so it ends at the last `)`.
fn parse_stat(stat: &str) -> Option<(&str, u32)> {
    let open = stat.find('(')?;
    let close = stat.rfind(')')?;
    let name = stat.get(open + 1..close)?;

    let mut rest = stat.get(close + 1..)?.split_whitespace();
    let _state = rest.next()?;
    let ppid = rest.next()?.parse().ok()?;

    Some((name, ppid))
}
