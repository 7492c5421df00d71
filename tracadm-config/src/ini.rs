//! Line-oriented patching of the Trac application config.
//!
//! Two edits are applied to a `trac.ini` working copy:
//! - a components fragment spliced in right after the first `[components]`
//!   header, before the line that follows it;
//! - an `[account-manager]` section appended at end of file when no such
//!   header exists yet.
//!
//! Everything here is a pure `lines -> lines` transform; fetching and
//! pushing the file is the caller's job.

use std::sync::OnceLock;

use regex::Regex;

/// Comment fencing the generated block so later runs and operators can
/// spot it.
pub const OPEN_MARKER: &str = "# Updated automatically by tracadm.";
pub const CLOSE_MARKER: &str = "# End of block created by tracadm.";

/// Section header the components fragment is anchored to.
pub const COMPONENTS_HEADER: &str = "[components]";

/// Section header appended for the account-manager fragment.
pub const ACCOUNT_MANAGER_HEADER: &str = "[account-manager]";

fn anchor_regex() -> &'static Regex {
    static ANCHOR_RE: OnceLock<Regex> = OnceLock::new();
    ANCHOR_RE.get_or_init(|| Regex::new(r"^\[components\]").expect("static pattern is valid"))
}

/// Insertion progress while scanning the file once, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchState {
    /// Still looking for the anchor header.
    BeforeAnchor,
    /// Anchor copied to the output; the block goes in before the next line.
    AnchorSeen,
    /// Block emitted; the rest of the file is copied verbatim.
    Inserted,
}

/// Splits a raw collateral fragment into insertion-ready lines.
///
/// Trailing `\r`/`\n` characters are stripped per line; each raw line
/// becomes exactly one output line.
pub fn normalize_fragment(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

/// Splices the components fragment in after the first `[components]`
/// header. Returns the rewritten lines and whether an insertion happened.
///
/// Only the first anchor occurrence is acted on: the scan short-circuits
/// after a successful insertion, so a second literal `[components]` later
/// in the file (a comment, say) is copied untouched. An anchor on the very
/// last line gets no insertion, matching the observed behavior of the
/// deployed patcher.
pub fn insert_components(lines: &[String], fragment: &[String]) -> (Vec<String>, bool) {
    let mut out = Vec::with_capacity(lines.len() + fragment.len() + 4);
    let mut state = PatchState::BeforeAnchor;

    for line in lines {
        match state {
            PatchState::BeforeAnchor => {
                out.push(line.clone());
                if anchor_regex().is_match(line) {
                    state = PatchState::AnchorSeen;
                }
            }
            PatchState::AnchorSeen => {
                out.push(OPEN_MARKER.to_string());
                out.extend(fragment.iter().cloned());
                out.push(CLOSE_MARKER.to_string());
                out.push(String::new());
                out.push(line.clone());
                state = PatchState::Inserted;
            }
            PatchState::Inserted => {
                out.push(line.clone());
            }
        }
    }

    (out, state == PatchState::Inserted)
}

/// True when some line starts with the given section header.
pub fn has_section(lines: &[String], header: &str) -> bool {
    lines.iter().any(|line| line.starts_with(header))
}

/// Appends the `[account-manager]` section with the given fragment at the
/// end of the file.
pub fn append_account_manager(mut lines: Vec<String>, fragment: &[String]) -> Vec<String> {
    lines.push(String::new());
    lines.push(OPEN_MARKER.to_string());
    lines.push(ACCOUNT_MANAGER_HEADER.to_string());
    lines.extend(fragment.iter().cloned());
    lines.push(CLOSE_MARKER.to_string());
    lines
}

/// Result of a full trac.ini rewrite.
#[derive(Debug)]
pub struct PatchOutcome {
    pub rewritten: String,
    pub components_inserted: bool,
    pub account_manager_added: bool,
}

/// Applies both edits to the raw file content and reassembles it with a
/// trailing newline.
pub fn patch_trac_ini(
    content: &str,
    components_fragment: &str,
    account_manager_fragment: &str,
) -> PatchOutcome {
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let (mut lines, components_inserted) =
        insert_components(&lines, &normalize_fragment(components_fragment));

    let account_manager_added = !has_section(&lines, ACCOUNT_MANAGER_HEADER);
    if account_manager_added {
        lines = append_account_manager(lines, &normalize_fragment(account_manager_fragment));
    }

    let mut rewritten = lines.join("\n");
    rewritten.push('\n');

    PatchOutcome {
        rewritten,
        components_inserted,
        account_manager_added,
    }
}
