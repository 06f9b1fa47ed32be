use std::path::{Component, Path, PathBuf};

pub const DEFAULT_PROFILE_ID: &str = "Main";

const MAX_ID_BYTES: usize = 255;
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduces `raw` to a name usable as a directory on any major platform.
/// Returns an empty string when nothing usable is left.
pub fn sanitize_profile_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !ch.is_control() && !ILLEGAL_CHARS.contains(ch))
        .collect();
    let cleaned = truncate_to_bytes(&cleaned, MAX_ID_BYTES)
        .trim_end_matches(['.', ' '])
        .trim_start();

    if cleaned == "." || cleaned == ".." || is_reserved(cleaned) {
        return String::new();
    }

    cleaned.to_string()
}

/// Appends 1, 2, 3, ... to `base` until the result is not in `existing`.
pub fn resolve_collision(base: &str, existing: &[String]) -> String {
    let taken = |candidate: &str| existing.iter().any(|id| id == candidate);

    if !taken(base) {
        return base.to_string();
    }

    let mut suffix = 1u32;
    loop {
        let candidate = format!("{base}{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Directory of profile `id` under `root`, if `id` is a single plain path component.
pub fn profile_dir(root: &Path, id: &str) -> Option<PathBuf> {
    let mut components = Path::new(id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == id => Some(root.join(id)),
        _ => None,
    }
}

fn is_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
}

fn truncate_to_bytes(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }

    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
