//! Error-reporting verbosity mask.
//!
//! The active verbosity is a bitmask over named levels. Rendering uses a
//! fixed ordered table so the joined output is deterministic.

/// Report-everything sentinel. Distinct from the union of the named
/// flags; compared for equality, never decomposed.
pub const REPORT_ALL: u32 = 0x7FFF;

pub const ERROR: u32 = 1;
pub const WARNING: u32 = 2;
pub const NOTICE: u32 = 4;
pub const DEPRECATED: u32 = 8;
pub const DEBUG: u32 = 16;

/// Flag table in rendering order.
const FLAGS: &[(u32, &str)] = &[
    (ERROR, "ERROR"),
    (WARNING, "WARNING"),
    (NOTICE, "NOTICE"),
    (DEPRECATED, "DEPRECATED"),
    (DEBUG, "DEBUG"),
];

/// Render a mask as human-readable flag names.
///
/// The sentinel renders as the single token `ALL`; otherwise the matching
/// flag names are joined with `" | "`. A mask with no recognized bits
/// falls back to its decimal value.
pub fn describe(mask: u32) -> String {
    if mask == REPORT_ALL {
        return "ALL".to_string();
    }

    let active: Vec<&str> = FLAGS
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, name)| *name)
        .collect();

    if active.is_empty() {
        mask.to_string()
    } else {
        active.join(" | ")
    }
}

/// Map a lowercase configuration level name to its flag bit.
pub fn flag_named(name: &str) -> Option<u32> {
    match name {
        "error" => Some(ERROR),
        "warning" => Some(WARNING),
        "notice" => Some(NOTICE),
        "deprecated" => Some(DEPRECATED),
        "debug" => Some(DEBUG),
        "all" => Some(REPORT_ALL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_renders_single_token() {
        assert_eq!(describe(REPORT_ALL), "ALL");
    }

    #[test]
    fn flags_join_in_table_order() {
        assert_eq!(describe(ERROR | DEBUG), "ERROR | DEBUG");
        assert_eq!(describe(DEBUG | WARNING | ERROR), "ERROR | WARNING | DEBUG");
    }

    #[test]
    fn unrecognized_bits_fall_back_to_decimal() {
        assert_eq!(describe(0), "0");
        assert_eq!(describe(1 << 10), "1024");
    }

    #[test]
    fn recognized_bits_win_over_unknown_ones() {
        assert_eq!(describe(ERROR | (1 << 10)), "ERROR");
    }

    #[test]
    fn level_names_round_trip() {
        for (bit, name) in FLAGS {
            assert_eq!(flag_named(&name.to_lowercase()), Some(*bit));
        }
        assert_eq!(flag_named("all"), Some(REPORT_ALL));
        assert_eq!(flag_named("verbose"), None);
    }
}
