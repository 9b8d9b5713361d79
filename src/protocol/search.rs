use super::{ProtocolIndex, Section};

/// Find the first section whose heading contains `query`, ignoring case
///
/// Returns `None` for a blank query or when no heading matches. When several
/// headings match, the earliest one in the index wins.
pub fn lookup<'a>(index: &'a ProtocolIndex, query: &str) -> Option<&'a Section> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    index
        .iter()
        .find(|section| section.heading.to_lowercase().contains(&needle))
}
