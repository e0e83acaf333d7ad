use std::collections::{HashMap, HashSet};

/// Tag namespace for one Logger.
///
/// Human-supplied series names are arbitrary strings; the wire format only
/// accepts tags drawn from `[A-Za-z0-9_./-]`. This module sanitizes names
/// into that alphabet and keeps the result stable and collision-free for
/// the life of the owning Logger: the same name always resolves to the same
/// tag, and two distinct names never share one.
///
/// The registry is private, unshared state inside a Logger; it needs no
/// synchronization of its own.
#[derive(Debug, Default)]
pub struct TagRegistry {
    name_to_tag: HashMap<String, String>,
    used_tags: HashSet<String>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a name to its tag, assigning one on first sight.
    ///
    /// The first caller of a given name gets the sanitized form of that
    /// name, unless another name already claimed it; collisions are
    /// disambiguated by appending `/1`, `/2`, ... (the first unused
    /// suffix). Later callers of the same name always get the cached tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfevents_logger::tag_registry::TagRegistry;
    ///
    /// let mut tags = TagRegistry::new();
    /// assert_eq!(tags.ensure_tag("A v/1"), "A_v/1");
    /// // A different name that sanitizes to the same tag gets a suffix.
    /// assert_eq!(tags.ensure_tag("A\tv/1"), "A_v/1/1");
    /// // The original name keeps its original tag.
    /// assert_eq!(tags.ensure_tag("A v/1"), "A_v/1");
    /// ```
    pub fn ensure_tag(&mut self, name: &str) -> String {
        if let Some(tag) = self.name_to_tag.get(name) {
            return tag.clone();
        }
        let base = sanitize(name);
        let mut tag = base.clone();
        let mut suffix = 1;
        while self.used_tags.contains(&tag) {
            tag = format!("{base}/{suffix}");
            suffix += 1;
        }
        self.used_tags.insert(tag.clone());
        self.name_to_tag.insert(name.to_owned(), tag.clone());
        tag
    }
}

/// Rewrites an arbitrary name into the tag alphabet `[A-Za-z0-9_./-]`.
///
/// A name whose first character is not alphanumeric or `.` is prefixed
/// with `.` so nothing has to be removed from the front. All maximal runs
/// of allowed characters are then joined with `_`; everything else is
/// discarded. Runs separated by discarded characters are not merged:
/// `"A v/1"` becomes `"A_v/1"`, not `"Av/1"`.
pub fn sanitize(name: &str) -> String {
    let prefixed;
    let name = if name
        .chars()
        .next()
        .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '.'))
    {
        prefixed = format!(".{name}");
        prefixed.as_str()
    } else {
        name
    };
    name.split(|c: char| !is_tag_char(c))
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_becomes_dot() {
        assert_eq!(sanitize(""), ".");
    }

    #[test]
    fn test_non_ascii_runs_are_discarded() {
        assert_eq!(sanitize("Hello, 世界"), "Hello");
    }
}
