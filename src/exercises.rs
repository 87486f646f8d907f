//! Exercise definitions - the default barbell lifts

/// A lift the log knows by name
#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    /// Extra spellings accepted on the command line
    pub aliases: &'static [&'static str],
}

/// Default exercises seeded into every new log
pub const DEFAULT_EXERCISES: &[Exercise] = &[
    Exercise {
        id: "bench",
        name: "Bench press",
        aliases: &["bench press", "bp"],
    },
    Exercise {
        id: "squat",
        name: "Squat",
        aliases: &["back squat"],
    },
    Exercise {
        id: "deadlift",
        name: "Deadlift",
        aliases: &["dl"],
    },
    Exercise {
        id: "press",
        name: "Shoulder press",
        aliases: &["shoulder press", "ohp", "overhead press"],
    },
];

pub fn get_all_exercises() -> &'static [Exercise] {
    DEFAULT_EXERCISES
}

/// Find exercise by id, name or alias (case-insensitive)
pub fn find_exercise(query: &str) -> Option<&'static Exercise> {
    let query = query.trim().to_lowercase();
    get_all_exercises().iter().find(|e| {
        e.id == query || e.name.to_lowercase() == query || e.aliases.contains(&query.as_str())
    })
}

/// Canonical exercise name for a query, or the query itself if unknown
pub fn resolve_name(query: &str) -> String {
    find_exercise(query)
        .map(|e| e.name.to_string())
        .unwrap_or_else(|| query.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_exercise("bench").unwrap().name, "Bench press");
        assert_eq!(find_exercise("press").unwrap().name, "Shoulder press");
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        assert_eq!(find_exercise("DEADLIFT").unwrap().id, "deadlift");
        assert_eq!(find_exercise("  bench Press ").unwrap().id, "bench");
    }

    #[test]
    fn test_find_by_alias() {
        assert_eq!(find_exercise("ohp").unwrap().id, "press");
    }

    #[test]
    fn test_find_unknown() {
        assert!(find_exercise("curl").is_none());
        assert!(find_exercise("").is_none());
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name("dl"), "Deadlift");
        assert_eq!(resolve_name(" Front squat "), "Front squat");
    }
}
