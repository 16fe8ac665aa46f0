// ==========================================
// Course Schedule Core - Configuration Layer
// ==========================================
// Lookup tables injected into ingestion and detection instead of
// hard-coded control flow: column aliases, semester name patterns,
// term-code patterns, conflict options. Immutable once constructed;
// the defaults cover every layout observed in the wild.
// ==========================================

use crate::domain::format_info::ScheduleField;
use crate::domain::semester::SemesterKind;
use regex::Regex;

// ==========================================
// ScheduleConfig
// ==========================================
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// field -> header-cell aliases, matched lowercased by equality or
    /// substring containment during header detection.
    pub column_aliases: Vec<(ScheduleField, Vec<&'static str>)>,
    /// Sheet-name / file-name semester classification, tried in order.
    pub semester_patterns: Vec<(SemesterKind, Regex)>,
    /// Term-code classification ("2024SEM1" -> fall), tried in order.
    pub term_code_patterns: Vec<(SemesterKind, Regex)>,
    /// When false, pairs sharing a TBA/TBD faculty key are not treated
    /// as faculty conflicts.
    pub include_tba_conflicts: bool,
}

impl ScheduleConfig {
    /// Aliases for one field (empty slice when the field has none).
    pub fn aliases_for(&self, field: ScheduleField) -> &[&'static str] {
        self.column_aliases
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or(&[])
    }

    /// Classify free text (sheet name, file name) as a semester.
    pub fn classify_semester(&self, text: &str) -> Option<SemesterKind> {
        self.semester_patterns
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(kind, _)| *kind)
    }

    /// Classify a raw term code ("2024SEM1", "FA24") as a semester.
    pub fn classify_term_code(&self, code: &str) -> Option<SemesterKind> {
        self.term_code_patterns
            .iter()
            .find(|(_, re)| re.is_match(code))
            .map(|(kind, _)| *kind)
    }
}

impl Default for ScheduleConfig {
    fn default() -> ScheduleConfig {
        // Pattern literals are fixed; Regex::new cannot fail on them.
        let re = |p: &str| Regex::new(p).expect("built-in pattern");
        ScheduleConfig {
            column_aliases: vec![
                (
                    ScheduleField::CourseNum,
                    vec!["class", "course #", "course number", "course num", "catalog"],
                ),
                (
                    ScheduleField::CourseName,
                    vec!["description", "course name", "course title", "title"],
                ),
                (
                    ScheduleField::Faculty,
                    vec!["faculty", "instructor", "professor", "teacher", "staff"],
                ),
                (ScheduleField::Days, vec!["days", "day", "meets"]),
                (ScheduleField::StartTime, vec!["start", "begin", "from"]),
                (ScheduleField::EndTime, vec!["end", "finish", "stop", "until"]),
                (ScheduleField::Fte, vec!["fte", "workload", "load"]),
                (ScheduleField::Term, vec!["term", "semester", "session"]),
                (
                    ScheduleField::Room,
                    vec!["room", "location", "building", "bldg"],
                ),
            ],
            semester_patterns: vec![
                (SemesterKind::Fall, re(r"(?i)fall|autumn")),
                (SemesterKind::Spring, re(r"(?i)spring")),
                (SemesterKind::Winter, re(r"(?i)winter")),
                (SemesterKind::Summer, re(r"(?i)summer")),
            ],
            term_code_patterns: vec![
                (
                    SemesterKind::Fall,
                    re(r"(?i)fall|autumn|sem(ester)?[\s_]*0*1\b|\bfa\d*\b"),
                ),
                (
                    SemesterKind::Spring,
                    re(r"(?i)spring|sem(ester)?[\s_]*0*2\b|\bsp\d*\b"),
                ),
                (SemesterKind::Winter, re(r"(?i)winter|\bwin?\d*\b")),
                (
                    SemesterKind::Summer,
                    re(r"(?i)summer|sem(ester)?[\s_]*0*3\b|\bsum?\d*\b"),
                ),
            ],
            include_tba_conflicts: false,
        }
    }
}
