// ==========================================
// Warehouse Daily KPI - ASCII Transliteration
// ==========================================
// The printable report backend can only encode a basic ASCII
// font; every Czech diacritic in report text must be replaced
// by its unaccented equivalent before rendering. Unmapped
// characters pass through unchanged.
// ==========================================

// Fixed substitution table (lowercase + uppercase pairs)
const SUBSTITUTIONS: &[(char, char)] = &[
    ('á', 'a'),
    ('č', 'c'),
    ('ď', 'd'),
    ('é', 'e'),
    ('ě', 'e'),
    ('í', 'i'),
    ('ň', 'n'),
    ('ó', 'o'),
    ('ř', 'r'),
    ('š', 's'),
    ('ť', 't'),
    ('ú', 'u'),
    ('ů', 'u'),
    ('ý', 'y'),
    ('ž', 'z'),
    ('Á', 'A'),
    ('Č', 'C'),
    ('Ď', 'D'),
    ('É', 'E'),
    ('Ě', 'E'),
    ('Í', 'I'),
    ('Ň', 'N'),
    ('Ó', 'O'),
    ('Ř', 'R'),
    ('Š', 'S'),
    ('Ť', 'T'),
    ('Ú', 'U'),
    ('Ů', 'U'),
    ('Ý', 'Y'),
    ('Ž', 'Z'),
];

/// Replace every mapped diacritic with its ASCII equivalent.
///
/// Idempotent on text that is already free of the mapped
/// characters.
pub fn to_ascii(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}
