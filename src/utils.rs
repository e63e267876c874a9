//! Text helpers for showing a record to a person rather than a program.

use crate::models::PokemonRecord;

/// Format a PokeAPI `name` into a human-friendly form.
///
/// Examples: `mr-mime` -> `Mr Mime`, `ho_oh` -> `Ho Oh`.
pub fn format_name(name: &str) -> String {
    let replaced = name.replace(['-', '_'], " ");
    let parts: Vec<String> = replaced
        .split_whitespace()
        .map(|w| {
            let mut chs = w.chars();
            match chs.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chs.as_str().to_lowercase()
                }
            }
        })
        .collect();
    parts.join(" ")
}

pub fn text_to_lines(s: &str, width: usize) -> Vec<String> {
    // Greedy wrap; a single word longer than `width` gets its own line.
    let mut lines = vec![];
    let mut current = String::new();
    for word in s.split_whitespace() {
        if current.len() + word.len() + 1 > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn render_summary(p: &PokemonRecord, width: usize) -> String {
    let mut s = format!("{}\n", format_name(&p.name));
    let types: Vec<String> = p.types.iter().map(|t| format_name(t)).collect();
    s.push_str(&format!("Types: {}\n", types.join(", ")));
    s.push_str("Stats:\n");
    for stat in p.base_stats.iter() {
        s.push_str(&format!("  {:<16}{:>4}\n", format_name(&stat.name), stat.base));
    }
    let mv = &p.first_move;
    s.push_str(&format!(
        "Move: {} ({}, power {})\n",
        format_name(&mv.name),
        format_name(&mv.kind),
        mv.power
    ));
    match &mv.effect {
        Some(effect) => {
            for line in text_to_lines(effect, width.saturating_sub(2).max(1)) {
                s.push_str(&format!("  {line}\n"));
            }
        }
        None => s.push_str("  No effect text available.\n"),
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoveRecord;

    #[test]
    fn formats_names() {
        assert_eq!(format_name("mr-mime"), "Mr Mime");
        assert_eq!(format_name("ho_oh"), "Ho Oh");
        assert_eq!(format_name("PIKACHU"), "Pikachu");
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn wraps_greedily() {
        assert_eq!(
            text_to_lines("Inflicts regular damage with no additional effect.", 20),
            vec!["Inflicts regular", "damage with no", "additional effect."]
        );
        assert_eq!(text_to_lines("supercalifragilistic x", 5), vec!["supercalifragilistic", "x"]);
        assert!(text_to_lines("   ", 10).is_empty());
    }

    #[test]
    fn summary_mentions_everything() {
        let record = PokemonRecord {
            name: "bulbasaur".into(),
            base_stats: [("hp", 45u32), ("special-attack", 65u32)].into_iter().collect(),
            types: vec!["grass".into(), "poison".into()],
            first_move: MoveRecord {
                name: "razor-wind".into(),
                power: 80,
                kind: "normal".into(),
                effect: None,
            },
        };
        let s = render_summary(&record, 40);
        assert!(s.starts_with("Bulbasaur\n"));
        assert!(s.contains("Types: Grass, Poison"));
        assert!(s.contains("Special Attack"));
        assert!(s.contains("Move: Razor Wind (Normal, power 80)"));
        assert!(s.contains("No effect text available."));
    }
}
