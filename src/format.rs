use crate::query::ParsedQuery;

/// Render a parsed query as a short Markdown report.
pub fn format_parsed(parsed: &ParsedQuery) -> String {
    let heading: Vec<&str> = parsed.raw.split_whitespace().collect();
    let mut output = format!("# Query: {}\n\n", heading.join(" "));

    output.push_str(&format!("- Search query: `{}`\n", parsed.search_query));

    if parsed.languages.is_empty() {
        output.push_str("- Language: (default)\n");
    } else {
        output.push_str(&format!("- Language: {}\n", parsed.languages.join(", ")));
    }

    if parsed.specific {
        output.push_str("- Specific: yes\n");
    }

    if parsed.engines.is_empty() {
        output.push_str("- Engines: (default)\n");
    } else {
        output.push_str("\n## Engines\n\n");
        for engine in &parsed.engines {
            output.push_str(&format!("- {} ({})\n", engine.name, engine.category));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::EngineSelector;

    fn parsed(engines: Vec<EngineSelector>, languages: Vec<&str>) -> ParsedQuery {
        ParsedQuery {
            raw: "!news :fr élection".into(),
            search_query: "élection".into(),
            languages: languages.into_iter().map(String::from).collect(),
            engines,
            specific: false,
        }
    }

    #[test]
    fn lists_selected_engines() {
        let text = format_parsed(&parsed(
            vec![
                EngineSelector::new("news", "bing news"),
                EngineSelector::new("news", "google news"),
            ],
            vec!["fr_FR"],
        ));
        assert!(text.contains("# Query: !news :fr élection"));
        assert!(text.contains("- Search query: `élection`"));
        assert!(text.contains("- Language: fr_FR"));
        assert!(text.contains("## Engines"));
        assert!(text.contains("- bing news (news)"));
        assert!(text.contains("- google news (news)"));
    }

    #[test]
    fn marks_defaults_when_nothing_resolved() {
        let text = format_parsed(&parsed(vec![], vec![]));
        assert!(text.contains("- Language: (default)"));
        assert!(text.contains("- Engines: (default)"));
        assert!(!text.contains("Specific"));
    }

    #[test]
    fn multiline_raw_query_stays_on_heading_line() {
        let mut query = parsed(vec![], vec![]);
        query.raw = "!news\n:fr\r\n  élection\tlocale".into();

        let text = format_parsed(&query);
        assert!(text.starts_with("# Query: !news :fr élection locale\n\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with('#')).count(), 1);
    }
}
