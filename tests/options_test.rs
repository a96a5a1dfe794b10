use rs_papermeta::{parse, parse_with_options, AuthorStrategy, Options};

const LONG_AUTHOR: &str = "[TITLE] Paper\n[PLAIN_TEXT] Jane Doe, Maximiliana Theodora Wolfeschlegelstein\n";

#[test]
fn max_author_len_bounds_names() {
    let record = parse(LONG_AUTHOR);
    assert_eq!(
        record.metadata.authors,
        vec!["Jane Doe", "Maximiliana Theodora Wolfeschlegelstein"]
    );

    let strict = Options {
        max_author_len: 20,
        ..Options::default()
    };
    let record = parse_with_options(LONG_AUTHOR, &strict);
    assert_eq!(record.metadata.authors, vec!["Jane Doe"]);
}

#[test]
fn abstract_marker_window_limits_detection() {
    let transcript = "[TITLE] Paper\n[PLAIN_TEXT] Summary of the work (extended abstract)\n[PLAIN_TEXT] Text.\n";
    assert!(parse(transcript).abstract_text.is_empty());

    let wide = Options {
        abstract_marker_window: 80,
        ..Options::default()
    };
    assert_eq!(parse_with_options(transcript, &wide).abstract_text, "Text.");
}

#[test]
fn ner_strategy_without_classifier_keeps_heuristic_authors() {
    let transcript = "[TITLE] Paper\n[PLAIN_TEXT] Jane Doe, John Smith\n";
    let options = Options {
        author_strategy: AuthorStrategy::NerEntity,
        ..Options::default()
    };
    assert_eq!(
        parse_with_options(transcript, &options).metadata.authors,
        vec!["Jane Doe", "John Smith"]
    );
}

#[test]
fn keyword_slack_controls_lookahead() {
    let transcript = "\
[TITLE] Paper
[TITLE] Keywords
[PLAIN_TEXT] alpha, beta,
[PLAIN_TEXT] gamma.
";
    assert_eq!(parse(transcript).metadata.keywords, vec!["alpha", "beta"]);

    let wide = Options {
        keyword_lookahead_slack: 2,
        ..Options::default()
    };
    assert_eq!(
        parse_with_options(transcript, &wide).metadata.keywords,
        vec!["alpha", "beta", "gamma"]
    );
}
