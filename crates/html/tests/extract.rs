use slides_core::Side;
use slides_html::HtmlParser;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/timeline.html")
}

#[test]
fn extracts_timeline_in_source_order() {
    let content = HtmlParser::new().parse_file(&fixture()).unwrap();

    let sides: Vec<Side> = content.entries.iter().map(|e| e.side).collect();
    assert_eq!(
        sides,
        vec![Side::Left, Side::Right, Side::Left, Side::Right, Side::Left]
    );

    let titles: Vec<&str> = content.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "BSc Computer Engineering",
            "MSc Automation Engineering",
            "Research Fellow",
            "Robotics Engineer",
            "Visiting Researcher",
        ]
    );

    assert_eq!(content.current_index(), Some(2));
    assert_eq!(content.entries.iter().filter(|e| e.is_current).count(), 1);
    assert_eq!(content.entries[3].subtitle, "Field Robotics Lab");
    assert_eq!(content.entries[0].date, "2014 \u{2013} 2017");
}

#[test]
fn extracts_role_card() {
    let content = HtmlParser::new().parse_file(&fixture()).unwrap();
    let role = content.role.expect("fixture has a role card");

    assert_eq!(role.title, "Research Fellow \u{2014} ISTC CNR");
    assert_eq!(role.date, "Jan 2024 \u{2013} Present");
    assert!(role
        .description
        .starts_with("Designing perception and control pipelines for autonomous"));
    assert_eq!(role.responsibilities.len(), 6);
    assert_eq!(role.responsibilities[0], "\u{2022} Operating the DJI Matrice research fleet");
    assert_eq!(role.responsibilities[1], "Coordinating field experiments");
}

#[test]
fn parsing_is_deterministic() {
    let parser = HtmlParser::new();
    assert_eq!(
        parser.parse_file(&fixture()).unwrap(),
        parser.parse_file(&fixture()).unwrap()
    );
}
