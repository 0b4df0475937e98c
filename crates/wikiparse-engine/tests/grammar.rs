use pretty_assertions::assert_eq;
use wikiparse_engine::parsing::grammar::{
    annotated_text, any_heading, block_text, known_template, line_text, list, template,
};
use wikiparse_engine::parsing::{GrammarConfig, Parser};
use wikiparse_engine::{Link, ListNode, extract_links, run};

const ENTRY: &str = "\
==English==
<!-- generated -->
===Etymology===
From {{inh|en|enm|cat}}, from [[w:Old English|Old English]] ''catt''.

===Noun===
{{en-noun|cats}}
# A small [[domesticated]] [[carnivore]] ]sic[.
#: ''The '''cat''' sat on the mat.''
# {{lb|en|informal}} A [[man#English|man]].

[[Category:English nouns]]
";

#[test]
fn links_of_a_dictionary_entry_are_newest_first() {
    assert_eq!(
        extract_links(ENTRY).unwrap(),
        [
            Link::new("Category", "English nouns", ""),
            Link::new("", "man", "English"),
            Link::new("", "carnivore", ""),
            Link::new("", "domesticated", ""),
            Link::new("w", "Old English", ""),
        ]
    );
}

#[test]
fn block_text_of_a_dictionary_entry() {
    assert_eq!(
        run(block_text, ENTRY).unwrap(),
        "\
==English==

===Etymology===
From , from Old English catt.

===Noun===

# A small domesticated carnivore ]sic[.
#: The 'cat' sat on the mat.
#  A man.

\n"
    );
}

#[test]
fn sections_parse_with_their_own_rules() {
    let (level, title) = run(any_heading, "===Etymology===\n").unwrap();
    assert_eq!((level, title.as_str()), (3, "Etymology"));

    let data = run(known_template("en-noun"), "{{en-noun|cats}}").unwrap();
    assert_eq!(data.get("1").map(String::as_str), Some("cats"));

    let senses = run(
        list,
        "# A small [[domesticated]] [[carnivore]] ]sic[.\n\
         #: ''The '''cat''' sat on the mat.''\n\
         # {{lb|en|informal}} A [[man#English|man]].\n",
    )
    .unwrap();
    assert_eq!(
        senses,
        ListNode::OrderedList(vec![
            ListNode::Item("A small domesticated carnivore ]sic[.".into()),
            ListNode::IndentedList(vec![ListNode::Item("The 'cat' sat on the mat.".into())]),
            ListNode::Item(" A man.".into()),
        ])
    );
    assert_eq!(
        senses.extract_top_level(),
        ["A small domesticated carnivore ]sic[.", " A man."]
    );
}

#[test]
fn template_data_is_an_ordered_map() {
    let data = run(template, "{{t|ja|例え|tr=x}}").unwrap();
    let pairs: Vec<(&str, &str)> = data
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(pairs, [("0", "t"), ("1", "ja"), ("2", "例え"), ("tr", "x")]);
}

#[test]
fn failed_alternatives_leave_no_links() {
    // the unterminated outer link records [[z]] before it fails
    let config = GrammarConfig::default();
    let mut p = Parser::new("x [[y|[[z]] w\n", &config);
    let text = block_text(&mut p).unwrap();
    assert_eq!(text, "x ");
    assert_eq!(p.pos(), 2);
    assert!(p.links().is_empty());
}

#[test]
fn each_unit_gets_its_own_links() {
    let config = GrammarConfig::default();
    let mut p = Parser::new("[[a]]\n", &config);
    let first = annotated_text(&mut p).unwrap();
    assert_eq!(first.get_annotations(), [Link::from_target("a")]);
    assert!(p.links().is_empty());
}

#[test]
fn loose_close_bracket_is_text() {
    assert_eq!(run(line_text, "]").unwrap(), "]");
}

#[test]
fn errors_point_at_the_furthest_failure() {
    let err = run(line_text, "abc ]] def").unwrap_err();
    assert_eq!((err.line, err.column, err.position), (1, 5, 4));
    assert!(err.expected.iter().any(|e| e == "end of input"));
    assert!(err.to_string().starts_with("parse error at line 1, column 5: expected "));
}
