//! Property tests for the `AnnotatedText` monoid.

use proptest::prelude::*;
use wikiparse_engine::{AnnotatedText, Link};

fn link() -> impl Strategy<Value = Link> {
    ("[a-z]{0,3}", "[a-z ]{1,8}", "[A-Za-z]{0,5}")
        .prop_map(|(namespace, page, section)| Link::new(namespace, page, section))
}

fn annotated() -> impl Strategy<Value = AnnotatedText> {
    ("[a-z\n ]{0,12}", prop::collection::vec(link(), 0..4))
        .prop_map(|(text, links)| AnnotatedText::new(text, links))
}

proptest! {
    #[test]
    fn identity_on_both_sides(a in annotated()) {
        prop_assert_eq!(AnnotatedText::default() + a.clone(), a.clone());
        prop_assert_eq!(a.clone() + AnnotatedText::default(), a);
    }

    #[test]
    fn concatenation_is_associative(a in annotated(), b in annotated(), c in annotated()) {
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn concat_is_componentwise(items in prop::collection::vec(annotated(), 0..5)) {
        let text: String = items.iter().map(|a| a.get_text()).collect();
        let links: Vec<Link> = items
            .iter()
            .flat_map(|a| a.get_annotations().iter().cloned())
            .collect();
        prop_assert_eq!(AnnotatedText::concat(items), AnnotatedText::new(text, links));
    }

    #[test]
    fn single_element_concat_is_the_element(a in annotated()) {
        prop_assert_eq!(AnnotatedText::concat([a.clone()]), a);
    }

    #[test]
    fn join_appends_a_newline_to_each(a in annotated(), b in annotated()) {
        prop_assert_eq!(
            AnnotatedText::join([a.clone()]),
            AnnotatedText::concat([a.clone(), "\n".into()])
        );
        prop_assert_eq!(
            AnnotatedText::join([a.clone(), b.clone()]),
            AnnotatedText::concat([a, "\n".into(), b, "\n".into()])
        );
    }

    #[test]
    fn map_text_keeps_annotations(a in annotated()) {
        let mapped = a.clone().map_text(|t| t.to_uppercase());
        prop_assert_eq!(mapped.get_text(), a.get_text().to_uppercase());
        prop_assert_eq!(mapped.get_annotations(), a.get_annotations());
    }

    #[test]
    fn collecting_equals_concat(items in prop::collection::vec(annotated(), 0..5)) {
        let collected: AnnotatedText = items.clone().into_iter().collect();
        prop_assert_eq!(collected, AnnotatedText::concat(items));
    }
}

#[test]
fn join_of_nothing_is_identity() {
    assert_eq!(
        AnnotatedText::join(Vec::<AnnotatedText>::new()),
        AnnotatedText::default()
    );
}
