// NAF decoding tests against an inline fixture document.
//
// The fixture exercises every layer the decoder joins: title, srl
// predicates, terms, sentence membership, a determiner arc, a compound
// arc, and one predicate whose target is missing from the terms layer.

use framesift::config::PREMON_FN17;
use framesift::corpus::models::CompoundRole;
use framesift::naf::decode::decode_naf;

const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<NAF xml:lang="en" version="v3.1">
  <nafHeader>
    <fileDesc title="Canberra disappears in the dust"/>
  </nafHeader>
  <text>
    <wf id="w1" sent="1">The</wf>
    <wf id="w2" sent="1">dust</wf>
    <wf id="w3" sent="1">storm</wf>
    <wf id="w4" sent="2">arrived</wf>
  </text>
  <terms>
    <term id="t1" lemma="the" pos="DET"><span><target id="w1"/></span></term>
    <term id="t2" lemma="dust" pos="NOUN"><span><target id="w2"/></span></term>
    <term id="t3" lemma="storm" pos="NOUN"><span><target id="w3"/></span></term>
    <term id="t4" lemma="arrive" pos="VERB"><span><target id="w4"/></span></term>
  </terms>
  <deps>
    <dep from="t3" to="t1" rfunc="det"/>
    <dep from="t3" to="t2" rfunc="compound"/>
  </deps>
  <srl>
    <predicate id="pr1">
      <externalReferences>
        <externalRef reference="http://premon.fbk.eu/resource/fn17-weather"/>
      </externalReferences>
      <span><target id="t3"/></span>
    </predicate>
    <predicate id="pr2">
      <externalReferences>
        <externalRef reference="http://premon.fbk.eu/resource/fn17-arriving"/>
      </externalReferences>
      <span><target id="t4"/></span>
    </predicate>
    <predicate id="pr3">
      <externalReferences>
        <externalRef reference="http://premon.fbk.eu/resource/fn17-motion"/>
      </externalReferences>
      <span><target id="t99"/></span>
    </predicate>
  </srl>
</NAF>
"#;

#[test]
fn title_is_read_from_the_header() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();
    assert_eq!(record.title, "Canberra disappears in the dust");
}

#[test]
fn unjoinable_predicates_count_but_carry_no_annotation() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();
    // Three predicate targets (t3, t4, t99), but t99 has no terms entry.
    assert_eq!(record.frame_frequency, 3);
    assert_eq!(record.frame_info.len(), 2);
    assert!(!record.frame_info.contains_key("t99"));
}

#[test]
fn frame_labels_are_capitalized_namespace_free() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();
    assert_eq!(record.frame_info["t3"].frame, "Weather");
    assert_eq!(record.frame_info["t4"].frame, "Arriving");
}

#[test]
fn lexical_context_joins_across_layers() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();

    let storm = &record.frame_info["t3"];
    assert_eq!(storm.lemma, "storm");
    assert_eq!(storm.pos, "NOUN");
    assert_eq!(storm.sentence.as_deref(), Some("1"));

    let arrive = &record.frame_info["t4"];
    assert_eq!(arrive.lemma, "arrive");
    assert_eq!(arrive.sentence.as_deref(), Some("2"));
}

#[test]
fn determiner_arc_becomes_article_info() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();

    let storm = &record.frame_info["t3"];
    assert_eq!(storm.article.definite, Some(true));
    assert_eq!(storm.article.lemma.as_deref(), Some("the"));

    // "arrive" has no determiner arc.
    let arrive = &record.frame_info["t4"];
    assert_eq!(arrive.article.definite, None);
    assert_eq!(arrive.article.lemma, None);
}

#[test]
fn compound_arc_pairs_modifier_and_head() {
    let record = decode_naf(FIXTURE, PREMON_FN17).unwrap();

    let storm = &record.frame_info["t3"];
    assert_eq!(storm.compound.function, Some(CompoundRole::Head));
    assert_eq!(storm.compound.lemma.as_deref(), Some("dust storm"));

    let arrive = &record.frame_info["t4"];
    assert_eq!(arrive.compound.function, None);
    assert_eq!(arrive.compound.lemma, None);
}

#[test]
fn indefinite_article_is_marked_indefinite() {
    let xml = FIXTURE
        .replace(r#"lemma="the""#, r#"lemma="a""#)
        .replace(">The<", ">A<");
    let record = decode_naf(&xml, PREMON_FN17).unwrap();
    let storm = &record.frame_info["t3"];
    assert_eq!(storm.article.definite, Some(false));
    assert_eq!(storm.article.lemma.as_deref(), Some("a"));
}

#[test]
fn non_article_determiner_leaves_article_empty() {
    let xml = FIXTURE.replace(r#"lemma="the""#, r#"lemma="this""#);
    let record = decode_naf(&xml, PREMON_FN17).unwrap();
    let storm = &record.frame_info["t3"];
    assert_eq!(storm.article.definite, None);
    assert_eq!(storm.article.lemma, None);
}

#[test]
fn documents_without_optional_layers_still_decode() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<NAF xml:lang="en" version="v3.1">
  <nafHeader><fileDesc title="bare"/></nafHeader>
</NAF>
"#;
    let record = decode_naf(xml, PREMON_FN17).unwrap();
    assert_eq!(record.title, "bare");
    assert_eq!(record.frame_frequency, 0);
    assert!(record.frame_info.is_empty());
}
