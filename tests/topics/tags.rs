use stockfeed_rs::{FeedError, Topic};

#[test]
fn known_tags_round_trip_through_their_wire_form() {
    assert_eq!("technology".parse::<Topic>().unwrap(), Topic::Technology);
    assert_eq!(
        "mergers_and_acquisitions".parse::<Topic>().unwrap(),
        Topic::MergersAndAcquisitions
    );
    assert_eq!(Topic::EconomyFiscal.to_string(), "economy_fiscal");
}

#[test]
fn unknown_tag_is_a_validation_error() {
    let err = "not_a_topic".parse::<Topic>().unwrap_err();
    assert!(matches!(err, FeedError::Validation(_)), "got {err:?}");
}

#[test]
fn the_vocabulary_is_closed_at_fifteen_tags() {
    assert_eq!(Topic::ALL.len(), 15);
    for tag in Topic::ALL {
        assert_eq!(tag.as_str().parse::<Topic>().unwrap(), tag);
    }
}
