use super::*;

#[test]
fn ids_follow_declaration_order() {
    for (i, e) in Effect::ALL.iter().enumerate() {
        assert_eq!(Effect::from_id(i as u32), *e);
        assert_eq!(e.id(), i as u32);
    }
    assert_eq!(Effect::from_id(8), Effect::Unknown(8));
    assert_eq!(Effect::Unknown(42).id(), 42);
}

#[test]
fn names_parse_with_aliases() {
    assert_eq!("crossfade".parse::<Effect>().unwrap(), Effect::Crossfade);
    assert_eq!(
        "Pentagram_Out_In".parse::<Effect>().unwrap(),
        Effect::PentagramOutIn
    );
    assert_eq!("windmill-180".parse::<Effect>().unwrap(), Effect::Windmill180);
    assert_eq!("hexagram".parse::<Effect>().unwrap(), Effect::HexagramInOut);
    assert_eq!("7".parse::<Effect>().unwrap(), Effect::Windmill360);
    assert_eq!("99".parse::<Effect>().unwrap(), Effect::Unknown(99));
    assert!(matches!(
        "spiral".parse::<Effect>(),
        Err(AgsError::Validation(_))
    ));
}

#[test]
fn display_round_trips_known_names() {
    for e in Effect::ALL {
        assert_eq!(e.to_string().parse::<Effect>().unwrap(), e);
    }
    assert_eq!(Effect::Unknown(3).to_string(), "unknown(3)");
}

#[test]
fn only_geometric_effects_need_polygon_masks() {
    assert!(!Effect::Crossfade.requires_polygon_masks());
    assert!(!Effect::Unknown(12).requires_polygon_masks());
    assert!(Effect::ALL[1..].iter().all(|e| e.requires_polygon_masks()));
}
