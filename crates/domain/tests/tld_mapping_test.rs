use rudns_domain::tld_mapping::is_under_tld;
use rudns_domain::{Endpoint, TldDelegation, TldMapping};

fn delegation(tld: &str, endpoint: &str) -> TldDelegation {
    TldDelegation::new(tld, endpoint.parse::<Endpoint>().unwrap())
}

#[test]
fn test_suffix_matching() {
    assert!(is_under_tld("princeton.com", "com"));
    assert!(is_under_tld("com", "com"));
    assert!(is_under_tld("WWW.Princeton.COM", "com"));
    assert!(!is_under_tld("telecom", "com"));
    assert!(!is_under_tld("princeton.com.au", "com"));
    assert!(!is_under_tld("om", "com"));
}

#[test]
fn test_multi_label_tld() {
    assert!(is_under_tld("cs.princeton.edu", "princeton.edu"));
    assert!(!is_under_tld("notprinceton.edu", "princeton.edu"));
}

#[test]
fn test_tld_is_normalised_to_lowercase() {
    let d = delegation("COM", "ts1.example");
    assert_eq!(&*d.tld, "com");
    assert!(d.covers("princeton.com"));
}

#[test]
fn test_first_registered_match_wins() {
    let mapping: TldMapping = vec![
        delegation("princeton.edu", "ts-princeton.example"),
        delegation("edu", "ts-edu.example"),
    ]
    .into_iter()
    .collect();

    let hit = mapping.find("cs.princeton.edu").unwrap();
    assert_eq!(hit.endpoint.host(), "ts-princeton.example");

    let hit = mapping.find("mit.edu").unwrap();
    assert_eq!(hit.endpoint.host(), "ts-edu.example");
}

#[test]
fn test_registration_order_not_specificity_decides() {
    let mapping: TldMapping = vec![
        delegation("edu", "ts-edu.example"),
        delegation("princeton.edu", "ts-princeton.example"),
    ]
    .into_iter()
    .collect();

    let hit = mapping.find("cs.princeton.edu").unwrap();
    assert_eq!(hit.endpoint.host(), "ts-edu.example");
}

#[test]
fn test_no_match() {
    let mut mapping = TldMapping::new();
    mapping.push(delegation("com", "ts1.example"));
    mapping.push(delegation("edu", "ts2.example"));

    assert_eq!(mapping.len(), 2);
    assert!(mapping.find("github.io").is_none());
}
