use rudns_domain::codec::{decode_query, decode_response, encode_query, encode_response};
use rudns_domain::{FormatError, Query, QueryMode, Response, ResponseFlag};

#[test]
fn test_decode_iterative_query() {
    let query = decode_query("0 princeton.com 1 it").unwrap();
    assert_eq!(&*query.domain, "princeton.com");
    assert_eq!(query.id, 1);
    assert_eq!(query.mode, QueryMode::Iterative);
}

#[test]
fn test_decode_recursive_query() {
    let query: Query = "0 www.Example.io 42 rd".parse().unwrap();
    assert_eq!(&*query.domain, "www.Example.io");
    assert_eq!(query.mode, QueryMode::Recursive);
}

#[test]
fn test_query_tolerates_extra_whitespace() {
    let query = decode_query("  0\tprinceton.com   7 it \r\n").unwrap();
    assert_eq!(encode_query(&query), "0 princeton.com 7 it");
}

#[test]
fn test_query_wrong_token_count() {
    assert_eq!(
        decode_query("0 princeton.com 1").unwrap_err(),
        FormatError::TokenCount {
            expected: 4,
            found: 3
        }
    );
    assert!(matches!(
        decode_query("0 princeton.com 1 it extra"),
        Err(FormatError::TokenCount { found: 5, .. })
    ));
    assert!(matches!(
        decode_query(""),
        Err(FormatError::TokenCount { found: 0, .. })
    ));
}

#[test]
fn test_query_bad_version_marker() {
    let err = decode_query("1 princeton.com 1 it").unwrap_err();
    assert_eq!(
        err,
        FormatError::VersionMarker {
            expected: "0",
            found: "1".to_string()
        }
    );
}

#[test]
fn test_query_unknown_mode() {
    assert_eq!(
        decode_query("0 princeton.com 1 IT").unwrap_err(),
        FormatError::UnknownMode("IT".to_string())
    );
}

#[test]
fn test_query_non_numeric_id() {
    assert_eq!(
        decode_query("0 princeton.com abc it").unwrap_err(),
        FormatError::InvalidId("abc".to_string())
    );
}

#[test]
fn test_non_canonical_ids_are_rejected() {
    for id in ["007", "+5", "-1", "00", "1_000", "18446744073709551616"] {
        assert_eq!(
            decode_query(&format!("0 princeton.com {} it", id)).unwrap_err(),
            FormatError::InvalidId(id.to_string()),
            "query id {}",
            id
        );
        assert_eq!(
            decode_response(&format!("1 princeton.com 1.2.3.4 {} aa", id)).unwrap_err(),
            FormatError::InvalidId(id.to_string()),
            "response id {}",
            id
        );
    }
}

#[test]
fn test_decode_every_response_flag() {
    let cases = [
        ("1 princeton.com 1.2.3.4 2 aa", ResponseFlag::Authoritative),
        ("1 princeton.com ts1.example 1 ns", ResponseFlag::Referral),
        ("1 princeton.com 1.2.3.4 2 ra", ResponseFlag::RecursiveAnswer),
        ("1 nonexistentsite.com 0.0.0.0 4 nx", ResponseFlag::NotFound),
    ];

    for (text, flag) in cases {
        let response = decode_response(text).unwrap();
        assert_eq!(response.flag, flag, "{}", text);
    }
}

#[test]
fn test_response_fields() {
    let response: Response = "1 Princeton.com 1.2.3.4 9 aa".parse().unwrap();
    assert_eq!(&*response.domain, "Princeton.com");
    assert_eq!(&*response.target, "1.2.3.4");
    assert_eq!(response.id, 9);
}

#[test]
fn test_response_errors() {
    assert!(matches!(
        decode_response("1 princeton.com 1.2.3.4 2"),
        Err(FormatError::TokenCount { expected: 5, .. })
    ));
    assert!(matches!(
        decode_response("0 princeton.com 1.2.3.4 2 aa"),
        Err(FormatError::VersionMarker { expected: "1", .. })
    ));
    assert_eq!(
        decode_response("1 princeton.com 1.2.3.4 2 xx").unwrap_err(),
        FormatError::UnknownFlag("xx".to_string())
    );
}

#[test]
fn test_well_formed_text_round_trips() {
    let texts = [
        "0 princeton.com 1 it",
        "0 github.io 3 rd",
        "0 princeton.com 0 it",
        "0 princeton.com 18446744073709551615 rd",
        "1 princeton.com ts1.example:45001 1 ns",
        "1 nonexistentsite.com 0.0.0.0 4 nx",
        "1 princeton.com 1.2.3.4 10 ra",
    ];

    for text in texts {
        let encoded = if text.starts_with('0') {
            encode_query(&decode_query(text).unwrap())
        } else {
            encode_response(&decode_response(text).unwrap())
        };
        assert_eq!(encoded, text);
    }
}

#[test]
fn test_recursive_relabel_only_touches_authoritative() {
    let query = Query::recursive("princeton.com", 2);
    let answer = Response::authoritative(&query, "princeton.com", "1.2.3.4");
    assert_eq!(
        answer.into_recursive_answer().flag,
        ResponseFlag::RecursiveAnswer
    );

    let missing = Response::not_found(&query);
    assert_eq!(missing.into_recursive_answer().flag, ResponseFlag::NotFound);
}

#[test]
fn test_not_found_echoes_query() {
    let query = Query::iterative("NonExistentSite.com", 4);
    let response = Response::not_found(&query);
    assert_eq!(response.to_string(), "1 NonExistentSite.com 0.0.0.0 4 nx");
}
