use prompt_overlay::updater::{is_newer_version, parse_version};

#[test]
fn versions_parse_into_triples() {
    assert_eq!(parse_version("1.2.3"), (1, 2, 3));
    assert_eq!(parse_version("v1.2.3"), (1, 2, 3));
    assert_eq!(parse_version("1.2"), (1, 2, 0));
    assert_eq!(parse_version("  v0.4.0 "), (0, 4, 0));
}

#[test]
fn malformed_versions_never_compare_as_newer() {
    assert_eq!(parse_version("garbage"), (0, 0, 0));
    assert_eq!(parse_version("1.x.0"), (0, 0, 0));
    assert_eq!(parse_version(""), (0, 0, 0));
    assert!(!is_newer_version("garbage", "0.1.0"));
}

#[test]
fn comparison_is_componentwise() {
    assert!(is_newer_version("1.0.1", "1.0.0"));
    assert!(is_newer_version("2.0.0", "1.9.9"));
    assert!(is_newer_version("0.2.0", "0.1.9"));
    assert!(!is_newer_version("1.0.0", "1.0.0"));
    assert!(!is_newer_version("1.0.0", "1.0.1"));
}

#[test]
fn tag_prefixes_do_not_affect_comparison() {
    assert!(is_newer_version("v1.1.0", "1.0.0"));
    assert!(!is_newer_version("v1.0.0", "v1.0.0"));
}
