//! Tests for reading domain files and building the domain list.

mod helpers;

use check_dns::domain::Domain;
use check_dns::{load_domains, CheckError};
use helpers::domain_file;

fn names(domains: &[Domain]) -> Vec<&str> {
    domains.iter().map(Domain::as_str).collect()
}

#[tokio::test]
async fn test_expansion_places_www_after_apex() {
    let file = domain_file("Example.com\nfoo.bar.example.com\n");

    let domains = load_domains(file.path(), true).await.unwrap();
    assert_eq!(
        names(&domains),
        vec!["example.com", "www.example.com", "foo.bar.example.com"]
    );
}

#[tokio::test]
async fn test_without_expansion_only_input_domains() {
    let file = domain_file("b.example.org\na.example.org\nexample.org\n");

    let domains = load_domains(file.path(), false).await.unwrap();
    assert_eq!(
        names(&domains),
        vec!["a.example.org", "b.example.org", "example.org"]
    );
}

#[tokio::test]
async fn test_crlf_blank_lines_and_whitespace_are_ignored() {
    let file = domain_file("\r\n  example.com  \r\n\r\n\texample.net\r\n\n");

    let domains = load_domains(file.path(), false).await.unwrap();
    assert_eq!(names(&domains), vec!["example.com", "example.net"]);
}

#[tokio::test]
async fn test_duplicates_collapse_across_case_and_expansion() {
    let file = domain_file("example.com\nEXAMPLE.com\nwww.example.com\n");

    let domains = load_domains(file.path(), true).await.unwrap();
    assert_eq!(names(&domains), vec!["example.com", "www.example.com"]);
}

#[tokio::test]
async fn test_natural_number_order() {
    let file = domain_file("shop10.example\nshop2.example\nshop1.example\n");

    let domains = load_domains(file.path(), false).await.unwrap();
    assert_eq!(
        names(&domains),
        vec!["shop1.example", "shop2.example", "shop10.example"]
    );
}

#[tokio::test]
async fn test_empty_file_yields_empty_list() {
    let file = domain_file("\n\n");

    let domains = load_domains(file.path(), true).await.unwrap();
    assert!(domains.is_empty());
}

#[tokio::test]
async fn test_invalid_line_anywhere_aborts() {
    for contents in [
        "bad_domain\nexample.com\n",
        "example.com\nhttps://example.com\n",
        "example.com\nexample.org\nexample..net\n",
    ] {
        let file = domain_file(contents);
        let result = load_domains(file.path(), false).await;
        assert!(
            matches!(result, Err(CheckError::InvalidDomain(_))),
            "expected validation failure for {contents:?}"
        );
    }
}
