use super::{file_stem, host_of_url, host_slug};

#[test]
fn strips_www_prefix() {
    assert_eq!(host_slug("www.example.com"), "example.com");
}

#[test]
fn leaves_bare_domain_intact() {
    assert_eq!(host_slug("example.com"), "example.com");
    assert_eq!(host_slug("docs.rs"), "docs.rs");
}

#[test]
fn leaves_single_label_host_intact() {
    assert_eq!(host_slug("localhost"), "localhost");
}

#[test]
fn strips_scheme_and_subdomain_together() {
    assert_eq!(host_slug("https://www.example.com"), "example.com");
}

#[test]
fn strips_one_subdomain_label() {
    assert_eq!(host_slug("en.wikipedia.org"), "wikipedia.org");
}

#[test]
fn file_stem_replaces_dots() {
    assert_eq!(file_stem("www.example.com"), "example-com");
    assert_eq!(file_stem("localhost"), "localhost");
}

#[test]
fn host_extracted_from_url() {
    assert_eq!(
        host_of_url("https://example.com/a/b?q=1").as_deref(),
        Some("example.com")
    );
    assert_eq!(
        host_of_url("http://www.example.com").as_deref(),
        Some("www.example.com")
    );
}

#[test]
fn non_url_has_no_host() {
    assert_eq!(host_of_url("not a url"), None);
    assert_eq!(host_of_url("example.com/path"), None);
}
