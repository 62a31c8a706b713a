use maldet_core::Feature;
use maldet_features::extract_lexical_features;
use proptest::prelude::*;

// ── Extraction is total and shape-stable ──────────────────────────────────

proptest! {
    #[test]
    fn extraction_never_panics_on_arbitrary_input(url in "\\PC*") {
        let f = extract_lexical_features(&url);
        prop_assert_eq!(f.len_url, url.chars().count() as u64);
        for feature in Feature::ALL {
            prop_assert!(f.get(feature.name()).is_some());
        }
    }

    #[test]
    fn schemeless_and_http_agree_on_host_shape(
        labels in prop::collection::vec("[a-z0-9-]{1,10}", 1..5),
        path in "(/[a-z0-9]{0,6}){0,4}"
    ) {
        let host = labels.join(".");
        let bare = extract_lexical_features(&format!("{host}{path}"));
        let schemed = extract_lexical_features(&format!("http://{host}{path}"));
        prop_assert_eq!(bare.len_host, schemed.len_host);
        prop_assert_eq!(bare.count_dots, schemed.count_dots);
        prop_assert_eq!(bare.count_slashes, schemed.count_slashes);
        prop_assert_eq!(bare.path_depth, schemed.path_depth);
        prop_assert_eq!(bare.num_tokens_host, labels.len() as u64);
    }

    #[test]
    fn dotted_quads_in_range_are_ip_hosts(a in 0u32..256, b in 0u32..256, c in 0u32..256, d in 0u32..256) {
        let f = extract_lexical_features(&format!("http://{a}.{b}.{c}.{d}/x"));
        prop_assert!(f.has_ip_host);
    }

    #[test]
    fn out_of_range_octet_is_not_ip_host(a in 0u32..256, bad in 256u32..100_000) {
        let f = extract_lexical_features(&format!("http://{a}.{a}.{a}.{bad}/"));
        prop_assert!(!f.has_ip_host);
    }

    #[test]
    fn keyword_flags_follow_substrings(
        prefix in "[a-z]{0,8}",
        suffix in "[a-z]{0,8}",
        kw in prop::sample::select(vec!["login", "secure", "verify"])
    ) {
        let f = extract_lexical_features(&format!("http://{prefix}.com/{suffix}{kw}"));
        match kw {
            "login" => prop_assert!(f.has_login),
            "secure" => prop_assert!(f.has_secure),
            _ => prop_assert!(f.has_verify),
        }
    }

    #[test]
    fn domain_parts_never_exceed_host(url in "[a-z]{1,6}(\\.[a-z]{1,6}){0,4}") {
        let f = extract_lexical_features(&url);
        prop_assert!(f.subdomain_len + f.sld_len + f.tld_len <= f.len_host);
    }
}
