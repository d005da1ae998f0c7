use calconv_test::convert::{from_host_string_list, to_host_string_list};

#[test]
fn list_helpers_preserve_order_and_length() {
    let lists: [Vec<String>; 3] = [
        Vec::new(),
        vec!["only".to_string()],
        vec![
            "z".to_string(),
            String::new(),
            "a".to_string(),
            "z".to_string(),
            "Ünïcödé".to_string(),
        ],
    ];

    for list in lists {
        let host = to_host_string_list(&list);
        assert_eq!(host.len(), list.len());
        assert_eq!(from_host_string_list(&host), list);
    }
}
