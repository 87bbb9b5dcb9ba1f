/// Assert that `flag` appears in `args` immediately followed by `value`.
pub fn assert_flag_pair(args: &[String], flag: &str, value: &str) {
    let idx = args
        .iter()
        .position(|a| a == flag)
        .unwrap_or_else(|| panic!("flag {flag} not found in {args:?}"));
    assert!(
        idx + 1 < args.len(),
        "flag {flag} has no value in {args:?}"
    );
    assert_eq!(
        args[idx + 1],
        value,
        "flag {flag} carries {:?}, expected {value:?} in {args:?}",
        args[idx + 1]
    );
}

/// Assert that `flag` does not appear anywhere in `args`.
pub fn assert_no_flag(args: &[String], flag: &str) {
    assert!(
        !args.iter().any(|a| a == flag),
        "flag {flag} unexpectedly present in {args:?}"
    );
}

/// Assert that the given tokens appear in `args` in this relative order
/// (not necessarily adjacent).
pub fn assert_token_order(args: &[String], tokens: &[&str]) {
    let mut from = 0usize;
    for token in tokens {
        match args[from..].iter().position(|a| a == token) {
            Some(offset) => from += offset + 1,
            None => panic!("token {token} not found after index {from} in {args:?}"),
        }
    }
}
