use pixles_media::core::write_vector;
use pixles_media::ffi::{self, pixles_media_print_vector};
use std::ffi::{c_char, CString};

#[test]
fn test_entry_point_repeated_calls() {
    for _ in 0..1000 {
        pixles_media::init();
        ffi::pixles_media();
    }
}

#[test]
fn test_print_vector_empty_sequence() {
    let empty: Vec<String> = Vec::new();
    pixles_media::print_vector(&empty);

    let mut out = Vec::new();
    write_vector(&mut out, &empty).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_print_vector_keeps_count_order_and_content() {
    for n in [0usize, 1, 3, 50] {
        let input: Vec<String> = (0..n).map(|i| format!("value-{i}")).collect();
        let snapshot = input.clone();

        pixles_media::print_vector(&input);
        let mut out = Vec::new();
        write_vector(&mut out, &input).unwrap();

        assert_eq!(input, snapshot);
        let printed: Vec<&str> = std::str::from_utf8(&out).unwrap().lines().collect();
        assert_eq!(printed, snapshot.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[test]
fn test_print_vector_alpha_beta_gamma() {
    let input = ["alpha", "beta", "gamma"];
    let mut out = Vec::new();

    write_vector(&mut out, &input).unwrap();

    assert_eq!(out, b"alpha\nbeta\ngamma\n");
    assert_eq!(input, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_c_abi_print_vector() {
    let owned: Vec<CString> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(|s| CString::new(s).unwrap())
        .collect();
    let ptrs: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();

    unsafe {
        pixles_media_print_vector(ptrs.as_ptr(), ptrs.len());
        pixles_media_print_vector(std::ptr::null(), 0);
    }

    assert_eq!(owned[2].to_str().unwrap(), "gamma");
}
