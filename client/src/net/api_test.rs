use super::*;

#[test]
fn entries_endpoint_with_year_and_month() {
    assert_eq!(entries_endpoint(Some(2025), Some(3)), "/entries/?year=2025&month=3");
}

#[test]
fn entries_endpoint_with_year_only() {
    assert_eq!(entries_endpoint(Some(2025), None), "/entries/?year=2025");
}

#[test]
fn entries_endpoint_unfiltered() {
    assert_eq!(entries_endpoint(None, None), "/entries/");
    assert_eq!(entries_endpoint(None, Some(3)), "/entries/");
}

#[test]
fn entry_and_admin_user_endpoints_format_ids() {
    assert_eq!(entry_endpoint(42), "/entries/42");
    assert_eq!(admin_user_endpoint(7), "/admin/users/7");
}

#[test]
fn month_export_endpoint_formats_query() {
    assert_eq!(month_export_endpoint(2025, 3), "/export/month?year=2025&month=3");
}

#[test]
fn url_encode_passes_unreserved_characters() {
    assert_eq!(url_encode("demo1"), "demo1");
    assert_eq!(url_encode("a-b_c.d~e"), "a-b_c.d~e");
}

#[test]
fn url_encode_escapes_reserved_and_utf8() {
    assert_eq!(url_encode("a&b=c"), "a%26b%3Dc");
    assert_eq!(url_encode("con espacio"), "con%20espacio");
    // 'ñ' is two UTF-8 bytes.
    assert_eq!(url_encode("ñ"), "%C3%B1");
}

#[test]
fn login_form_body_is_form_encoded() {
    assert_eq!(
        login_form_body("demo1", "p&ss"),
        "username=demo1&password=p%26ss"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(request_failed_message("export", 500), "export failed: 500");
}
