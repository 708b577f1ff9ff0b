//! Tests for decoding panel requests and encoding responses

#[cfg(test)]
mod tests {
    use gridmosaic::layout::Rgb;
    use gridmosaic::sampling::{ActivationMask, CellState};
    use gridmosaic::session::{Request, Response};

    const OPTIONS: &str = r#"{"gridColumns":2,"gridRows":2,"color":{"r":1,"g":0,"b":0},"cellSize":10,"density":1}"#;

    // Tests preview requests decode with their parameters
    // Verified by renaming the preview tag
    #[test]
    fn test_decode_preview() {
        let text = format!(r#"{{"type":"preview-grid","options":{OPTIONS}}}"#);

        let Ok(request) = Request::from_json(&text) else {
            unreachable!("preview request should decode");
        };

        assert!(matches!(request, Request::Preview { .. }));
        assert_eq!(request.kind(), "preview-grid");
        assert_eq!(request.options().columns, 2);
        assert_eq!(request.options().color, Rgb::new(1.0, 0.0, 0.0));
    }

    // Tests insert requests decode as confirm
    // Verified by mapping insert-grid to the preview variant
    #[test]
    fn test_decode_confirm() {
        let text = format!(r#"{{"type":"insert-grid","options":{OPTIONS}}}"#);

        let request = Request::from_json(&text);
        assert!(request.is_ok_and(|request| request.kind() == "insert-grid"));
    }

    // Tests unknown types and missing options are rejected
    // Verified by adding a catch-all variant
    #[test]
    fn test_decode_rejects_unknown() {
        assert!(Request::from_json(r#"{"type":"cancel"}"#).is_err());
        assert!(Request::from_json(r#"{"type":"insert-grid"}"#).is_err());
        assert!(Request::from_json("not json").is_err());
    }

    // Tests response encoding uses the panel's type tags
    // Verified by switching to externally tagged enums
    #[test]
    fn test_encode_responses() {
        let mask = ActivationMask::filled(1, 1, CellState::active(0.5));
        let preview = Response::PreviewData { data: mask }.to_json();
        assert_eq!(
            preview.ok().as_deref(),
            Some(r#"{"type":"preview-data","data":[[{"active":true,"opacity":0.5}]]}"#)
        );

        let inserted = Response::GridInserted.to_json();
        assert_eq!(inserted.ok().as_deref(), Some(r#"{"type":"grid-inserted"}"#));
    }

    // Tests preview data with ragged rows fails to decode
    // Verified by decoding data without shape validation
    #[test]
    fn test_decode_ragged_preview_data() {
        let text = r#"{"type":"preview-data","data":[[{"active":true,"opacity":0.5}],[]]}"#;

        let result: Result<Response, _> = serde_json::from_str(text);
        assert!(result.is_err());
    }
}
