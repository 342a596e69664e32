use cat_api::ImageResult;

/// One line per image: its `url`, or the raw JSON when it has none.
pub fn render_lines(images: &[ImageResult]) -> Vec<String> {
    images
        .iter()
        .map(|image| match cat_api::image_url(image) {
            Some(url) => url.to_string(),
            None => image.to_string(),
        })
        .collect()
}

pub fn render_json(images: &[ImageResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_lines_prefers_url() {
        let images = vec![
            json!({
                "id": "a",
                "url": "https://cdn2.thecatapi.com/images/a.jpg",
            }),
            json!({ "id": "b" }),
        ];
        assert_eq!(
            render_lines(&images),
            vec![
                "https://cdn2.thecatapi.com/images/a.jpg".to_string(),
                r#"{"id":"b"}"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_render_json_round_trips() {
        let images = vec![json!({ "id": "a", "width": 10 })];
        let rendered = render_json(&images).unwrap();
        let parsed: Vec<ImageResult> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, images);
    }

    #[test]
    fn test_render_empty() {
        assert!(render_lines(&[]).is_empty());
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
